use pawcare_core::models::record::PainAssessmentRecord;
use pawcare_core::models::species::Species;
use pawcare_pain::advice::{RETRY_MESSAGE, UNKNOWN_SEVERITY};
use pawcare_pain::assessment::{
    LEGACY_SCALE_ID, LevelSource, assess_canine, assess_feline, assess_legacy_indices,
    derive_from_record,
};
use pawcare_pain::level::{FelineBucket, PainLevel, ScaleBucket};
use pawcare_pain::normalize::{CompactScore, normalize};
use pawcare_pain::scales::beaap::CategorySelection;
use pawcare_pain::scales::fgs::FeatureScoreSet;

fn record(pain_level: Option<&str>, pain_score: Option<i64>) -> PainAssessmentRecord {
    PainAssessmentRecord {
        id: uuid::Uuid::new_v4(),
        pet_id: uuid::Uuid::new_v4(),
        species: Species::Dog,
        pain_level: pain_level.map(str::to_string),
        pain_score,
        recommendations: None,
        notes: None,
        assessed_at: jiff::Timestamp::UNIX_EPOCH,
    }
}

#[test]
fn canine_end_to_end() {
    let selection = CategorySelection::new(vec![
        vec![0],
        vec![1],
        vec![2],
        vec![1],
        vec![0],
        vec![2],
        vec![1],
        vec![0],
    ]);

    let outcome = assess_canine(&selection);
    assert_eq!(outcome.breakdown, vec![0, 1, 2, 1, 0, 2, 1, 0]);
    assert_eq!(outcome.total, 7);
    assert_eq!(outcome.max_total, 40);
    assert_eq!(outcome.level, PainLevel::Mild);
    assert_eq!(outcome.label(), "Level 1 (Mild Pain)");

    let payload = outcome.to_payload();
    assert_eq!(payload.pain_level, "Level 1 (Mild Pain)");
    assert_eq!(payload.pain_score, 1);
    assert_eq!(payload.recommendations, outcome.advice.text);

    let display = outcome.display();
    assert_eq!(display.score_text, "7/40");
    assert_eq!(display.style_severity, 1);
}

#[test]
fn feline_end_to_end() {
    let features: FeatureScoreSet = serde_json::from_str(
        r#"{
            "ear_position": 2,
            "orbital_tightening": 2,
            "muzzle_tension": 1,
            "whiskers_change": 0,
            "head_position": 1
        }"#,
    )
    .unwrap();

    let outcome = assess_feline(&features);
    assert_eq!(outcome.total, 6);
    assert_eq!(outcome.max_total, 10);
    assert_eq!(outcome.breakdown, vec![2, 2, 1, 0, 1]);
    assert_eq!(
        outcome.bucket,
        ScaleBucket::Feline {
            bucket: FelineBucket::ModerateSevere
        }
    );
    assert_eq!(outcome.label(), "Level 2 (Moderate/Severe Pain)");
    assert_eq!(outcome.level, PainLevel::Moderate);
    assert_eq!(outcome.display().score_text, "6/10");

    let payload = outcome.to_payload();
    assert_eq!(payload.pain_level, "Level 2 (Moderate/Severe Pain)");
    assert_eq!(payload.pain_score, 2);
}

#[test]
fn feline_payload_label_normalizes_back_to_level_two() {
    let mut features = FeatureScoreSet::default();
    features.ear_position = Some(2);
    features.orbital_tightening = Some(2);
    features.muzzle_tension = Some(2);

    let payload = assess_feline(&features).to_payload();
    assert_eq!(normalize(&payload.pain_level), PainLevel::Moderate);
}

#[test]
fn feline_invalid_scores_degrade_to_zero() {
    let mut features = FeatureScoreSet::default();
    features.ear_position = Some(9);
    features.head_position = Some(1);

    let outcome = assess_feline(&features);
    assert_eq!(outcome.total, 1);
    assert_eq!(outcome.breakdown, vec![0, 0, 0, 0, 1]);
    assert_eq!(outcome.level, PainLevel::NoPain);
}

#[test]
fn assessments_are_idempotent() {
    let selection = CategorySelection::new(vec![vec![3, 1], vec![4], vec![], vec![5]]);
    let first = assess_canine(&selection);
    let second = assess_canine(&selection);
    assert_eq!(first, second);
    assert_eq!(first.to_payload(), second.to_payload());
}

#[test]
fn canine_monotonic_in_levels() {
    let mut previous = PainLevel::NoPain;
    for index in 0..=5 {
        let selection = CategorySelection::new(vec![vec![index]; 8]);
        let level = assess_canine(&selection).level;
        assert!(level >= previous);
        previous = level;
    }
    assert_eq!(previous, PainLevel::Worst);
}

#[test]
fn legacy_indices_use_average_mapping() {
    let outcome = assess_legacy_indices(&[2, 3, 9]);
    assert_eq!(outcome.scale_id, LEGACY_SCALE_ID);
    assert_eq!(outcome.level, PainLevel::Moderate);
    assert_eq!(outcome.breakdown, vec![2, 3]);
    assert_eq!(outcome.display().score_text, "5/10");
}

#[test]
fn legacy_empty_is_unknown_with_retry_advice() {
    let outcome = assess_legacy_indices(&[]);
    assert_eq!(outcome.level, PainLevel::Unknown);
    assert_eq!(outcome.advice.text, RETRY_MESSAGE);
    assert_eq!(outcome.display().style_severity, UNKNOWN_SEVERITY);

    let payload = outcome.to_payload();
    assert_eq!(payload.pain_level, "Unknown");
    assert_eq!(payload.pain_score, 0);
}

#[test]
fn record_label_wins_over_score() {
    let derived = derive_from_record(&record(Some("Level 5 (Worst Pain Possible)"), Some(0)));
    assert_eq!(derived.level, PainLevel::Worst);
    assert_eq!(derived.source, LevelSource::Label);
    assert!(!derived.approximate);
}

#[test]
fn record_with_only_score_is_approximate() {
    let derived = derive_from_record(&record(None, Some(1)));
    assert_eq!(derived.level, PainLevel::Moderate);
    assert_eq!(derived.label, "Level 2 (Moderate Pain)");
    assert_eq!(derived.source, LevelSource::CompactScore);
    assert!(derived.approximate);
}

#[test]
fn record_blank_label_falls_back_to_score() {
    let derived = derive_from_record(&record(Some("  "), Some(2)));
    assert_eq!(derived.level, PainLevel::Severe);
    assert_eq!(derived.source, LevelSource::CompactScore);
}

#[test]
fn record_numeric_label_is_read_as_compact_code() {
    let derived = derive_from_record(&record(Some("0"), Some(2)));
    assert_eq!(derived.level, PainLevel::NoPain);
    assert_eq!(derived.source, LevelSource::CompactScore);
}

#[test]
fn record_garbled_label_is_unknown() {
    let derived = derive_from_record(&record(Some("garbled-nonsense"), Some(2)));
    assert_eq!(derived.level, PainLevel::Unknown);
    assert_eq!(derived.source, LevelSource::Label);
    assert_eq!(derived.advice.text, RETRY_MESSAGE);
    assert_eq!(derived.advice.style_severity, UNKNOWN_SEVERITY);
}

#[test]
fn record_with_nothing_or_bad_score_is_missing() {
    let empty = derive_from_record(&record(None, None));
    assert_eq!(empty.level, PainLevel::Unknown);
    assert_eq!(empty.source, LevelSource::Missing);

    let bad = derive_from_record(&record(None, Some(7)));
    assert_eq!(bad.level, PainLevel::Unknown);
    assert_eq!(bad.source, LevelSource::Missing);
}

#[test]
fn lossy_persistence_path_is_consistent() {
    let label = "Moderate to severe pain observed";
    let level = normalize(label);
    assert_eq!(level, PainLevel::ModerateToSevere);

    let compact = CompactScore::from_level(level);
    let restored = derive_from_record(&record(None, Some(i64::from(compact.value()))));
    assert_eq!(restored.level, PainLevel::Severe);

    let again = derive_from_record(&record(None, Some(i64::from(compact.value()))));
    assert_eq!(restored, again);
}

#[test]
fn legacy_total_saturates_on_very_long_index_lists() {
    let outcome = assess_legacy_indices(&vec![5_i64; 13_108]);
    assert_eq!(outcome.total, u16::MAX);
    assert_eq!(outcome.max_total, u16::MAX);
    assert_eq!(outcome.level, PainLevel::Worst);
    assert_eq!(outcome.breakdown.len(), 13_108);
}
