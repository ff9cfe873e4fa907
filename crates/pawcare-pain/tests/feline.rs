use pawcare_pain::scales::fgs::{FeatureScoreSet, FgsFeature};

fn full_set(values: [i64; 5]) -> FeatureScoreSet {
    let mut set = FeatureScoreSet::default();
    for (feature, value) in FgsFeature::ALL.into_iter().zip(values) {
        set.set(feature, Some(value));
    }
    set
}

#[test]
fn sums_valid_feature_scores() {
    let set = full_set([2, 2, 1, 0, 1]);
    assert_eq!(set.score(), 6);
}

#[test]
fn empty_set_scores_zero() {
    let set = FeatureScoreSet::default();
    assert_eq!(set.score(), 0);
    assert_eq!(set.unscored().len(), 5);
}

#[test]
fn maximum_is_ten() {
    assert_eq!(full_set([2, 2, 2, 2, 2]).score(), 10);
}

#[test]
fn out_of_range_values_contribute_nothing() {
    let set = full_set([3, -1, 2, 7, 1]);
    assert_eq!(set.score(), 3);
    assert_eq!(
        set.unscored(),
        vec![
            FgsFeature::EarPosition,
            FgsFeature::OrbitalTightening,
            FgsFeature::WhiskersChange,
        ]
    );
}

#[test]
fn explicit_zero_is_distinguishable_from_unscored() {
    let mut set = FeatureScoreSet::default();
    set.set(FgsFeature::MuzzleTension, Some(0));

    assert_eq!(set.score(), 0);
    assert_eq!(set.valid_score(FgsFeature::MuzzleTension), Some(0));
    assert_eq!(set.valid_score(FgsFeature::HeadPosition), None);
    assert!(!set.unscored().contains(&FgsFeature::MuzzleTension));
    assert!(set.unscored().contains(&FgsFeature::HeadPosition));
}

#[test]
fn deserializes_screen_payload_leniently() {
    let json = r#"{
        "ear_position": 2,
        "orbital_tightening": "2",
        "muzzle_tension": 1.5,
        "whiskers_change": null,
        "head_position": 1
    }"#;

    let set: FeatureScoreSet = serde_json::from_str(json).unwrap();
    assert_eq!(set.ear_position, Some(2));
    assert_eq!(set.orbital_tightening, None);
    assert_eq!(set.muzzle_tension, None);
    assert_eq!(set.whiskers_change, None);
    assert_eq!(set.score(), 3);
}

#[test]
fn missing_fields_are_unscored() {
    let set: FeatureScoreSet = serde_json::from_str(r#"{ "head_position": 2 }"#).unwrap();
    assert_eq!(set.score(), 2);
    assert_eq!(set.unscored().len(), 4);
}

#[test]
fn entries_keep_invalid_values_for_audit() {
    let mut set = FeatureScoreSet::default();
    set.set(FgsFeature::EarPosition, Some(5));
    set.set(FgsFeature::HeadPosition, Some(1));

    let entries = set.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].category_id, "ear_position");
    assert_eq!(entries[0].value, 5);
    assert_eq!(entries[1].category_id, "head_position");
}

#[test]
fn scoring_is_idempotent() {
    let set = full_set([1, 2, 0, 1, 2]);
    assert_eq!(set.score(), set.score());
    assert_eq!(set.unscored(), set.unscored());
}
