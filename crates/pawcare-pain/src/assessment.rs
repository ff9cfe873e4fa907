//! End-to-end assessment: observations in, display summary and persistence
//! payload out.

use pawcare_core::models::payload::PainPayload;
use pawcare_core::models::record::PainAssessmentRecord;
use pawcare_core::models::species::Species;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::PainScale;
use crate::advice::{Advice, advise};
use crate::classify::{classify_canine_total, classify_feline_total, classify_legacy_indices};
use crate::level::{PainLevel, ScaleBucket};
use crate::normalize::{CompactScore, normalize};
use crate::scales::beaap::{Beaap, CategorySelection};
use crate::scales::fgs::{FeatureScoreSet, FelineGrimaceScale, FgsFeature};
use crate::scoring::ScoreEntry;

/// Scale id reported for the legacy average-based path.
pub const LEGACY_SCALE_ID: &str = "beaap_legacy";

/// The result of one assessment attempt. Recomputing from the same
/// observations always yields an equal outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PainOutcome {
    pub species: Species,
    pub scale_id: String,
    pub bucket: ScaleBucket,
    pub level: PainLevel,
    pub total: u16,
    pub max_total: u16,
    /// Per-category contributions (BEAAP), per-feature scores (FGS) or the
    /// valid legacy indices.
    pub breakdown: Vec<u8>,
    pub advice: Advice,
}

/// What the assessment screens render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DisplaySummary {
    pub label: String,
    /// Total with denominator, e.g. "23/40".
    pub score_text: String,
    pub breakdown: Vec<u8>,
    pub advice_text: String,
    pub style_severity: i8,
}

impl PainOutcome {
    fn new(
        species: Species,
        scale_id: &str,
        bucket: ScaleBucket,
        total: u16,
        max_total: u16,
        breakdown: Vec<u8>,
    ) -> Self {
        let level = bucket.level();
        Self {
            species,
            scale_id: scale_id.to_string(),
            bucket,
            level,
            total,
            max_total,
            breakdown,
            advice: advise(level, species),
        }
    }

    /// Label at the producing scale's resolution.
    pub fn label(&self) -> &'static str {
        self.bucket.label()
    }

    pub fn display(&self) -> DisplaySummary {
        DisplaySummary {
            label: self.label().to_string(),
            score_text: format!("{}/{}", self.total, self.max_total),
            breakdown: self.breakdown.clone(),
            advice_text: self.advice.text.clone(),
            style_severity: self.advice.style_severity,
        }
    }

    /// The save/update payload: label plus compact score, never the ordinal.
    pub fn to_payload(&self) -> PainPayload {
        PainPayload {
            pain_level: self.label().to_string(),
            pain_score: CompactScore::from_label(self.label()).value(),
            recommendations: self.advice.text.clone(),
        }
    }
}

fn log_invalid_entries(scale: &dyn PainScale, entries: &[ScoreEntry]) {
    for error in scale.validate_entries(entries) {
        tracing::debug!(
            scale = scale.id(),
            category = %error.category_id,
            value = error.value,
            "{error}"
        );
    }
}

/// Score and classify a feline grimace assessment.
pub fn assess_feline(features: &FeatureScoreSet) -> PainOutcome {
    let scale = FelineGrimaceScale;
    log_invalid_entries(&scale, &features.entries());

    let total = features.score();
    let bucket = classify_feline_total(i64::from(total));
    let breakdown = FgsFeature::ALL
        .iter()
        .map(|f| features.valid_score(*f).unwrap_or(0))
        .collect();

    PainOutcome::new(
        Species::Cat,
        scale.id(),
        bucket.into(),
        u16::from(total),
        scale.max_total(),
        breakdown,
    )
}

/// Aggregate and classify a canine BEAAP assessment.
pub fn assess_canine(selection: &CategorySelection) -> PainOutcome {
    let scale = Beaap;
    log_invalid_entries(&scale, &selection.entries());

    let breakdown = selection.aggregate();
    let level = classify_canine_total(i64::from(breakdown.total));

    PainOutcome::new(
        Species::Dog,
        scale.id(),
        ScaleBucket::Canine { level },
        u16::from(breakdown.total),
        scale.max_total(),
        breakdown.contributions,
    )
}

/// Classify an older canine assessment stored as a flat list of per-item
/// severity indices, using the average-based mapping.
pub fn assess_legacy_indices(indices: &[i64]) -> PainOutcome {
    let level = classify_legacy_indices(indices);
    let valid: Vec<u8> = indices
        .iter()
        .filter(|i| (0..=5).contains(*i))
        .map(|i| *i as u8)
        .collect();
    let total = valid
        .iter()
        .fold(0u16, |acc, i| acc.saturating_add(u16::from(*i)));
    let max_total = u16::try_from(valid.len() * 5).unwrap_or(u16::MAX);

    PainOutcome::new(
        Species::Dog,
        LEGACY_SCALE_ID,
        ScaleBucket::Canine { level },
        total,
        max_total,
        valid,
    )
}

/// Where a derived classification came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LevelSource {
    /// Parsed from the stored label string.
    Label,
    /// Reconstructed from the compact score; an approximation.
    CompactScore,
    /// Nothing usable was stored.
    Missing,
}

/// Classification derived from a record loaded back from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DerivedClassification {
    pub level: PainLevel,
    pub label: String,
    pub source: LevelSource,
    /// True when the level was reconstructed from a compact score and may
    /// be coarser than what was originally assessed.
    pub approximate: bool,
    pub advice: Advice,
}

/// Derive the canonical classification of a stored record.
///
/// A stored label always wins over the compact score. A label made only of
/// digits is a numeric code written by an older screen and is read as a
/// compact score.
pub fn derive_from_record(record: &PainAssessmentRecord) -> DerivedClassification {
    let numeric_label = record
        .label()
        .filter(|label| label.chars().all(|c| c.is_ascii_digit()))
        .and_then(|label| label.parse::<i64>().ok());

    let (level, source) = match (record.label(), numeric_label.or(record.pain_score)) {
        (Some(label), _) if numeric_label.is_none() => (normalize(label), LevelSource::Label),
        (_, Some(score)) => match CompactScore::try_from(score) {
            Ok(compact) => (compact.approximate_level(), LevelSource::CompactScore),
            Err(e) => {
                tracing::debug!(record_id = %record.id, "{e}");
                (PainLevel::Unknown, LevelSource::Missing)
            }
        },
        _ => (PainLevel::Unknown, LevelSource::Missing),
    };

    DerivedClassification {
        level,
        label: level.label().to_string(),
        source,
        approximate: source == LevelSource::CompactScore,
        advice: advise(level, record.species),
    }
}
