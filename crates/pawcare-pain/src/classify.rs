//! Numeric totals and legacy index lists to pain levels.
//!
//! Every function here is total: out-of-range input is clamped into the
//! nearest band and input that carries no information yields
//! [`PainLevel::Unknown`].

use crate::level::{FelineBucket, PainLevel};
use crate::normalize;
use crate::scales::beaap::BEAAP_MAX_TOTAL;
use crate::scales::fgs::FGS_MAX_TOTAL;

/// Upper bound (inclusive) of each canine band.
const CANINE_BANDS: [(i64, PainLevel); 6] = [
    (3, PainLevel::NoPain),
    (12, PainLevel::Mild),
    (20, PainLevel::Moderate),
    (28, PainLevel::ModerateToSevere),
    (36, PainLevel::Severe),
    (40, PainLevel::Worst),
];

/// Representative 0–10 pain score for each legacy severity index.
const LEGACY_ANCHORS: [f64; 6] = [0.0, 1.5, 3.5, 5.5, 7.5, 9.5];

/// Upper bound (inclusive) of each legacy average band; above the last is
/// `Worst`.
const LEGACY_BANDS: [(f64, PainLevel); 5] = [
    (0.75, PainLevel::NoPain),
    (2.5, PainLevel::Mild),
    (4.5, PainLevel::Moderate),
    (6.5, PainLevel::ModerateToSevere),
    (8.5, PainLevel::Severe),
];

/// Bucket a Feline Grimace Scale total (0–10).
pub fn classify_feline_total(total: i64) -> FelineBucket {
    match total.clamp(0, i64::from(FGS_MAX_TOTAL)) {
        0..=2 => FelineBucket::NoPain,
        3..=5 => FelineBucket::Mild,
        _ => FelineBucket::ModerateSevere,
    }
}

/// Classify a BEAAP total (0–40). Totals above 40 land on `Worst`.
pub fn classify_canine_total(total: i64) -> PainLevel {
    let total = total.clamp(0, i64::from(BEAAP_MAX_TOTAL));
    CANINE_BANDS
        .iter()
        .find(|(upper, _)| total <= *upper)
        .map_or(PainLevel::Worst, |(_, level)| *level)
}

/// Average-based classification for older assessments that stored a flat
/// list of per-item severity indices instead of per-category selections.
///
/// Indices outside 0–5 are skipped. An empty list, or one with no valid
/// index, is `Unknown`.
pub fn classify_legacy_indices(indices: &[i64]) -> PainLevel {
    let anchors: Vec<f64> = indices
        .iter()
        .filter_map(|i| usize::try_from(*i).ok().and_then(|i| LEGACY_ANCHORS.get(i)))
        .copied()
        .collect();

    let skipped = indices.len() - anchors.len();
    if skipped > 0 {
        tracing::debug!(skipped, "ignoring out-of-range legacy severity indices");
    }
    if anchors.is_empty() {
        return PainLevel::Unknown;
    }

    let average = anchors.iter().sum::<f64>() / anchors.len() as f64;
    legacy_level_for_average(average)
}

/// Bucket a 0–10 legacy average.
pub fn legacy_level_for_average(average: f64) -> PainLevel {
    if average.is_nan() {
        return PainLevel::Unknown;
    }
    LEGACY_BANDS
        .iter()
        .find(|(upper, _)| average <= *upper)
        .map_or(PainLevel::Worst, |(_, level)| *level)
}

/// Classify a label already produced by a screen or a previous backend.
pub fn classify_label(label: Option<&str>) -> PainLevel {
    label.map_or(PainLevel::Unknown, normalize::normalize)
}
