use axum::Json;

use pawcare_core::models::record::PainAssessmentRecord;
use pawcare_pain::assessment::{DerivedClassification, LevelSource, derive_from_record};

/// Derive the canonical classification of a record loaded from storage.
pub async fn derive_record(
    Json(record): Json<PainAssessmentRecord>,
) -> Json<DerivedClassification> {
    let derived = derive_from_record(&record);
    if derived.source == LevelSource::CompactScore {
        tracing::info!(
            record_id = %record.id,
            level = %derived.level,
            "pain level reconstructed from compact score"
        );
    }
    Json(derived)
}
