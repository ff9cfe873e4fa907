use axum::Json;
use serde::{Deserialize, Serialize};

use pawcare_core::models::payload::PainPayload;
use pawcare_pain::assessment::{self, DisplaySummary, PainOutcome};
use pawcare_pain::scales::beaap::CategorySelection;
use pawcare_pain::scales::fgs::FeatureScoreSet;

#[derive(Deserialize)]
pub struct LegacyAssessmentRequest {
    #[serde(default)]
    pub indices: Vec<i64>,
}

/// Everything a screen needs after an assessment: the full outcome, what to
/// render, and the body for the save/update record call.
#[derive(Serialize)]
pub struct AssessmentResponse {
    pub outcome: PainOutcome,
    pub display: DisplaySummary,
    pub payload: PainPayload,
}

fn respond(outcome: PainOutcome) -> Json<AssessmentResponse> {
    tracing::info!(
        scale = %outcome.scale_id,
        level = %outcome.level,
        total = outcome.total,
        "pain assessment classified"
    );
    Json(AssessmentResponse {
        display: outcome.display(),
        payload: outcome.to_payload(),
        outcome,
    })
}

pub async fn assess_feline(Json(features): Json<FeatureScoreSet>) -> Json<AssessmentResponse> {
    respond(assessment::assess_feline(&features))
}

pub async fn assess_canine(
    Json(selection): Json<CategorySelection>,
) -> Json<AssessmentResponse> {
    respond(assessment::assess_canine(&selection))
}

pub async fn assess_legacy(
    Json(req): Json<LegacyAssessmentRequest>,
) -> Json<AssessmentResponse> {
    respond(assessment::assess_legacy_indices(&req.indices))
}
