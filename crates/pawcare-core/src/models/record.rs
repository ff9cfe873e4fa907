use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::species::Species;

/// A pain assessment record as loaded back from storage.
///
/// Records written by the prior backend may carry only `pain_score`;
/// records written by the screens may carry free text in `pain_level`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PainAssessmentRecord {
    pub id: Uuid,
    pub pet_id: Uuid,
    pub species: Species,
    #[serde(default)]
    pub pain_level: Option<String>,
    #[serde(default)]
    pub pain_score: Option<i64>,
    #[serde(default)]
    pub recommendations: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub assessed_at: jiff::Timestamp,
}

impl PainAssessmentRecord {
    /// The stored label, if it holds anything besides whitespace.
    pub fn label(&self) -> Option<&str> {
        self.pain_level
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
    }
}
