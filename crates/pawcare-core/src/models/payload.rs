use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The shape the save/update record call expects.
///
/// Only the label string and the compact 0–2 score cross this boundary;
/// the 6-level ordinal never does. The label is always stored next to the
/// compact score so later reads can skip the lossy reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PainPayload {
    pub pain_level: String,
    pub pain_score: u8,
    pub recommendations: String,
}
