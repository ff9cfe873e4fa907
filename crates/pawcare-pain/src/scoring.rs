use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Defines the valid inclusive range for a single observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: i64,
    pub max: i64,
}

impl ScoreRange {
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// A feature or category observed by a pain scale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub range: ScoreRange,
    pub description: Option<String>,
}

/// A single recorded observation, as entered on an assessment screen.
///
/// Multi-select scales produce one entry per selected value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreEntry {
    pub category_id: String,
    pub value: i64,
}

/// An observation outside its category's range. Reported for audit only;
/// scoring treats the observation as absent.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub category_id: String,
    pub value: i64,
    pub expected_range: ScoreRange,
    pub message: String,
}

/// Deserialize an optional integer score, mapping anything that is not an
/// integer (strings, floats, null) to `None`.
pub(crate) fn lenient_score<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(serde_json::Value::as_i64))
}

/// Deserialize per-category index lists. A category that is not an array
/// becomes empty and non-integer indices are dropped.
pub(crate) fn lenient_indices<'de, D>(deserializer: D) -> Result<Vec<Vec<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(serde_json::Value::Array(categories)) = value else {
        return Ok(Vec::new());
    };

    Ok(categories
        .iter()
        .map(|category| match category {
            serde_json::Value::Array(indices) => {
                indices.iter().filter_map(serde_json::Value::as_i64).collect()
            }
            _ => Vec::new(),
        })
        .collect())
}
