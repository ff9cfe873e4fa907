use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Canonical pain classification shared by every species and screen.
///
/// Levels 0–5 are totally ordered. `Unknown` means the level could not be
/// determined and compares as neither lower nor higher than any level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PainLevel {
    NoPain,
    Mild,
    Moderate,
    ModerateToSevere,
    Severe,
    Worst,
    Unknown,
}

impl PainLevel {
    pub const ALL: [PainLevel; 6] = [
        PainLevel::NoPain,
        PainLevel::Mild,
        PainLevel::Moderate,
        PainLevel::ModerateToSevere,
        PainLevel::Severe,
        PainLevel::Worst,
    ];

    /// Position in the 0–5 order, `None` for `Unknown`.
    pub fn ordinal(&self) -> Option<u8> {
        match self {
            PainLevel::NoPain => Some(0),
            PainLevel::Mild => Some(1),
            PainLevel::Moderate => Some(2),
            PainLevel::ModerateToSevere => Some(3),
            PainLevel::Severe => Some(4),
            PainLevel::Worst => Some(5),
            PainLevel::Unknown => None,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Option<PainLevel> {
        Self::ALL.get(ordinal as usize).copied()
    }

    /// The canonical display and storage label.
    pub fn label(&self) -> &'static str {
        match self {
            PainLevel::NoPain => "Level 0 (No Pain)",
            PainLevel::Mild => "Level 1 (Mild Pain)",
            PainLevel::Moderate => "Level 2 (Moderate Pain)",
            PainLevel::ModerateToSevere => "Level 3 (Moderate to Severe Pain)",
            PainLevel::Severe => "Level 4 (Severe Pain)",
            PainLevel::Worst => "Level 5 (Worst Pain Possible)",
            PainLevel::Unknown => "Unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        self.ordinal().is_some()
    }
}

impl PartialOrd for PainLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.ordinal(), other.ordinal()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            (None, None) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl fmt::Display for PainLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three clinically validated Feline Grimace Scale buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FelineBucket {
    NoPain,
    Mild,
    ModerateSevere,
}

impl FelineBucket {
    pub fn index(&self) -> u8 {
        match self {
            FelineBucket::NoPain => 0,
            FelineBucket::Mild => 1,
            FelineBucket::ModerateSevere => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FelineBucket::NoPain => "Level 0 (No Pain)",
            FelineBucket::Mild => "Level 1 (Mild Pain)",
            FelineBucket::ModerateSevere => "Level 2 (Moderate/Severe Pain)",
        }
    }

    /// Canonical level for this bucket. The top bucket lands on `Moderate`;
    /// the feline scale does not resolve anything above it.
    pub fn level(&self) -> PainLevel {
        match self {
            FelineBucket::NoPain => PainLevel::NoPain,
            FelineBucket::Mild => PainLevel::Mild,
            FelineBucket::ModerateSevere => PainLevel::Moderate,
        }
    }
}

/// A classification at the resolution of the scale that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "species", rename_all = "snake_case")]
#[ts(export)]
pub enum ScaleBucket {
    Feline { bucket: FelineBucket },
    Canine { level: PainLevel },
}

impl ScaleBucket {
    pub fn level(&self) -> PainLevel {
        match self {
            ScaleBucket::Feline { bucket } => bucket.level(),
            ScaleBucket::Canine { level } => *level,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScaleBucket::Feline { bucket } => bucket.label(),
            ScaleBucket::Canine { level } => level.label(),
        }
    }
}

impl From<FelineBucket> for ScaleBucket {
    fn from(bucket: FelineBucket) -> Self {
        ScaleBucket::Feline { bucket }
    }
}
