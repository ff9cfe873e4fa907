//! Reconciles the textual pain labels written by different screens and the
//! previous backend, and the compact 0–2 score that backend persisted.
//!
//! Label parsing runs through [`LABEL_RULES`], an ordered priority table:
//! the first matching rule wins. Several keywords are substrings of each
//! other ("moderate to severe" contains both "moderate" and "severe"), so
//! rule order is part of the contract.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::PainError;
use crate::level::PainLevel;

/// How a rule tests the lowercased, trimmed label.
#[derive(Debug, Clone, Copy)]
pub enum LabelMatcher {
    /// Leading text not directly followed by another digit, so "level 1"
    /// does not claim "level 12".
    Prefix(&'static str),
    Contains(&'static str),
}

impl LabelMatcher {
    pub fn pattern(&self) -> &'static str {
        match self {
            LabelMatcher::Prefix(pattern) | LabelMatcher::Contains(pattern) => *pattern,
        }
    }

    fn matches(&self, label: &str) -> bool {
        match self {
            LabelMatcher::Prefix(prefix) => label
                .strip_prefix(*prefix)
                .is_some_and(|rest| !rest.starts_with(|c: char| c.is_ascii_digit())),
            LabelMatcher::Contains(needle) => label.contains(*needle),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LabelRule {
    pub matcher: LabelMatcher,
    pub level: PainLevel,
}

const fn rule(matcher: LabelMatcher, level: PainLevel) -> LabelRule {
    LabelRule { matcher, level }
}

/// Label rules in precedence order.
pub const LABEL_RULES: &[LabelRule] = &[
    // Canonical "Level N (...)" labels; trailing text is ignored.
    rule(LabelMatcher::Prefix("level 0"), PainLevel::NoPain),
    rule(LabelMatcher::Prefix("level 1"), PainLevel::Mild),
    rule(LabelMatcher::Prefix("level 2"), PainLevel::Moderate),
    rule(LabelMatcher::Prefix("level 3"), PainLevel::ModerateToSevere),
    rule(LabelMatcher::Prefix("level 4"), PainLevel::Severe),
    rule(LabelMatcher::Prefix("level 5"), PainLevel::Worst),
    // Free text and legacy backend labels.
    rule(LabelMatcher::Contains("no pain"), PainLevel::NoPain),
    rule(LabelMatcher::Contains("mild"), PainLevel::Mild),
    rule(LabelMatcher::Contains("moderate to severe"), PainLevel::ModerateToSevere),
    rule(LabelMatcher::Contains("moderate"), PainLevel::Moderate),
    rule(LabelMatcher::Contains("worst"), PainLevel::Worst),
    rule(LabelMatcher::Contains("severe"), PainLevel::Severe),
    // Explicit "could not determine" markers.
    rule(LabelMatcher::Contains("unknown"), PainLevel::Unknown),
    rule(LabelMatcher::Contains("not recognize"), PainLevel::Unknown),
];

/// Map any stored or screen-produced label onto the canonical level.
/// Empty and unrecognized labels are `Unknown`.
pub fn normalize(label: &str) -> PainLevel {
    let label = label.trim().to_lowercase();
    if label.is_empty() {
        return PainLevel::Unknown;
    }

    match LABEL_RULES.iter().find(|r| r.matcher.matches(&label)) {
        Some(rule) => rule.level,
        None => {
            tracing::debug!(label = %label, "unrecognized pain label");
            PainLevel::Unknown
        }
    }
}

/// Legacy 3-bucket pain score persisted by the previous backend.
///
/// This is a one-way projection of [`PainLevel`]: several levels share a
/// compact value, so a compact score alone cannot recover the level. Always
/// persist the label next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "i64", into = "u8")]
#[ts(export)]
pub struct CompactScore(u8);

impl CompactScore {
    pub const NONE: CompactScore = CompactScore(0);
    pub const MODERATE: CompactScore = CompactScore(1);
    pub const SEVERE: CompactScore = CompactScore(2);

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Collapse a canonical level. `Unknown` collapses to 0, the
    /// "could not determine" value at the persistence boundary.
    pub fn from_level(level: PainLevel) -> CompactScore {
        match level {
            PainLevel::NoPain | PainLevel::Unknown => CompactScore::NONE,
            PainLevel::Mild | PainLevel::Moderate => CompactScore::MODERATE,
            PainLevel::ModerateToSevere | PainLevel::Severe | PainLevel::Worst => {
                CompactScore::SEVERE
            }
        }
    }

    /// Collapse a label. Any label mentioning severe or worst pain is 2 even
    /// when its level prefix says otherwise, so the feline
    /// "Level 2 (Moderate/Severe Pain)" bucket persists as 2.
    pub fn from_label(label: &str) -> CompactScore {
        let lowered = label.to_lowercase();
        if lowered.contains("severe") || lowered.contains("worst") {
            return CompactScore::SEVERE;
        }
        CompactScore::from_level(normalize(label))
    }

    /// Approximate label for records that only hold a compact score.
    pub fn approximate_label(&self) -> &'static str {
        self.approximate_level().label()
    }

    /// Approximate level for records that only hold a compact score. The
    /// finer distinctions were discarded when the score was written.
    pub fn approximate_level(&self) -> PainLevel {
        match self.0 {
            0 => PainLevel::NoPain,
            1 => PainLevel::Moderate,
            _ => PainLevel::Severe,
        }
    }
}

impl TryFrom<i64> for CompactScore {
    type Error = PainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0..=2 => Ok(CompactScore(value as u8)),
            other => Err(PainError::InvalidCompactScore(other)),
        }
    }
}

impl From<CompactScore> for u8 {
    fn from(score: CompactScore) -> Self {
        score.0
    }
}

impl fmt::Display for CompactScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
