use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The species a pain assessment was recorded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Species {
    Cat,
    Dog,
}

impl Species {
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Cat => "cat",
            Species::Dog => "dog",
        }
    }

    /// Noun used in owner-facing text ("your cat").
    pub fn noun(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = CoreError;

    /// Accepts the screen values ("cat", "dog") and the clinical terms
    /// ("feline", "canine"), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cat" | "feline" => Ok(Species::Cat),
            "dog" | "canine" => Ok(Species::Dog),
            _ => Err(CoreError::UnsupportedSpecies(s.to_string())),
        }
    }
}
