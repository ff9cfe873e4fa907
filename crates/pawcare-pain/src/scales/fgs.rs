use pawcare_core::models::species::Species;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::PainScale;
use crate::scoring::{Category, ScoreEntry, ScoreRange, lenient_score};

/// Highest total the grimace scale can produce (5 features × 2).
pub const FGS_MAX_TOTAL: u8 = 10;

const FEATURE_RANGE: ScoreRange = ScoreRange { min: 0, max: 2 };

/// FGS: Feline Grimace Scale.
/// 5 facial action units, each scored 0 (absent), 1 (moderately present)
/// or 2 (obviously present). Total 0–10.
pub struct FelineGrimaceScale;

impl PainScale for FelineGrimaceScale {
    fn id(&self) -> &str {
        "fgs"
    }

    fn name(&self) -> &str {
        "Feline Grimace Scale"
    }

    fn species(&self) -> Species {
        Species::Cat
    }

    fn categories(&self) -> &[Category] {
        static CATEGORIES: std::sync::LazyLock<Vec<Category>> = std::sync::LazyLock::new(|| {
            FgsFeature::ALL
                .iter()
                .map(|feature| Category {
                    id: feature.id().to_string(),
                    name: feature.name().to_string(),
                    range: FEATURE_RANGE,
                    description: Some(feature.description().to_string()),
                })
                .collect()
        });
        &CATEGORIES
    }
}

/// The five facial action units of the grimace scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FgsFeature {
    EarPosition,
    OrbitalTightening,
    MuzzleTension,
    WhiskersChange,
    HeadPosition,
}

impl FgsFeature {
    pub const ALL: [FgsFeature; 5] = [
        FgsFeature::EarPosition,
        FgsFeature::OrbitalTightening,
        FgsFeature::MuzzleTension,
        FgsFeature::WhiskersChange,
        FgsFeature::HeadPosition,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            FgsFeature::EarPosition => "ear_position",
            FgsFeature::OrbitalTightening => "orbital_tightening",
            FgsFeature::MuzzleTension => "muzzle_tension",
            FgsFeature::WhiskersChange => "whiskers_change",
            FgsFeature::HeadPosition => "head_position",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FgsFeature::EarPosition => "Ear Position",
            FgsFeature::OrbitalTightening => "Orbital Tightening",
            FgsFeature::MuzzleTension => "Muzzle Tension",
            FgsFeature::WhiskersChange => "Whiskers Change",
            FgsFeature::HeadPosition => "Head Position",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            FgsFeature::EarPosition => "Ears facing forward (0) to flattened and rotated outwards (2)",
            FgsFeature::OrbitalTightening => "Eyes open (0) to squinted or closed (2)",
            FgsFeature::MuzzleTension => "Relaxed round muzzle (0) to tense elliptical muzzle (2)",
            FgsFeature::WhiskersChange => "Loose curved whiskers (0) to straight whiskers pointing forward (2)",
            FgsFeature::HeadPosition => "Head above shoulder line (0) to below shoulders or tilted down (2)",
        }
    }
}

/// Feature scores entered for one feline assessment.
///
/// `None` means the feature was not scored. Values outside 0–2 are kept as
/// entered so they can be audited, and count as unscored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeatureScoreSet {
    #[serde(default, deserialize_with = "lenient_score")]
    pub ear_position: Option<i64>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub orbital_tightening: Option<i64>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub muzzle_tension: Option<i64>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub whiskers_change: Option<i64>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub head_position: Option<i64>,
}

impl FeatureScoreSet {
    /// The value as entered, valid or not.
    pub fn raw(&self, feature: FgsFeature) -> Option<i64> {
        match feature {
            FgsFeature::EarPosition => self.ear_position,
            FgsFeature::OrbitalTightening => self.orbital_tightening,
            FgsFeature::MuzzleTension => self.muzzle_tension,
            FgsFeature::WhiskersChange => self.whiskers_change,
            FgsFeature::HeadPosition => self.head_position,
        }
    }

    pub fn set(&mut self, feature: FgsFeature, value: Option<i64>) {
        let slot = match feature {
            FgsFeature::EarPosition => &mut self.ear_position,
            FgsFeature::OrbitalTightening => &mut self.orbital_tightening,
            FgsFeature::MuzzleTension => &mut self.muzzle_tension,
            FgsFeature::WhiskersChange => &mut self.whiskers_change,
            FgsFeature::HeadPosition => &mut self.head_position,
        };
        *slot = value;
    }

    /// The score if it is exactly 0, 1 or 2.
    pub fn valid_score(&self, feature: FgsFeature) -> Option<u8> {
        self.raw(feature)
            .filter(|v| FEATURE_RANGE.contains(*v))
            .map(|v| v as u8)
    }

    /// Features that contribute nothing because they were left blank or
    /// entered out of range. An explicit 0 is scored and not listed here.
    pub fn unscored(&self) -> Vec<FgsFeature> {
        FgsFeature::ALL
            .into_iter()
            .filter(|f| self.valid_score(*f).is_none())
            .collect()
    }

    /// Sum of valid feature scores, clamped to 0–10.
    pub fn score(&self) -> u8 {
        let total: u8 = FgsFeature::ALL
            .iter()
            .filter_map(|f| self.valid_score(*f))
            .sum();
        total.min(FGS_MAX_TOTAL)
    }

    /// Entries for every feature that was filled in, including invalid ones.
    pub fn entries(&self) -> Vec<ScoreEntry> {
        FgsFeature::ALL
            .iter()
            .filter_map(|f| {
                self.raw(*f).map(|value| ScoreEntry {
                    category_id: f.id().to_string(),
                    value,
                })
            })
            .collect()
    }
}
