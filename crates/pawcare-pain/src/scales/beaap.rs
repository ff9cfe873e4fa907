use pawcare_core::models::species::Species;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::PainScale;
use crate::scoring::{Category, ScoreEntry, ScoreRange, lenient_indices};

/// Highest total BEAAP can produce (8 categories × 5).
pub const BEAAP_MAX_TOTAL: u8 = 40;

const INDEX_RANGE: ScoreRange = ScoreRange { min: 0, max: 5 };

/// BEAAP: Breathing, Eyes, Ambulation, Activity, Appetite, Attitude,
/// Posture, Palpation. Each category shows six reference images ordered by
/// severity; the selected image index is the category's severity rung (0–5).
pub struct Beaap;

impl PainScale for Beaap {
    fn id(&self) -> &str {
        "beaap"
    }

    fn name(&self) -> &str {
        "BEAAP Canine Pain Scale"
    }

    fn species(&self) -> Species {
        Species::Dog
    }

    fn categories(&self) -> &[Category] {
        static CATEGORIES: std::sync::LazyLock<Vec<Category>> = std::sync::LazyLock::new(|| {
            BeaapCategory::ALL
                .iter()
                .map(|category| Category {
                    id: category.id().to_string(),
                    name: category.name().to_string(),
                    range: INDEX_RANGE,
                    description: None,
                })
                .collect()
        });
        &CATEGORIES
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BeaapCategory {
    Breathing,
    Eyes,
    Ambulation,
    Activity,
    Appetite,
    Attitude,
    Posture,
    Palpation,
}

impl BeaapCategory {
    /// Fixed category order; the outer index of a selection list.
    pub const ALL: [BeaapCategory; 8] = [
        BeaapCategory::Breathing,
        BeaapCategory::Eyes,
        BeaapCategory::Ambulation,
        BeaapCategory::Activity,
        BeaapCategory::Appetite,
        BeaapCategory::Attitude,
        BeaapCategory::Posture,
        BeaapCategory::Palpation,
    ];

    pub fn position(&self) -> usize {
        *self as usize
    }

    pub fn id(&self) -> &'static str {
        match self {
            BeaapCategory::Breathing => "breathing",
            BeaapCategory::Eyes => "eyes",
            BeaapCategory::Ambulation => "ambulation",
            BeaapCategory::Activity => "activity",
            BeaapCategory::Appetite => "appetite",
            BeaapCategory::Attitude => "attitude",
            BeaapCategory::Posture => "posture",
            BeaapCategory::Palpation => "palpation",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BeaapCategory::Breathing => "Breathing",
            BeaapCategory::Eyes => "Eyes",
            BeaapCategory::Ambulation => "Ambulation",
            BeaapCategory::Activity => "Activity",
            BeaapCategory::Appetite => "Appetite",
            BeaapCategory::Attitude => "Attitude",
            BeaapCategory::Posture => "Posture",
            BeaapCategory::Palpation => "Palpation",
        }
    }
}

/// Image indices selected per category, outer index in
/// [`BeaapCategory::ALL`] order. Missing trailing categories count as empty
/// and anything past the eighth list is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategorySelection {
    #[serde(default, deserialize_with = "lenient_indices")]
    pub selections: Vec<Vec<i64>>,
}

impl CategorySelection {
    pub fn new(selections: Vec<Vec<i64>>) -> Self {
        Self { selections }
    }

    pub fn for_category(&self, category: BeaapCategory) -> &[i64] {
        self.selections
            .get(category.position())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Worst-case contribution of one category: the highest valid selected
    /// index, or 0 when nothing valid was selected.
    pub fn contribution(&self, category: BeaapCategory) -> u8 {
        self.for_category(category)
            .iter()
            .copied()
            .filter(|i| INDEX_RANGE.contains(*i))
            .max()
            .map_or(0, |i| i as u8)
    }

    /// Reduce the selections to per-category contributions and a total.
    pub fn aggregate(&self) -> CategoryBreakdown {
        let mut contributions = Vec::with_capacity(BeaapCategory::ALL.len());
        let mut empty_categories = Vec::new();
        let mut discarded_indices = 0;

        for category in BeaapCategory::ALL {
            let selected = self.for_category(category);
            let valid = selected.iter().filter(|i| INDEX_RANGE.contains(**i)).count();
            discarded_indices += selected.len() - valid;
            if valid == 0 {
                empty_categories.push(category);
            }
            contributions.push(self.contribution(category));
        }

        let total: u8 = contributions.iter().sum();
        CategoryBreakdown {
            contributions,
            total,
            empty_categories,
            discarded_indices,
        }
    }

    /// One entry per selected index, in category order.
    pub fn entries(&self) -> Vec<ScoreEntry> {
        BeaapCategory::ALL
            .iter()
            .flat_map(|category| {
                self.for_category(*category).iter().map(|value| ScoreEntry {
                    category_id: category.id().to_string(),
                    value: *value,
                })
            })
            .collect()
    }
}

/// Result of aggregating a [`CategorySelection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryBreakdown {
    /// Per-category contribution in [`BeaapCategory::ALL`] order.
    pub contributions: Vec<u8>,
    /// Sum of contributions, 0–40.
    pub total: u8,
    /// Categories with no valid selection.
    pub empty_categories: Vec<BeaapCategory>,
    /// Selected indices outside 0–5 that were ignored.
    pub discarded_indices: usize,
}

impl CategoryBreakdown {
    /// A breakdown deserialized with fewer entries reports 0 for the
    /// missing categories.
    pub fn contribution(&self, category: BeaapCategory) -> u8 {
        self.contributions
            .get(category.position())
            .copied()
            .unwrap_or(0)
    }
}
