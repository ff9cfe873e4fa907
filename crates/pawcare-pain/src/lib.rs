//! pawcare-pain
//!
//! Pain-level classification and recommendation engine. Pure functions, no
//! storage or UI dependency. Turns feline grimace scores and canine BEAAP
//! selections into the canonical 6-level classification, reconciles stored
//! labels from older screens and backends, and resolves owner advice.

pub mod advice;
pub mod assessment;
pub mod classify;
pub mod error;
pub mod level;
pub mod normalize;
pub mod scales;
pub mod scoring;

use pawcare_core::models::species::Species;

use error::PainError;
use scoring::{Category, ScoreEntry, ValidationError};

/// Trait implemented by each supported pain scale.
pub trait PainScale: Send + Sync {
    /// Unique identifier for this scale (e.g., "fgs", "beaap").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Feline Grimace Scale").
    fn name(&self) -> &str;

    /// The species this scale is administered to.
    fn species(&self) -> Species;

    /// The features or categories this scale observes, in display order.
    fn categories(&self) -> &[Category];

    /// Highest total the scale can produce.
    fn max_total(&self) -> u16 {
        self.categories()
            .iter()
            .map(|c| c.range.max.max(0) as u16)
            .sum()
    }

    /// Report entries that fall outside their category's range.
    fn validate_entries(&self, entries: &[ScoreEntry]) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for entry in entries {
            if let Some(category) = self.categories().iter().find(|c| c.id == entry.category_id)
                && !category.range.contains(entry.value)
            {
                errors.push(ValidationError {
                    category_id: entry.category_id.clone(),
                    value: entry.value,
                    expected_range: category.range,
                    message: format!(
                        "{}: {} value {} is outside range [{}, {}]",
                        self.name(),
                        category.name,
                        entry.value,
                        category.range.min,
                        category.range.max,
                    ),
                });
            }
        }
        errors
    }

    /// Format recorded entries as a markdown block for notes and reports.
    fn to_structured_input(&self, entries: &[ScoreEntry]) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for category in self.categories() {
            let values: Vec<String> = entries
                .iter()
                .filter(|e| e.category_id == category.id)
                .map(|e| e.value.to_string())
                .collect();
            if !values.is_empty() {
                output.push_str(&format!("- {}: {}\n", category.name, values.join(", ")));
            }
        }
        output
    }
}

/// Return all registered pain scales.
pub fn all_scales() -> Vec<Box<dyn PainScale>> {
    vec![
        Box::new(scales::fgs::FelineGrimaceScale),
        Box::new(scales::beaap::Beaap),
    ]
}

/// Look up a scale by ID.
pub fn get_scale(id: &str) -> Option<Box<dyn PainScale>> {
    all_scales().into_iter().find(|s| s.id() == id)
}

/// Look up a scale by ID, failing with [`PainError::UnknownScale`].
pub fn get_scale_or_err(id: &str) -> Result<Box<dyn PainScale>, PainError> {
    get_scale(id).ok_or_else(|| PainError::UnknownScale(id.to_string()))
}

/// The scale used for structured assessments of the given species.
pub fn scale_for_species(species: Species) -> Box<dyn PainScale> {
    match species {
        Species::Cat => Box::new(scales::fgs::FelineGrimaceScale),
        Species::Dog => Box::new(scales::beaap::Beaap),
    }
}
