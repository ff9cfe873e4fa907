use pawcare_core::models::species::Species;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::level::PainLevel;

/// Style severity reported for `Unknown`. Distinct from every level ordinal
/// so the UI never renders an undetermined result as "no pain".
pub const UNKNOWN_SEVERITY: i8 = -1;

/// Shown whenever the level could not be determined. Makes no clinical claim.
pub const RETRY_MESSAGE: &str = "The assessment is incomplete and no pain level could be \
     determined. Please retry the assessment with clear observations for every category.";

/// Owner-facing recommendation for a classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Advice {
    pub text: String,
    /// Level ordinal 0–5, or [`UNKNOWN_SEVERITY`].
    pub style_severity: i8,
}

/// Words substituted into the shared templates.
struct SpeciesWords {
    pet: &'static str,
    routine: &'static str,
}

fn words(species: Species) -> SpeciesWords {
    match species {
        Species::Cat => SpeciesWords {
            pet: species.noun(),
            routine: "grooming, eating and litter box use",
        },
        Species::Dog => SpeciesWords {
            pet: species.noun(),
            routine: "walks, eating and play",
        },
    }
}

/// One template per level. `{pet}` and `{routine}` are filled per species.
fn template(level: PainLevel) -> Option<&'static str> {
    match level {
        PainLevel::NoPain => Some(
            "No signs of pain were observed. Keep up your {pet}'s regular routine and \
             reassess if you notice changes in {routine}.",
        ),
        PainLevel::Mild => Some(
            "Your {pet} shows mild signs of discomfort. Monitor {routine} over the next \
             24 hours, keep your {pet} rested, and reassess if the signs persist.",
        ),
        PainLevel::Moderate => Some(
            "Your {pet} shows moderate pain. Limit activity, keep your {pet} comfortable, \
             and schedule a veterinary check within the next few days.",
        ),
        PainLevel::ModerateToSevere => Some(
            "Your {pet} shows moderate to severe pain. Contact your veterinarian within \
             24 hours and avoid handling painful areas in the meantime.",
        ),
        PainLevel::Severe => Some(
            "Your {pet} shows severe pain. Contact your veterinarian today; your {pet} \
             likely needs pain relief as soon as possible.",
        ),
        PainLevel::Worst => Some(
            "Your {pet} appears to be in the worst possible pain. Seek emergency \
             veterinary care immediately.",
        ),
        PainLevel::Unknown => None,
    }
}

/// Resolve the recommendation for a classification.
pub fn advise(level: PainLevel, species: Species) -> Advice {
    let Some(template) = template(level) else {
        return Advice {
            text: RETRY_MESSAGE.to_string(),
            style_severity: UNKNOWN_SEVERITY,
        };
    };

    let words = words(species);
    Advice {
        text: template
            .replace("{pet}", words.pet)
            .replace("{routine}", words.routine),
        style_severity: style_severity(level),
    }
}

/// Monotonic in the level ordinal; [`UNKNOWN_SEVERITY`] for `Unknown`.
pub fn style_severity(level: PainLevel) -> i8 {
    level.ordinal().map_or(UNKNOWN_SEVERITY, |o| o as i8)
}
