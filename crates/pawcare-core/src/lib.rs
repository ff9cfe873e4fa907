//! pawcare-core
//!
//! Pure domain types shared by the pain engine and its HTTP surface.
//! No storage or UI dependency; this is the shared vocabulary of PawCare.

pub mod error;
pub mod models;
