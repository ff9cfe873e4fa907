pub mod assessments;
pub mod health;
pub mod records;
pub mod scales;
