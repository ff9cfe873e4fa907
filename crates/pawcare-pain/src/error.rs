use thiserror::Error;

#[derive(Debug, Error)]
pub enum PainError {
    #[error("unknown pain scale: {0}")]
    UnknownScale(String),

    #[error("compact pain score {0} is outside 0..=2")]
    InvalidCompactScore(i64),
}
