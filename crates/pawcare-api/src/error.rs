use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use pawcare_pain::error::PainError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<PainError> for ApiError {
    fn from(e: PainError) -> Self {
        match e {
            PainError::UnknownScale(_) => ApiError::NotFound(e.to_string()),
            PainError::InvalidCompactScore(_) => ApiError::BadRequest(e.to_string()),
        }
    }
}
