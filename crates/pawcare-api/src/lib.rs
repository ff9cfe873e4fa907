//! pawcare-api
//!
//! Stateless HTTP surface over the pain engine, consumed by the mobile
//! client, the clinic web console and the record save flow.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router.
pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/scales", get(routes::scales::list_scales))
        .route("/scales/{id}", get(routes::scales::get_scale_detail))
        .route("/assessments/feline", post(routes::assessments::assess_feline))
        .route("/assessments/canine", post(routes::assessments::assess_canine))
        .route("/assessments/legacy", post(routes::assessments::assess_legacy))
        .route("/records/derive", post(routes::records::derive_record))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
}
