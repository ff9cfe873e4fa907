use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Route reported for requests that matched no route.
pub const UNMATCHED_ROUTE: &str = "<unmatched>";

/// Per-request audit event.
///
/// The route is logged as its template ("/scales/{id}"), never the raw path,
/// so events group by endpoint. Request bodies carry clinical observations
/// and are never logged. Server errors are raised to `warn`.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| UNMATCHED_ROUTE.to_string(), |p| p.as_str().to_string());

    let response = next.run(req).await;

    let status = response.status();
    let latency_ms = started.elapsed().as_millis() as u64;
    if status.is_server_error() {
        tracing::warn!(
            method = %method,
            route = %route,
            status = status.as_u16(),
            latency_ms,
            "api_request"
        );
    } else {
        tracing::info!(
            method = %method,
            route = %route,
            status = status.as_u16(),
            latency_ms,
            "api_request"
        );
    }

    response
}
