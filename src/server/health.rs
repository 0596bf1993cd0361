//! Health check endpoint for liveness probes.

use axum::http::StatusCode;

/// Returns 200 OK with the text "OK".
///
/// Process lifecycle (start/stop/restart) is owned by external operator
/// tooling; this endpoint only tells it that the server is accepting
/// connections.
pub async fn health_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
