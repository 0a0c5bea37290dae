//! Health check endpoint for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)

use axum::http::StatusCode;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Does not touch the record store.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
