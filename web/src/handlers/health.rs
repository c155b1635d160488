//! Health check endpoints.
//!
//! These endpoints are used by load balancers and monitoring systems
//! to verify service health.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Root greeting body.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Always `Health OK`.
    pub message: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: &'static str,
    /// Service version
    pub version: &'static str,
}

/// Root endpoint kept for existing clients.
///
/// # Endpoint
///
/// ```text
/// GET /
/// ```
///
/// # Response
///
/// ```json
/// { "message": "Health OK" }
/// ```
#[allow(clippy::unused_async)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Health OK",
    })
}

/// Simple health check endpoint (for basic liveness).
///
/// Does not touch the booking service.
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
///
/// # Response
///
/// ```json
/// { "status": "ok", "version": "0.1.0" }
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}
