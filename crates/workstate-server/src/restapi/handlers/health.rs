//! Health check handlers

use crate::dto::HealthResponse;
use axum::response::Json;

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "workstate-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}
