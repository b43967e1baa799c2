use axum::{extract::State, Json};
use serde::Serialize;

use super::GatewayState;

/// Response for the liveness check
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub backend_url: String,
}

/// GET /api/health
/// Answers locally; the backend is not contacted
pub async fn health_handler(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        backend_url: state.backend.base_url().to_string(),
    })
}
