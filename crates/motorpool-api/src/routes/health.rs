//! Health check endpoints

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

/// Health status response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// "connected" or "disconnected"
    pub store: String,
}

/// Health check handler
///
/// Always answers; a store outage only shows up in the `store` field.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    metrics::counter!("motorpool_health_checks_total").increment(1);

    let store = match state.vehicles.count_vehicles().await {
        Ok(_) => "connected",
        Err(e) => {
            warn!("Health check could not reach the store: {}", e);
            "disconnected"
        }
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: store.to_string(),
    })
}

/// Create health routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/healthz", get(health))
}
