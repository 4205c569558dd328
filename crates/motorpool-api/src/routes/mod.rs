//! API routes

mod auth;
mod health;
pub mod metrics;
pub mod types;
mod users;
mod validation;
mod vehicles;

use axum::{Router, http::Uri};
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::{AppState, MetricsHandle};

/// JSON 404 for unmatched paths
async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

/// Create the main router
///
/// Guards are attached per route group inside each module, so every
/// protected handler is wrapped at registration time.
pub fn create_router(state: AppState, metrics_handle: Option<Arc<MetricsHandle>>) -> Router {
    let mut router = Router::new()
        // Health check
        .merge(health::routes())
        // Login
        .merge(auth::routes())
        // Vehicles
        .merge(vehicles::routes(&state))
        // User management
        .merge(users::routes(&state))
        .with_state(state);

    // Add metrics endpoint if handle is provided
    if let Some(handle) = metrics_handle {
        router = router.merge(metrics::routes(handle));
    }

    router.fallback(not_found)
}
