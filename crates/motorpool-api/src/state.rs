//! Application state

use metrics_exporter_prometheus::PrometheusHandle;
use motorpool_auth::TokenManager;
use motorpool_db::{Database, UserStore, VehicleStore};
use std::sync::Arc;

/// Prometheus render handle served at `/metrics`
pub type MetricsHandle = PrometheusHandle;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub vehicles: Arc<dyn VehicleStore>,
    pub tokens: Arc<TokenManager>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        vehicles: Arc<dyn VehicleStore>,
        tokens: Arc<TokenManager>,
    ) -> Self {
        Self {
            users,
            vehicles,
            tokens,
        }
    }

    /// Back both collections with one database
    pub fn with_database(db: Database, tokens: Arc<TokenManager>) -> Self {
        let db = Arc::new(db);
        Self::new(db.clone(), db, tokens)
    }
}
