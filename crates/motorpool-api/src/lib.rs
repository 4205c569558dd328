//! Motorpool REST API
//!
//! This crate provides the Axum-based HTTP API for Motorpool: login,
//! vehicle CRUD behind the auth/admin guards, and admin-only user creation.

pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::{AppState, MetricsHandle};
