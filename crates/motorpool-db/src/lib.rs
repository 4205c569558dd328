//! Motorpool Storage Layer
//!
//! This crate provides the data model and the store abstractions for
//! Motorpool, with a SQLite implementation via sqlx.

pub mod error;
pub mod models;
pub mod repository;
pub mod store;
pub mod utils;

pub use error::DbError;
pub use models::*;
pub use repository::Database;
pub use store::{UserStore, VehicleStore};
