//! Motorpool Authentication and Authorization
//!
//! This crate provides password hashing, JWT issuing and validation,
//! credential checks, and the two request guards used by the API.

pub mod credentials;
pub mod error;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use credentials::authenticate;
pub use error::AuthError;
pub use jwt::{Claims, TokenManager};
pub use middleware::{AuthUser, require_admin, require_auth};
pub use password::{hash_password, verify_password};
