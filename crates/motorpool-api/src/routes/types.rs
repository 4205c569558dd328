//! Request/Response DTOs
//!
//! Request fields are optional at the serde level so that absent fields
//! surface as a 400 listing every missing name rather than a decoder error.

use chrono::{DateTime, Utc};
use motorpool_db::User;
use serde::{Deserialize, Serialize};

// ==================== Auth Types ====================

/// Login request
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Public part of a user record
#[derive(Serialize)]
pub struct UserSummary {
    pub id: String,
    pub username: String,
    pub role: String,
}

/// Login response
#[derive(Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub access_token: String,
    pub expires_in: i64,
    pub user: UserSummary,
}

// ==================== User Types ====================

/// Create user request
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub role: Option<String>,
    pub password: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// User response (without password hash)
#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub role: String,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role.as_str().to_string(),
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

// ==================== Vehicle Types ====================

/// Query parameters for listing vehicles
#[derive(Deserialize)]
pub struct VehicleQuery {
    pub brand: Option<String>,
    pub model: Option<String>,
}

/// Create vehicle request
#[derive(Deserialize)]
pub struct CreateVehicleRequest {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
}

/// Delete vehicle confirmation
#[derive(Serialize)]
pub struct DeleteVehicleResponse {
    pub message: String,
    pub id: i64,
}
