//! User management routes

use axum::{
    Extension, Json, Router,
    extract::State,
    extract::rejection::JsonRejection,
    http::StatusCode,
    middleware::from_fn_with_state,
    routing::post,
};
use chrono::Utc;
use motorpool_auth::{AuthUser, hash_password, require_admin};
use motorpool_db::{NewUser, UserRole};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

use super::types::{CreateUserRequest, UserResponse};
use super::validation::{RequiredFields, validate_password, validate_username};

/// POST /new_user (Admin only)
async fn create_user(
    Extension(admin): Extension<AuthUser>,
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let Json(request) = payload?;

    let mut fields = RequiredFields::default();
    let username = fields.text("username", request.username);
    let role = fields.text("role", request.role);
    let password = fields.text("password", request.password);
    fields.finish()?;

    validate_username(&username)?;
    validate_password(&password)?;
    let role: UserRole = role
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid role: {}", role)))?;

    debug!("Creating user: {}", username);

    let password_hash = hash_password(&password)?;

    let user = state
        .users
        .insert_user(NewUser {
            id: Uuid::new_v4().to_string(),
            username,
            password_hash,
            role,
            created_at: request.created_at.unwrap_or_else(Utc::now),
        })
        .await?;

    info!("User {} ({}) created by {}", user.username, user.role, admin.username);

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Create user routes
pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/new_user", post(create_user))
        .route_layer(from_fn_with_state(state.tokens.clone(), require_admin))
}
