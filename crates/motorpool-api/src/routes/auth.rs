//! Login route

use axum::{Json, Router, extract::State, extract::rejection::JsonRejection, routing::post};
use motorpool_auth::{AuthError, authenticate};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::AppState;

use super::types::{LoginRequest, LoginResponse, UserSummary};
use super::validation::{RequiredFields, validate_password};

/// POST /auth/login
async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(request) = payload?;

    let mut fields = RequiredFields::default();
    let username = fields.text("username", request.username);
    let password = fields.text("password", request.password);
    fields.finish()?;
    validate_password(&password)?;

    debug!("Login attempt for user: {}", username);

    let user = match authenticate(state.users.as_ref(), &username, &password).await {
        Ok(user) => user,
        Err(e) => {
            let outcome = match e {
                AuthError::InvalidCredentials => {
                    warn!("Failed login for user: {}", username);
                    "rejected"
                }
                _ => "error",
            };
            metrics::counter!("motorpool_logins_total", "outcome" => outcome).increment(1);
            return Err(e.into());
        }
    };

    let access_token = state
        .tokens
        .issue(&user.username, user.role.as_str(), &user.id)?;

    metrics::counter!("motorpool_logins_total", "outcome" => "success").increment(1);
    info!("User {} logged in successfully", user.username);

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        access_token,
        expires_in: state.tokens.ttl_secs(),
        user: UserSummary {
            id: user.id,
            username: user.username,
            role: user.role.as_str().to_string(),
        },
    }))
}

/// Create auth routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}
