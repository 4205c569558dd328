//! Request guards for Axum
//!
//! Both guards run as `route_layer` middleware attached at route
//! registration. They finish validation (and, for admin routes,
//! authorization) before the handler runs, then hand the decoded identity
//! to the handler as an `Extension<AuthUser>`.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use motorpool_db::UserRole;

use crate::error::AuthError;
use crate::jwt::{Claims, TokenManager};

/// Authenticated user information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: String,
    pub username: String,
    /// Role claim as issued; not checked against known roles
    pub role: String,
}

impl AuthUser {
    /// Create from JWT claims
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            username: claims.sub,
            role: claims.role,
        }
    }

    /// Only a role claim naming [`UserRole::Admin`] grants admin access
    pub fn is_admin(&self) -> bool {
        self.role
            .parse::<UserRole>()
            .is_ok_and(|role| role.is_admin())
    }
}

/// Extract bearer token from authorization header
fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let header = headers.get(AUTHORIZATION).ok_or(AuthError::MissingToken)?;
    let header = header.to_str().map_err(|_| AuthError::InvalidAuthHeader)?;

    // The scheme name is case-insensitive
    match header.split_once(' ') {
        Some((scheme, token))
            if scheme.eq_ignore_ascii_case("Bearer") && !token.trim().is_empty() =>
        {
            Ok(token.trim())
        }
        _ => Err(AuthError::InvalidAuthHeader),
    }
}

/// Decode the caller's identity from the request headers
pub fn authenticate_request(
    tokens: &TokenManager,
    headers: &HeaderMap,
) -> Result<AuthUser, AuthError> {
    let result = extract_bearer_token(headers)
        .and_then(|token| tokens.validate(token))
        .map(AuthUser::from_claims);

    if let Err(e) = &result {
        debug!("Rejected request token: {}", e);
        metrics::counter!("motorpool_auth_rejections_total", "reason" => e.reason()).increment(1);
    }
    result
}

/// Guard: any authenticated role
pub async fn require_auth(
    State(tokens): State<Arc<TokenManager>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let user = authenticate_request(&tokens, request.headers())?;

    debug!("Authenticated user: {} ({})", user.username, user.role);

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Guard: authenticated admin only
///
/// Authentication failures are 401; a valid non-admin token is 403.
pub async fn require_admin(
    State(tokens): State<Arc<TokenManager>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let user = authenticate_request(&tokens, request.headers())?;

    if !user.is_admin() {
        warn!(
            "User {} ({}) denied access to {}",
            user.username,
            user.role,
            request.uri().path()
        );
        metrics::counter!("motorpool_auth_rejections_total", "reason" => "forbidden")
            .increment(1);
        return Err(AuthError::InsufficientPermissions);
    }

    debug!("Authenticated admin: {}", user.username);

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
