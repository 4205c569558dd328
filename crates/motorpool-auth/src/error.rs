//! Authentication error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use motorpool_db::DbError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing authorization header")]
    MissingToken,

    #[error("Invalid authorization header format")]
    InvalidAuthHeader,

    #[error("Malformed token")]
    Malformed,

    #[error("Token signature invalid")]
    SignatureInvalid,

    #[error("Token expired")]
    Expired,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Insufficient permissions")]
    InsufficientPermissions,

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Token encoding error: {0}")]
    TokenEncoding(#[source] jsonwebtoken::errors::Error),

    #[error("Token lifetime of {0}s is out of range")]
    TokenLifetime(i64),

    #[error("Credential store error: {0}")]
    Store(#[from] DbError),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InsufficientPermissions => StatusCode::FORBIDDEN,
            AuthError::PasswordHash(_)
            | AuthError::TokenEncoding(_)
            | AuthError::TokenLifetime(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    /// Short machine-readable code for the error body
    pub fn code(&self) -> &'static str {
        match self.status_code() {
            StatusCode::FORBIDDEN => "AUTHORIZATION_ERROR",
            StatusCode::SERVICE_UNAVAILABLE => "STORE_UNAVAILABLE",
            StatusCode::INTERNAL_SERVER_ERROR => "INTERNAL_ERROR",
            _ => "AUTHENTICATION_ERROR",
        }
    }

    /// Message safe to show to clients
    pub fn public_message(&self) -> String {
        match self {
            AuthError::InsufficientPermissions => {
                "Only administrators can access this endpoint".to_string()
            }
            AuthError::InvalidCredentials => "Username or password incorrect".to_string(),
            AuthError::PasswordHash(_)
            | AuthError::TokenEncoding(_)
            | AuthError::TokenLifetime(_) => "Internal error".to_string(),
            AuthError::Store(_) => "The data store is unavailable".to_string(),
            other => other.to_string(),
        }
    }

    /// Label used for rejection metrics
    pub fn reason(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "missing",
            AuthError::InvalidAuthHeader => "bad_header",
            AuthError::Malformed => "malformed",
            AuthError::SignatureInvalid => "bad_signature",
            AuthError::Expired => "expired",
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::InsufficientPermissions => "forbidden",
            AuthError::PasswordHash(_)
            | AuthError::TokenEncoding(_)
            | AuthError::TokenLifetime(_) => "internal",
            AuthError::Store(_) => "store",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = axum::Json(json!({
            "error": self.code(),
            "message": self.public_message(),
        }));

        (self.status_code(), body).into_response()
    }
}
