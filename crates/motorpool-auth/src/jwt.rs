//! JWT token management

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AuthError;

/// JWT claims
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// Role at the time of issuance
    pub role: String,
    /// User ID
    pub user_id: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Issues and validates HS256 bearer tokens
#[derive(Clone)]
pub struct TokenManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl TokenManager {
    /// Create a new token manager
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Trust the local clock as-is
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_secs,
        }
    }

    /// Lifetime of newly issued tokens, in seconds
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Issue a token for a user
    pub fn issue(&self, username: &str, role: &str, user_id: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = Duration::try_seconds(self.ttl_secs)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or(AuthError::TokenLifetime(self.ttl_secs))?;

        let claims = Claims {
            sub: username.to_string(),
            role: role.to_string(),
            user_id: user_id.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        debug!("Issuing token for user: {}", username);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(AuthError::TokenEncoding)
    }

    /// Validate a token and return its claims
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::Expired,
                    ErrorKind::InvalidSignature => AuthError::SignatureInvalid,
                    _ => AuthError::Malformed,
                }
            })?;

        // A token is only valid while exp is strictly in the future
        if token_data.claims.exp <= Utc::now().timestamp() {
            return Err(AuthError::Expired);
        }

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_issue_and_validation() {
        let manager = TokenManager::new("test-secret-key", 3600);

        let token = manager.issue("admin1", "admin", "user-1").unwrap();
        let claims = manager.validate(&token).unwrap();

        assert_eq!(claims.sub, "admin1");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.user_id, "user-1");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_malformed_token() {
        let manager = TokenManager::new("test-secret-key", 3600);

        assert!(matches!(manager.validate("invalid-token"), Err(AuthError::Malformed)));
        assert!(matches!(manager.validate(""), Err(AuthError::Malformed)));
    }

    #[test]
    fn test_foreign_signature_rejected() {
        let ours = TokenManager::new("secret-one", 3600);
        let theirs = TokenManager::new("secret-two", 3600);

        let token = theirs.issue("admin1", "admin", "user-1").unwrap();
        assert!(matches!(ours.validate(&token), Err(AuthError::SignatureInvalid)));
    }

    #[test]
    fn test_expired_token() {
        let manager = TokenManager::new("test-secret-key", -60);

        let token = manager.issue("client1", "client", "user-3").unwrap();
        assert!(matches!(manager.validate(&token), Err(AuthError::Expired)));
    }

    #[test]
    fn test_token_without_ttl_is_already_expired() {
        let manager = TokenManager::new("test-secret-key", 0);

        let token = manager.issue("client1", "client", "user-3").unwrap();
        assert!(matches!(manager.validate(&token), Err(AuthError::Expired)));
    }

    #[test]
    fn test_unrepresentable_lifetime_is_an_error() {
        for ttl in [i64::MAX / 1000, i64::MAX, i64::MIN] {
            let manager = TokenManager::new("test-secret-key", ttl);
            assert!(matches!(
                manager.issue("admin1", "admin", "user-1"),
                Err(AuthError::TokenLifetime(t)) if t == ttl
            ));
        }
    }

    #[test]
    fn test_unknown_role_still_decodes() {
        let manager = TokenManager::new("test-secret-key", 3600);

        let token = manager.issue("someone", "auditor", "user-7").unwrap();
        assert_eq!(manager.validate(&token).unwrap().role, "auditor");
    }
}
