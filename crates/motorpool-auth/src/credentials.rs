//! Credential verification

use motorpool_db::{User, UserStore};
use tracing::debug;

use crate::error::AuthError;
use crate::password::verify_password;

/// Valid Argon2id hash that no password verifies against.
///
/// Verified when the username is unknown so both failure paths cost one
/// Argon2 evaluation.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$dGltaW5nX2F0dGFja19wcmV2ZW50aW9u$K8rI5T7VdQ8xkO0GqK5K2w";

/// Check a username/password pair against the credential store
///
/// Unknown users and wrong passwords both yield
/// [`AuthError::InvalidCredentials`].
pub async fn authenticate(
    store: &dyn UserStore,
    username: &str,
    password: &str,
) -> Result<User, AuthError> {
    let user = store.find_user_by_username(username).await?;

    let hash_to_verify = user
        .as_ref()
        .map(|u| u.password_hash.as_str())
        .unwrap_or(DUMMY_HASH);
    let password_valid = verify_password(password, hash_to_verify);

    match (user, password_valid) {
        (Some(user), true) => Ok(user),
        _ => {
            debug!("Rejected credentials for user: {}", username);
            Err(AuthError::InvalidCredentials)
        }
    }
}
