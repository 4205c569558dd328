//! Input validation helpers

use crate::error::ApiError;

/// Maximum allowed username length
const MAX_USERNAME_LENGTH: usize = 64;
/// Maximum allowed password length (prevent DoS with very large passwords)
const MAX_PASSWORD_LENGTH: usize = 256;

/// Accumulates absent fields so one 400 can name all of them
#[derive(Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    /// Take a string field that must be present and not blank
    pub fn text(&mut self, name: &'static str, value: Option<String>) -> String {
        match value {
            Some(v) if !v.trim().is_empty() => v,
            _ => {
                self.missing.push(name);
                String::new()
            }
        }
    }

    /// Take a non-string field that must be present
    pub fn value<T: Default>(&mut self, name: &'static str, value: Option<T>) -> T {
        value.unwrap_or_else(|| {
            self.missing.push(name);
            T::default()
        })
    }

    pub fn finish(self) -> Result<(), ApiError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(ApiError::BadRequest(format!(
                "Missing required fields: {}",
                self.missing.join(", ")
            )))
        }
    }
}

/// Validate username format and length
pub fn validate_username(username: &str) -> Result<(), ApiError> {
    if username.len() > MAX_USERNAME_LENGTH {
        return Err(ApiError::BadRequest(format!(
            "Username exceeds maximum length of {} characters",
            MAX_USERNAME_LENGTH
        )));
    }
    // Only allow ASCII letters and digits, underscores, and hyphens
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        return Err(ApiError::BadRequest(
            "Username can only contain ASCII letters, digits, underscores, and hyphens".to_string(),
        ));
    }
    Ok(())
}

/// Validate password length
pub fn validate_password(password: &str) -> Result<(), ApiError> {
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(ApiError::BadRequest(format!(
            "Password exceeds maximum length of {} characters",
            MAX_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields_lists_every_missing_name() {
        let mut fields = RequiredFields::default();
        let brand = fields.text("brand", Some("Ford".to_string()));
        let _model = fields.text("model", Some("   ".to_string()));
        let _year: i32 = fields.value("year", None);

        assert_eq!(brand, "Ford");
        match fields.finish() {
            Err(ApiError::BadRequest(msg)) => {
                assert_eq!(msg, "Missing required fields: model, year")
            }
            _ => panic!("expected a validation error"),
        }
    }

    #[test]
    fn test_required_fields_all_present() {
        let mut fields = RequiredFields::default();
        let year = fields.value("year", Some(2018));
        assert_eq!(year, 2018);
        assert!(fields.finish().is_ok());
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("admin1").is_ok());
        assert!(validate_username("fleet_manager-2").is_ok());
        assert!(validate_username("bad name").is_err());
        assert!(validate_username("josé").is_err());
        assert!(validate_username("司机").is_err());
        assert!(validate_username(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("admin123").is_ok());
        assert!(validate_password(&"p".repeat(257)).is_err());
    }
}
