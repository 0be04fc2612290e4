use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// The longest display name accepted on create.
pub const MAX_NAME_LENGTH: usize = 128;

/// A create request body that violates a declared field constraint.
#[derive(Debug, Error)]
pub enum InvalidUserParams {
    #[error("name must not be empty")]
    EmptyName,

    #[error("name must be at most {MAX_NAME_LENGTH} characters, got {0}")]
    NameTooLong(usize),

    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),
}

/// Request body for creating a user.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateUserParams {
    /// The user's display name.
    pub name: String,

    /// The user's email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl CreateUserParams {
    /// Check the declared field constraints. Runs before the record reaches
    /// the store; create is the only mutation that validates its body.
    pub fn validate(&self) -> Result<(), InvalidUserParams> {
        if self.name.trim().is_empty() {
            return Err(InvalidUserParams::EmptyName);
        }

        let length = self.name.chars().count();
        if length > MAX_NAME_LENGTH {
            return Err(InvalidUserParams::NameTooLong(length));
        }

        if let Some(email) = &self.email {
            if !email.contains('@') || email.chars().any(char::is_whitespace) {
                return Err(InvalidUserParams::InvalidEmail(email.clone()));
            }
        }

        Ok(())
    }
}

/// Request body for replacing a user. The target record is addressed by the
/// `id` field rather than the request path.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ModifyUserParams {
    /// The id of the user to replace.
    pub id: i64,

    /// The replacement display name.
    pub name: String,

    /// The replacement email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(name: &str, email: Option<&str>) -> CreateUserParams {
        CreateUserParams {
            name: name.into(),
            email: email.map(Into::into),
        }
    }

    #[test]
    fn accepts_name_without_email() {
        assert!(params("Ada", None).validate().is_ok());
    }

    #[test]
    fn accepts_name_with_email() {
        assert!(params("Ada", Some("ada@example.com")).validate().is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        assert!(matches!(
            params("", None).validate(),
            Err(InvalidUserParams::EmptyName)
        ));
    }

    #[test]
    fn rejects_whitespace_only_name() {
        assert!(matches!(
            params("   ", None).validate(),
            Err(InvalidUserParams::EmptyName)
        ));
    }

    #[test]
    fn rejects_overlong_name() {
        let name = "a".repeat(MAX_NAME_LENGTH + 1);

        assert!(matches!(
            params(&name, None).validate(),
            Err(InvalidUserParams::NameTooLong(length)) if length == MAX_NAME_LENGTH + 1
        ));
    }

    #[test]
    fn accepts_name_at_the_limit() {
        let name = "a".repeat(MAX_NAME_LENGTH);

        assert!(params(&name, None).validate().is_ok());
    }

    #[test]
    fn rejects_email_without_at_sign() {
        assert!(matches!(
            params("Ada", Some("ada.example.com")).validate(),
            Err(InvalidUserParams::InvalidEmail(_))
        ));
    }

    #[test]
    fn rejects_email_with_whitespace() {
        assert!(matches!(
            params("Ada", Some("ada @example.com")).validate(),
            Err(InvalidUserParams::InvalidEmail(_))
        ));
    }
}
