//! User account model.
//!
//! # Responsibility
//! - Define stored account records and their creation payload.
//! - Own username/email validation rules applied before persistence.
//!
//! # Invariants
//! - `password_hash` always holds a salted PHC string, never plaintext.
//! - `username` is non-empty and limited to `[\w.@+-]`.

use crate::auth::password::{hash_password, verify_password, PasswordError};
use crate::model::validation::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Storage-assigned identifier of a user.
pub type UserId = i64;

pub const USERNAME_MAX_CHARS: usize = 150;
pub const EMAIL_MAX_CHARS: usize = 254;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.@+-]+$").expect("valid username regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("valid email regex"));

/// Persisted user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    /// Argon2 PHC string. Not part of the serialized shape.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub email: String,
    pub is_superuser: bool,
    pub is_staff: bool,
}

/// Creation payload for a user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub is_superuser: bool,
    pub is_staff: bool,
}

impl NewUser {
    /// Builds an unprivileged account, hashing `raw_password`.
    pub fn with_password(
        username: impl Into<String>,
        email: impl Into<String>,
        raw_password: &str,
    ) -> Result<Self, PasswordError> {
        Ok(Self {
            username: username.into(),
            password_hash: hash_password(raw_password)?,
            email: email.into(),
            is_superuser: false,
            is_staff: false,
        })
    }

    /// Grants both superuser and staff privileges.
    pub fn into_superuser(mut self) -> Self {
        self.is_superuser = true;
        self.is_staff = true;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_username(&self.username)?;
        validate_email(&self.email)
    }
}

impl User {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_username(&self.username)?;
        validate_email(&self.email)
    }

    /// Returns whether `raw` matches the stored password hash.
    pub fn check_password(&self, raw: &str) -> Result<bool, PasswordError> {
        verify_password(raw, &self.password_hash)
    }

    /// Replaces the stored hash with a freshly salted hash of `raw`.
    pub fn set_password(&mut self, raw: &str) -> Result<(), PasswordError> {
        self.password_hash = hash_password(raw)?;
        Ok(())
    }
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::EmptyUsername);
    }
    let len = username.chars().count();
    if len > USERNAME_MAX_CHARS {
        return Err(ValidationError::UsernameTooLong {
            len,
            max: USERNAME_MAX_CHARS,
        });
    }
    if !USERNAME_RE.is_match(username) {
        return Err(ValidationError::InvalidUsername(username.to_string()));
    }
    Ok(())
}

// Empty email is allowed.
fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Ok(());
    }
    let len = email.chars().count();
    if len > EMAIL_MAX_CHARS {
        return Err(ValidationError::EmailTooLong {
            len,
            max: EMAIL_MAX_CHARS,
        });
    }
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_email, validate_username, NewUser};
    use crate::model::validation::ValidationError;

    #[test]
    fn username_rules() {
        assert!(validate_username("admin").is_ok());
        assert!(validate_username("j.doe+ops@corp-1_x").is_ok());
        assert_eq!(validate_username(""), Err(ValidationError::EmptyUsername));
        assert!(matches!(
            validate_username("has space"),
            Err(ValidationError::InvalidUsername(_))
        ));
        assert!(matches!(
            validate_username(&"u".repeat(151)),
            Err(ValidationError::UsernameTooLong { len: 151, max: 150 })
        ));
    }

    #[test]
    fn email_rules() {
        assert!(validate_email("").is_ok());
        assert!(validate_email("admin@example.com").is_ok());
        assert!(matches!(
            validate_email("not-an-email"),
            Err(ValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn into_superuser_sets_both_flags() {
        let user = NewUser::with_password("root", "", "pw")
            .unwrap()
            .into_superuser();
        assert!(user.is_superuser);
        assert!(user.is_staff);
        assert_ne!(user.password_hash, "pw");
    }
}
