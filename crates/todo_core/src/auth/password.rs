//! Salted password hashing.
//!
//! # Responsibility
//! - Turn raw passwords into Argon2id PHC strings for storage.
//! - Verify raw passwords against stored PHC strings.
//!
//! # Invariants
//! - Every hash carries its own random salt; hashing the same password
//!   twice yields different strings.
//! - Raw passwords are never logged or returned.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure while hashing or parsing a password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    /// Hashing backend failed.
    Hash(String),
    /// Stored value is not a valid PHC string.
    MalformedHash(String),
}

impl Display for PasswordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hash(message) => write!(f, "failed to hash password: {message}"),
            Self::MalformedHash(message) => write!(f, "malformed password hash: {message}"),
        }
    }
}

impl Error for PasswordError {}

/// Hashes `raw` with Argon2id and a fresh random salt.
pub fn hash_password(raw: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(raw.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| PasswordError::Hash(err.to_string()))
}

/// Returns whether `raw` matches the stored PHC string `hash`.
///
/// # Errors
/// - Returns `MalformedHash` when `hash` cannot be parsed.
pub fn verify_password(raw: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed =
        PasswordHash::new(hash).map_err(|err| PasswordError::MalformedHash(err.to_string()))?;
    Ok(Argon2::default()
        .verify_password(raw.as_bytes(), &parsed)
        .is_ok())
}
