//! Credential helpers.
//!
//! # Responsibility
//! - Keep password hashing details out of models and repositories.

pub mod password;
