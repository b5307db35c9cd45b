//! Field validation errors shared by all models.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failure raised before a model is written to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    TextTooLong { len: usize, max: usize },
    EmptyUsername,
    UsernameTooLong { len: usize, max: usize },
    InvalidUsername(String),
    EmailTooLong { len: usize, max: usize },
    InvalidEmail(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TextTooLong { len, max } => {
                write!(f, "text has {len} characters; at most {max} allowed")
            }
            Self::EmptyUsername => write!(f, "username cannot be empty"),
            Self::UsernameTooLong { len, max } => {
                write!(f, "username has {len} characters; at most {max} allowed")
            }
            Self::InvalidUsername(value) => write!(
                f,
                "username `{value}` may only contain letters, digits and @/./+/-/_"
            ),
            Self::EmailTooLong { len, max } => {
                write!(f, "email has {len} characters; at most {max} allowed")
            }
            Self::InvalidEmail(value) => write!(f, "email `{value}` is not a valid address"),
        }
    }
}

impl Error for ValidationError {}
