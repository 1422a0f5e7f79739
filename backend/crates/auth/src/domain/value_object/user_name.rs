//! User Name Value Object
//!
//! The username is the unique login identifier. The only invariants this
//! service enforces are non-emptiness (after trimming) and a length cap;
//! uniqueness is checked against the store at registration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a username (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 64;

/// Error returned when username validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserNameError {
    /// Username is empty after trimming
    Empty,

    /// Username is too long (maximum: USER_NAME_MAX_LENGTH)
    TooLong { length: usize, max: usize },
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "username cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "username is too long ({length} chars, maximum {max})")
            }
        }
    }
}

impl std::error::Error for UserNameError {}

/// Validated username
///
/// # Invariants
/// - Non-empty after trimming surrounding whitespace
/// - At most [`USER_NAME_MAX_LENGTH`] characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a username
    pub fn new(input: impl AsRef<str>) -> Result<Self, UserNameError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserNameError::Empty);
        }
        let length = trimmed.chars().count();
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length,
                max: USER_NAME_MAX_LENGTH,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}
