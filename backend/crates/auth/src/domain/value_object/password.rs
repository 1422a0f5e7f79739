//! Password Value Object
//!
//! Passwords are stored and compared as **plain text**. The reference
//! deployment of this service is a test bed and its operators chose not to
//! hash credentials; that decision is preserved here so behavior stays
//! observable, and it must be revisited before any real exposure.
//!
//! The comparison is a direct string equality, not constant-time.
//
// TODO: replace plaintext storage with a hashing KDF (argon2id) once
// stakeholders confirm this service is graduating from its test-only role.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error returned when password validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    /// Password is empty
    Empty,
}

impl fmt::Display for PasswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "password cannot be empty"),
        }
    }
}

impl std::error::Error for PasswordError {}

/// Stored credential.
///
/// # Invariants
/// - Non-empty
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Password(String);

impl Password {
    /// Validate and construct a password
    pub fn new(input: impl Into<String>) -> Result<Self, PasswordError> {
        let value = input.into();
        if value.is_empty() {
            return Err(PasswordError::Empty);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Plain string comparison against a login attempt.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

// Keep the raw credential out of debug output and logs.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(***)")
    }
}

impl TryFrom<String> for Password {
    type Error = PasswordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rejected() {
        assert_eq!(Password::new("").unwrap_err(), PasswordError::Empty);
    }

    #[test]
    fn test_matches() {
        let pw = Password::new("pw1").unwrap();
        assert!(pw.matches("pw1"));
        assert!(!pw.matches("pw2"));
        assert!(!pw.matches(""));
    }

    #[test]
    fn test_debug_redacts_value() {
        let pw = Password::new("super-secret").unwrap();
        let rendered = format!("{pw:?}");
        assert!(!rendered.contains("super-secret"));
    }
}
