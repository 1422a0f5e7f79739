//! Structured validation failure
//!
//! Validation is explicit per entity: typed functions check each field and
//! report the first offending field by name, rather than leaning on
//! framework-level schema behavior.

use std::borrow::Cow;
use std::fmt;

use super::app_error::AppError;

/// A single-field validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Path of the offending field, e.g. `price` or `products[2].quantity`.
    pub field: Cow<'static, str>,
    pub message: Cow<'static, str>,
}

impl ValidationError {
    pub fn new(
        field: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::bad_request(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;

    #[test]
    fn test_display_names_the_field() {
        let err = ValidationError::new("stock", "cannot be negative");
        assert_eq!(err.to_string(), "stock: cannot be negative");
    }

    #[test]
    fn test_maps_to_bad_request() {
        let err = ValidationError::new("name", "cannot be empty");
        let app_err: AppError = err.into();
        assert_eq!(app_err.kind(), ErrorKind::BadRequest);
    }
}
