//! Inventory Error Types
//!
//! This module provides inventory-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::validation::ValidationError;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Inventory-specific result type alias
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-specific error variants
#[derive(Debug, Error)]
pub enum InventoryError {
    /// No product with the requested id
    #[error("Product not found")]
    NotFound,

    /// Request field validation failed
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl InventoryError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            InventoryError::NotFound => StatusCode::NOT_FOUND,
            InventoryError::Validation(_) => StatusCode::BAD_REQUEST,
            InventoryError::Database(_) | InventoryError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            InventoryError::NotFound => ErrorKind::NotFound,
            InventoryError::Validation(_) => ErrorKind::BadRequest,
            InventoryError::Database(_) | InventoryError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            InventoryError::Database(e) => {
                tracing::error!(error = %e, "Inventory database error");
            }
            InventoryError::Internal(msg) => {
                tracing::error!(message = %msg, "Inventory internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Inventory error");
            }
        }
    }
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            InventoryError::Database(e) => AppError::from(e).into_response(),
            other => other.to_app_error().into_response(),
        }
    }
}

impl From<AppError> for InventoryError {
    fn from(err: AppError) -> Self {
        InventoryError::Internal(err.to_string())
    }
}
