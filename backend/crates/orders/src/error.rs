//! Order Error Types
//!
//! This module provides order-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::validation::ValidationError;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Order-specific result type alias
pub type OrderResult<T> = Result<T, OrderError>;

/// Order-specific error variants
#[derive(Debug, Error)]
pub enum OrderError {
    /// No order with the requested id visible to the caller. Covers both
    /// nonexistent orders and orders owned by someone else.
    #[error("Order not found")]
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

impl OrderError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrderError::NotFound => StatusCode::NOT_FOUND,
            OrderError::Validation(_) => StatusCode::BAD_REQUEST,
            OrderError::Database(_) | OrderError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::NotFound => ErrorKind::NotFound,
            OrderError::Validation(_) => ErrorKind::BadRequest,
            OrderError::Database(_) | OrderError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            OrderError::Database(e) => {
                tracing::error!(error = %e, "Order database error");
            }
            OrderError::Internal(msg) => {
                tracing::error!(message = %msg, "Order internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Order error");
            }
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            OrderError::Database(e) => AppError::from(e).into_response(),
            other => other.to_app_error().into_response(),
        }
    }
}

impl From<AppError> for OrderError {
    fn from(err: AppError) -> Self {
        OrderError::Internal(err.to_string())
    }
}

impl From<inventory::InventoryError> for OrderError {
    fn from(err: inventory::InventoryError) -> Self {
        match err {
            inventory::InventoryError::Database(e) => OrderError::Database(e),
            other => OrderError::Internal(other.to_string()),
        }
    }
}
