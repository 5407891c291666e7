//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic conversion into the response envelope.

use std::collections::BTreeMap;

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::types::{ErrorMessage, WebResponse};

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// One or more request fields failed validation (violation code -> message)
    #[error("validation failed")]
    Validation(BTreeMap<String, String>),

    /// A uniqueness constraint was violated before any write occurred
    #[error("{0}")]
    Conflict(String),

    /// Lookup key did not match any record
    #[error("{0}")]
    NotFound(String),

    /// Driver-level storage failure, propagated as-is
    #[error(transparent)]
    Database(#[from] mongodb::error::Error),

    /// Internal failure (timeouts, malformed documents)
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) => 400,
            // Unknown virtual accounts surface as storage-level failures
            AppError::NotFound(_) | AppError::Database(_) | AppError::Internal(_) => 500,
        }
    }

    /// Get the envelope error payload
    pub fn error_message(&self) -> ErrorMessage {
        match self {
            AppError::Validation(violations) => ErrorMessage::Violations(violations.clone()),
            AppError::Conflict(msg) | AppError::NotFound(msg) | AppError::Internal(msg) => {
                ErrorMessage::Message(msg.clone())
            }
            AppError::Database(e) => ErrorMessage::Message(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Database(ref e) = self {
            tracing::error!("storage error: {:?}", e);
        }

        WebResponse::<()>::failure(self.status_code(), self.error_message()).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Build a single-field validation error
    pub fn validation_field(code: impl Into<String>, message: impl Into<String>) -> Self {
        let mut violations = BTreeMap::new();
        violations.insert(code.into(), message.into());
        AppError::Validation(violations)
    }
}
