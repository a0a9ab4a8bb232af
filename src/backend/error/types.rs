/**
 * Backend Error Types
 *
 * This module defines the single error type used by the storage layer,
 * services and HTTP handlers.
 *
 * # Error Categories
 *
 * ## Domain Errors
 *
 * - `NotFound` - a referenced note does not exist
 * - `SharedError` - a request field failed validation
 *
 * ## Handler Errors
 *
 * Errors raised while processing a request that carry their own status,
 * such as an unknown relay destination.
 *
 * ## Infrastructure Errors
 *
 * Database, migration and configuration failures. These
 * surface as `500 Internal Server Error` and never affect other requests.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::backend::server::config::ConfigError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use stickyboard::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::not_found("StickyNote", 42);
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// A referenced record does not exist
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of record that was looked up
        entity: &'static str,
        /// Identifier that did not resolve
        id: i64,
    },

    /// Handler error (e.g., unknown relay destination)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Validation or lookup error from the shared types
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// Migration error
    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
}

impl BackendError {
    /// Create a new not-found error
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `NotFound` - 404 Not Found
    /// - `HandlerError` - Uses the status code from the error
    /// - `SharedError` - 400 for validation, 404 for unknown channels
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::HandlerError { status, .. } => *status,
            Self::SharedError(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::UnknownChannel { .. } => StatusCode::NOT_FOUND,
            },
            Self::DatabaseError(_)
            | Self::MigrationError(_)
            | Self::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    ///
    /// Infrastructure errors are reported generically; their detail goes to
    /// the log, not to the client.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::NotFound { .. } | Self::SharedError(_) => self.to_string(),
            Self::DatabaseError(_) => "Database error".to_string(),
            Self::MigrationError(_) | Self::ConfigError(_) => "Internal server error".to_string(),
        }
    }
}
