//! Shared Error Types
//!
//! Errors raised while turning client input into domain values, before any
//! storage or transport is involved.
//!
//! # Error Categories
//!
//! - `ValidationError` - A request field is missing or malformed
//! - `UnknownChannel` - A relay destination or topic name is not recognised
//!
//! # Usage
//!
//! ```rust
//! use stickyboard::shared::error::SharedError;
//!
//! let error = SharedError::validation("content", "comment content cannot be empty");
//! ```
use thiserror::Error;

/// Errors produced by the shared domain types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Relay channel lookup failed
    #[error("Unknown relay channel: {name}")]
    UnknownChannel {
        /// The destination or topic that was requested
        name: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new unknown channel error
    pub fn unknown_channel(name: impl Into<String>) -> Self {
        Self::UnknownChannel { name: name.into() }
    }
}
