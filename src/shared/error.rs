//! Shared Error Types
//!
//! This module defines error types that are shared between the server and the
//! client. These errors represent failures that do not depend on any transport.
//!
//! # Error Categories
//!
//! - `ValidationError` - Data validation failures
//!
//! # Usage
//!
//! ```rust
//! use trivia::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "is required");
//! ```
use thiserror::Error;

/// Shared error types that can occur in both server and client
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SharedError {
    /// Data validation error
    #[error("{field} {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
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
}
