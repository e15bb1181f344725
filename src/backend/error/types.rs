/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - Validation failures (missing registration fields, duplicate email,
 *   negative score delta) → 400
 * - Authentication failures (bad credentials, invalid or expired token) → 401
 * - Unknown resources → 404
 * - Malformed request bodies → status chosen by the body extractor
 *
 * ## Server Errors
 *
 * Store, token signing and hashing failures → 500. These are logged in full
 * and replaced by a generic message in the response.
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Message sent to clients in place of any 5xx cause
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
///
/// ```rust
/// use trivia::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::unauthorized("Unauthorized");
/// assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status (e.g. rejected request body)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Validation error from the shared types or the user module
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Bad credentials or an invalid/expired bearer token
    #[error("Unauthorized: {message}")]
    AuthError {
        /// Human-readable error message
        message: String,
    },

    /// Requested resource does not exist
    #[error("Not found: {message}")]
    NotFoundError {
        /// Human-readable error message
        message: String,
    },

    /// Store failure
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// Token signing failure
    #[error("Token error: {0}")]
    TokenError(#[from] jsonwebtoken::errors::Error),

    /// Password hashing failure
    #[error("Password hashing error: {0}")]
    HashError(#[from] bcrypt::BcryptError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SharedError(SharedError::validation(field, message))
    }

    /// Create a new authentication error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::AuthError {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFoundError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `SharedError` - 400 Bad Request
    /// - `AuthError` - 401 Unauthorized
    /// - `NotFoundError` - 404 Not Found
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::AuthError { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFoundError { .. } => StatusCode::NOT_FOUND,
            Self::DatabaseError(_)
            | Self::TokenError(_)
            | Self::HashError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether this error is the server's fault
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Get the message that is safe to send to the client
    pub fn message(&self) -> String {
        if self.is_server_error() {
            return INTERNAL_ERROR_MESSAGE.to_string();
        }
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::AuthError { message } => message.clone(),
            Self::NotFoundError { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::handler(rejection.status(), rejection.body_text())
    }
}
