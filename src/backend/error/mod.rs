//! Backend Error Module
//!
//! This module defines the error type used by HTTP handlers and its
//! conversion to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Types
//!
//! - `HandlerError` - Explicit status, e.g. a rejected JSON body
//! - `SharedError` - Validation errors (400)
//! - `AuthError` - Bad credentials or token (401)
//! - `NotFoundError` - Unknown resource (404)
//! - `DatabaseError`, `TokenError`, `HashError` - 500

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use conversion::ErrorBody;
pub use types::BackendError;
