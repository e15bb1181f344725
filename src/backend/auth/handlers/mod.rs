//! Authentication Handlers Module
//!
//! HTTP handlers for the unauthenticated auth endpoints.
//!
//! # Handlers
//!
//! - **`register`** - POST /api/register - User registration
//! - **`login`** - POST /api/login - User authentication
//!
//! Request and response bodies live in `crate::shared::user`, since the API
//! client uses them too.

/// Register handler
pub mod register;

/// Login handler
pub mod login;


// Re-export handlers
pub use login::login;
pub use register::register;
