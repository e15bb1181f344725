//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Bearer token middleware for protected routes
//!
//! Request logging is not implemented here; the router installs
//! `tower_http::trace::TraceLayer` for that.

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser};
