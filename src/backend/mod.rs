//! Backend Module
//!
//! This module contains all server-side code for the trivia application.
//! It provides an Axum HTTP server with JWT authentication, score tracking
//! and comments, persisted in SQLite through sqlx.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - User entity, JWT sessions, register/login handlers
//! - **`users`** - User listing, lookup and score handlers
//! - **`comments`** - Comment persistence and handlers
//! - **`middleware`** - Bearer token middleware
//! - **`error`** - Backend error type and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - trivia-server binary
//! ├── server/         - Config, state, initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Users, sessions, auth handlers
//! ├── users/          - User controller handlers
//! ├── comments/       - Comment storage and handlers
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the SQLite pool, the session keys and the server
//! configuration. Everything in it is cheap to clone and shared by all
//! request handlers.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. The error maps itself to a
//! status code and a JSON body; 5xx causes are logged and never sent to the
//! client.

/// Server setup and configuration
#[cfg(feature = "ssr")]
pub mod server;

/// Route configuration
#[cfg(feature = "ssr")]
pub mod routes;

/// Backend error types
#[cfg(feature = "ssr")]
pub mod error;

/// Authentication and user management
#[cfg(feature = "ssr")]
pub mod auth;

/// User controller
#[cfg(feature = "ssr")]
pub mod users;

/// Comments
#[cfg(feature = "ssr")]
pub mod comments;

/// Middleware for request processing
#[cfg(feature = "ssr")]
pub mod middleware;

/// Re-export commonly used types
#[cfg(feature = "ssr")]
pub use server::{create_app, AppState, ServerConfig};
#[cfg(feature = "ssr")]
pub use error::BackendError;
