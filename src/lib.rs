//! Trivia - Main Library
//!
//! Trivia is the backend of a small quiz game: players register, log in with
//! a bearer token, and accumulate right/wrong answer counts on their profile.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between the server and the API client
//!   - Score and user response shapes
//!   - Request bodies for register, login, score and comment endpoints
//!   - Validation errors and client configuration
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server and router
//!   - JWT sessions and bcrypt password hashing
//!   - SQLite persistence through sqlx
//!
//! - **`client`** - HTTP client for the trivia API
//!   - Keeps the bearer token after login
//!   - Attaches it to protected requests
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the
//!   `trivia-server` binary.
//!
//! # Usage
//!
//! ```rust,no_run
//! use trivia::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```

/// Types shared between server and client
pub mod shared;

/// Server-side code
pub mod backend;

/// API client
pub mod client;

pub use shared::{Score, ScoreDelta, SharedError, UserResponse};
