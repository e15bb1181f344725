//! Shared Module
//!
//! This module contains types that are shared between the server and the API
//! client. Everything here is plain serde data and compiles without the `ssr`
//! feature.

/// Score tracking types
pub mod score;

/// User, auth and comment wire types
pub mod user;

/// Shared error types
pub mod error;

/// Client configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use score::{Score, ScoreDelta};
pub use user::{
    CommentResponse, CreateCommentRequest, LoginRequest, LoginResponse, RegisterRequest,
    ScoreUpdateRequest, UserResponse,
};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
