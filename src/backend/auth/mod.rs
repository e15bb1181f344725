//! Authentication Module
//!
//! This module handles user registration, login, and session tokens.
//!
//! # Architecture
//!
//! - **`users`** - User record and database operations
//! - **`sessions`** - JWT token generation and validation
//! - **`handlers`** - HTTP handlers for register and login
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, email and password → user created → public user returned
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Protected calls**: token sent as `Authorization: Bearer` → verified by
//!    `middleware::auth_middleware`
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256 JWTs, stateless, valid for 48 hours
//! - Invalid credentials return 401 (no information leakage)

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, register};
pub use sessions::SessionKeys;
pub use users::User;
