//! API Client
//!
//! Async HTTP client for the trivia API. It keeps the bearer token returned
//! by login and attaches it to protected requests, the same contract the
//! frontend follows.
//!
//! # Module Structure
//!
//! ```text
//! client/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Server URL and token storage
//! ├── error.rs        - ClientError
//! └── api.rs          - TriviaClient endpoint calls
//! ```

pub mod api;
pub mod config;
pub mod error;

pub use api::TriviaClient;
pub use config::Config;
pub use error::ClientError;
