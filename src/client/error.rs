use reqwest::StatusCode;
use thiserror::Error;

use crate::shared::config::ConfigError;

/// Errors returned by `TriviaClient`
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or undecodable response body
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    /// A protected call was made without a stored token
    #[error("not authenticated")]
    NotAuthenticated,

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// HTTP status of an `Api` error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
