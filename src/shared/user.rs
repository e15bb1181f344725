/**
 * User Wire Types
 *
 * Request and response bodies for the user, auth and comment endpoints.
 * These types are used by the axum handlers and by the API client.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::score::{Score, ScoreDelta};

/// Registration request
///
/// Fields are optional on the wire so that a missing field surfaces as a
/// validation error from the user module rather than a body rejection.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Plaintext password, hashed before storage
    #[serde(default)]
    pub password: Option<String>,
}

impl RegisterRequest {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: Some(username.into()),
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    /// Greeting, e.g. "Welcome back alice"
    pub message: String,
    /// Bearer token, valid for 48 hours
    pub token: String,
}

/// Public view of a user
///
/// This is the only user shape that leaves the server. It has no
/// credential field.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub score: Score,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Score update request
///
/// Only `score` is read; any other field in the body is ignored.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ScoreUpdateRequest {
    #[serde(default)]
    pub score: Option<ScoreDelta>,
}

impl ScoreUpdateRequest {
    pub fn new(right: i64, wrong: i64) -> Self {
        Self {
            score: Some(ScoreDelta::new(right, wrong)),
        }
    }
}

/// New comment request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub text: String,
}

/// Comment as returned by the API
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CommentResponse {
    pub id: Uuid,
    pub text: String,
    pub user_id: Uuid,
    /// Author's username at read time
    pub username: String,
    pub created_at: DateTime<Utc>,
}
