//! User HTTP Handlers
//!
//! Listing and lookup are public. Score updates require a token and only
//! ever touch the caller's own record.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::auth::users;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::shared::{ScoreUpdateRequest, UserResponse};

/// Parse a path identifier; anything that is not a UUID names no user
pub(crate) fn parse_user_id(id: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(id).map_err(|_| BackendError::not_found("User not found"))
}

/// GET /api/users
pub async fn list_users(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<UserResponse>>, BackendError> {
    let users = users::list_users(&pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, BackendError> {
    let user_id = parse_user_id(&id)?;

    let user = users::get_user_by_id(&pool, user_id)
        .await?
        .ok_or_else(|| BackendError::not_found("User not found"))?;

    Ok(Json(user.into()))
}

/// POST /api/users/score
///
/// Adds `score.right` and `score.wrong` from the body to the caller's
/// score and responds 202 with the updated user. Other body fields are
/// ignored.
///
/// # Errors
///
/// * `400 Bad Request` - `score` missing, a negative delta, or a counter
///   that would pass `i64::MAX`
/// * `401 Unauthorized` - Rejected by the auth middleware
/// * `404 Not Found` - The user vanished between auth and update
pub async fn add_to_score(
    State(pool): State<SqlitePool>,
    AuthUser(current): AuthUser,
    payload: Result<Json<ScoreUpdateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), BackendError> {
    let Json(request) = payload?;
    let delta = request
        .score
        .ok_or_else(|| BackendError::validation("score", "is required"))?;
    delta.validate()?;

    let user = users::add_to_score(&pool, current.user_id, delta)
        .await?
        .ok_or_else(|| BackendError::not_found("User not found"))?;

    tracing::info!(
        "Score updated for {}: right={} wrong={}",
        user.id,
        user.score_right,
        user.score_wrong
    );

    Ok((StatusCode::ACCEPTED, Json(user.into())))
}
