//! Comment HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;

use super::db;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::users::handlers::parse_user_id;
use crate::shared::{CommentResponse, CreateCommentRequest};

/// POST /api/comments
///
/// Creates a comment authored by the caller. Responds 201.
pub async fn create_comment(
    State(pool): State<SqlitePool>,
    AuthUser(current): AuthUser,
    payload: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CommentResponse>), BackendError> {
    let Json(request) = payload?;
    let text = request.text.trim();
    if text.is_empty() {
        return Err(BackendError::validation("text", "is required"));
    }

    let comment = db::create_comment(&pool, current.user_id, text).await?;
    tracing::info!("Comment {} created by {}", comment.id, comment.user_id);

    Ok((StatusCode::CREATED, Json(comment.into())))
}

/// GET /api/comments
pub async fn list_comments(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<CommentResponse>>, BackendError> {
    let comments = db::list_comments(&pool).await?;
    Ok(Json(comments.into_iter().map(CommentResponse::from).collect()))
}

/// GET /api/users/{id}/comments
pub async fn list_user_comments(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Json<Vec<CommentResponse>>, BackendError> {
    let user_id = parse_user_id(&id)?;
    if get_user_by_id(&pool, user_id).await?.is_none() {
        return Err(BackendError::not_found("User not found"));
    }

    let comments = db::list_comments_for_user(&pool, user_id).await?;
    Ok(Json(comments.into_iter().map(CommentResponse::from).collect()))
}
