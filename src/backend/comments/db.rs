//! Database operations for comments

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::CommentResponse;

/// Comment joined with its author's username
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub text: String,
    pub user_id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        CommentResponse {
            id: comment.id,
            text: comment.text,
            user_id: comment.user_id,
            username: comment.username,
            created_at: comment.created_at,
        }
    }
}

/// Create a comment
///
/// The caller guarantees `user_id` names an existing user.
pub async fn create_comment(
    pool: &SqlitePool,
    user_id: Uuid,
    text: &str,
) -> Result<Comment, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO comments (id, text, user_id, created_at)
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(id)
    .bind(text)
    .bind(user_id)
    .bind(now)
    .execute(pool)
    .await?;

    sqlx::query_as::<_, Comment>(
        r#"
        SELECT c.id, c.text, c.user_id, u.username, c.created_at
        FROM comments c
        JOIN users u ON u.id = c.user_id
        WHERE c.id = ?1
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await
}

/// List all comments, oldest first
pub async fn list_comments(pool: &SqlitePool) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT c.id, c.text, c.user_id, u.username, c.created_at
        FROM comments c
        JOIN users u ON u.id = c.user_id
        ORDER BY c.created_at ASC, c.rowid ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// List the comments written by one user, oldest first
pub async fn list_comments_for_user(
    pool: &SqlitePool,
    user_id: Uuid,
) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT c.id, c.text, c.user_id, u.username, c.created_at
        FROM comments c
        JOIN users u ON u.id = c.user_id
        WHERE c.user_id = ?1
        ORDER BY c.created_at ASC, c.rowid ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
