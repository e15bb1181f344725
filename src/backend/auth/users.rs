/**
 * User Model and Database Operations
 *
 * This module owns the user record: creating it with a hashed password,
 * checking a candidate password, looking it up, and incrementing its score.
 * The password hash never leaves this module; handlers convert `User` into
 * `UserResponse` before serializing.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::shared::{RegisterRequest, Score, ScoreDelta, SharedError, UserResponse};

/// User struct representing a row of the `users` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name
    pub username: String,
    /// Login key, stored lowercase
    pub email: String,
    /// Hashed password (bcrypt)
    password_hash: String,
    /// Questions answered correctly
    pub score_right: i64,
    /// Questions answered incorrectly
    pub score_wrong: i64,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn score(&self) -> Score {
        Score::new(self.score_right, self.score_wrong)
    }

    /// Check a candidate password against the stored hash
    ///
    /// Never fails: a mismatch and an unreadable hash both yield `false`.
    pub fn validate_password(&self, candidate: &str) -> bool {
        match bcrypt::verify(candidate, &self.password_hash) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!("Stored password hash for user {} is unreadable: {}", self.id, e);
                false
            }
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let score = user.score();
        UserResponse {
            id: user.id,
            username: user.username,
            email: user.email,
            score,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Registration fields after validation
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Normalize an email for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn required(value: &Option<String>, field: &str) -> Result<String, SharedError> {
    match value.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(SharedError::validation(field, "is required")),
    }
}

/// Validate a registration request
///
/// `username`, `email` and `password` must be present and non-blank, and
/// `email` must contain `@`. The password is kept as typed (only checked for
/// blankness).
pub fn validate_registration(request: &RegisterRequest) -> Result<NewUser, SharedError> {
    let username = required(&request.username, "username")?;
    let email = normalize_email(&required(&request.email, "email")?);
    required(&request.password, "password")?;
    let password = request.password.clone().unwrap_or_default();

    if !email.contains('@') {
        return Err(SharedError::validation("email", "is not a valid email address"));
    }

    Ok(NewUser {
        username,
        email,
        password,
    })
}

/// Create a new user
///
/// Validates the request, rejects an already-registered email, hashes the
/// password and inserts the row. Scores start at zero.
///
/// # Errors
///
/// * `SharedError` (validation) - missing field, bad email, duplicate email
/// * `HashError` / `DatabaseError` - hashing or store failure
pub async fn create_user(
    pool: &SqlitePool,
    request: &RegisterRequest,
    bcrypt_cost: u32,
) -> Result<User, BackendError> {
    let new_user = validate_registration(request)?;

    if get_user_by_email(pool, &new_user.email).await?.is_some() {
        tracing::warn!("Registration rejected: email already registered");
        return Err(BackendError::validation("email", "is already registered"));
    }

    let password_hash = bcrypt::hash(&new_user.password, bcrypt_cost)?;
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, email, password_hash, score_right, score_wrong, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, 0, 0, ?5, ?6)
        RETURNING id, username, email, password_hash, score_right, score_wrong, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&new_user.username)
    .bind(&new_user.email)
    .bind(&password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        // Lost a race with a concurrent registration of the same email.
        if let sqlx::Error::Database(db) = &e {
            if db.is_unique_violation() {
                return BackendError::validation("email", "is already registered");
            }
        }
        BackendError::from(e)
    })?;

    tracing::info!("User created: {} ({})", user.username, user.id);
    Ok(user)
}

/// Get user by email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, score_right, score_wrong, created_at, updated_at
        FROM users
        WHERE email = ?1
        "#,
    )
    .bind(normalize_email(email))
    .fetch_optional(pool)
    .await
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, score_right, score_wrong, created_at, updated_at
        FROM users
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// List all users, oldest first
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, score_right, score_wrong, created_at, updated_at
        FROM users
        ORDER BY created_at ASC, rowid ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Add `delta` to a user's score
///
/// A single `UPDATE` increments both counters in the store, so concurrent
/// calls for the same user all take effect. The row is only touched when
/// neither counter would pass `i64::MAX`; SQLite would otherwise store the
/// sum as a REAL. `delta` must already be validated as non-negative.
///
/// # Returns
/// Updated user, or None if no user has this ID
///
/// # Errors
///
/// * `SharedError` (validation) - the increment would overflow a counter
/// * `DatabaseError` - store failure
pub async fn add_to_score(
    pool: &SqlitePool,
    id: Uuid,
    delta: ScoreDelta,
) -> Result<Option<User>, BackendError> {
    let updated = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET score_right = score_right + ?1, score_wrong = score_wrong + ?2, updated_at = ?3
        WHERE id = ?4
          AND score_right <= ?5 - ?1
          AND score_wrong <= ?5 - ?2
        RETURNING id, username, email, password_hash, score_right, score_wrong, created_at, updated_at
        "#,
    )
    .bind(delta.right)
    .bind(delta.wrong)
    .bind(Utc::now())
    .bind(id)
    .bind(i64::MAX)
    .fetch_optional(pool)
    .await?;

    if updated.is_some() {
        return Ok(updated);
    }

    match get_user_by_id(pool, id).await? {
        Some(_) => {
            tracing::warn!("Score update for {} would overflow", id);
            Err(BackendError::validation("score", "is too large"))
        }
        None => Ok(None),
    }
}
