/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Issue a 48-hour session token
 * 4. Respond 202 with a greeting and the token
 *
 * # Security
 *
 * - Unknown email and wrong password give the same 401 response
 * - Passwords are never logged or returned
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::{LoginRequest, LoginResponse};

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - If user is not found or password is incorrect
/// * `500 Internal Server Error` - If database query or token generation fails
///
/// # Example Response
///
/// ```json
/// HTTP/1.1 202 Accepted
///
/// {
///   "message": "Welcome back alice",
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LoginResponse>), BackendError> {
    let Json(request) = payload?;
    tracing::debug!("Login request received");

    let user = get_user_by_email(&state.db_pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login rejected: unknown email");
            BackendError::unauthorized("Unauthorized")
        })?;

    if !user.validate_password(&request.password) {
        tracing::warn!("Login rejected: invalid password for user {}", user.id);
        return Err(BackendError::unauthorized("Unauthorized"));
    }

    let token = state.sessions.issue_token(user.id)?;

    tracing::info!("User logged in successfully: {} ({})", user.username, user.id);

    Ok((
        StatusCode::ACCEPTED,
        Json(LoginResponse {
            message: format!("Welcome back {}", user.username),
            token,
        }),
    ))
}
