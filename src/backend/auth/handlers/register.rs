/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /api/register.
 *
 * # Registration Process
 *
 * 1. Validate that username, email and password are present
 * 2. Reject an email that is already registered
 * 3. Hash the password and create the user
 * 4. Return the public view of the new user (no password hash)
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::users::create_user;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::{RegisterRequest, UserResponse};

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing field, invalid email, or email already registered
/// * `500 Internal Server Error` - Hashing or database failure
///
/// # Example Request
///
/// ```http
/// POST /api/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "email": "alice@example.com",
///   "password": "correct horse"
/// }
/// ```
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, BackendError> {
    let Json(request) = payload?;
    tracing::debug!("Register request received");

    let user = create_user(&state.db_pool, &request, state.config.bcrypt_cost).await?;

    Ok(Json(user.into()))
}
