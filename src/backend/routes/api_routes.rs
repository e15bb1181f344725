/**
 * API Routes
 *
 * This module defines the `/api` router.
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/register` - User registration
 * - `POST /api/login` - User login
 * - `GET /api/users` - All users
 * - `GET /api/users/{id}` - One user
 * - `GET /api/users/{id}/comments` - One user's comments
 * - `GET /api/comments` - All comments
 *
 * ## Authenticated (bearer token)
 * - `POST /api/users/score` - Add to the caller's score
 * - `POST /api/comments` - Create a comment
 *
 * Any other path under `/api` gets a JSON 404 instead of the frontend.
 */

use axum::{
    extract::OriginalUri,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{login, register};
use crate::backend::comments::{create_comment, list_comments, list_user_comments};
use crate::backend::error::BackendError;
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;
use crate::backend::users::{add_to_score, get_user, list_users};

/// Build the router mounted at `/api`
///
/// The auth middleware is attached to the protected method handlers only,
/// so an unsupported method on a protected path still gets 405.
pub fn api_routes(app_state: AppState) -> Router<AppState> {
    let auth = from_fn_with_state(app_state, auth_middleware);

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/users", get(list_users))
        .route("/users/score", post(add_to_score).route_layer(auth.clone()))
        .route("/users/{id}", get(get_user))
        .route("/users/{id}/comments", get(list_user_comments))
        .route(
            "/comments",
            get(list_comments).merge(post(create_comment).route_layer(auth)),
        )
        .fallback(api_not_found)
}

async fn api_not_found(OriginalUri(uri): OriginalUri) -> BackendError {
    tracing::debug!("No API route for {}", uri.path());
    BackendError::not_found(format!("No route for {}", uri.path()))
}
