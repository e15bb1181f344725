//! User Controller
//!
//! HTTP handlers over the user records:
//!
//! - `GET /api/users` - All users
//! - `GET /api/users/{id}` - One user, 404 if unknown
//! - `POST /api/users/score` - Add to the caller's score (bearer token)
//!
//! Storage lives in `backend::auth::users`.

pub mod handlers;

pub use handlers::{add_to_score, get_user, list_users};
