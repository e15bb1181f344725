//! Comments
//!
//! Players can leave comments; each one references its author.
//!
//! - `POST /api/comments` - Create (bearer token)
//! - `GET /api/comments` - All comments
//! - `GET /api/users/{id}/comments` - One user's comments

pub mod db;
pub mod handlers;

pub use handlers::{create_comment, list_comments, list_user_comments};
