/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds:
 * - The SQLite connection pool
 * - The session keys, derived once from the configured secret
 * - The server configuration itself
 *
 * All fields are cheap to clone (`SqlitePool` is reference counted, the
 * rest sit behind `Arc`), so the state is cloned into every handler.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::server::config::ServerConfig;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Token signing and verification keys
    pub sessions: Arc<SessionKeys>,

    /// Configuration loaded at startup
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build the state from a loaded configuration and an open pool
    pub fn new(config: ServerConfig, db_pool: SqlitePool) -> Self {
        let sessions = Arc::new(SessionKeys::new(&config.jwt_secret));
        Self {
            db_pool,
            sessions,
            config: Arc::new(config),
        }
    }
}

/// Implement FromRef for SqlitePool
///
/// This allows Axum handlers to extract the pool directly with
/// `State(pool): State<SqlitePool>`.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Implement FromRef for the session keys
impl FromRef<AppState> for Arc<SessionKeys> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}
