/**
 * Server Initialization
 *
 * This module turns a `ServerConfig` into a ready-to-serve Axum router.
 *
 * # Initialization Process
 *
 * 1. Open the database pool and run migrations
 * 2. Derive session keys and build `AppState`
 * 3. Create the router with all routes and middleware
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if the database cannot be opened or migrated. Unlike optional
/// services, the store is required: every endpoint depends on it.
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing trivia backend server");

    let db_pool = load_database(&config).await?;
    let app_state = AppState::new(config, db_pool);

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
