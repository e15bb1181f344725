//! Test application fixture
//!
//! Every `TestApp` gets its own in-memory SQLite database with migrations
//! applied, and a temporary static directory holding an `index.html`.

use axum_test::TestServer;
use sqlx::SqlitePool;
use tempfile::TempDir;
use trivia::backend::auth::SessionKeys;
use trivia::backend::routes::create_router;
use trivia::backend::server::config::{load_database, ServerConfig};
use trivia::backend::AppState;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const INDEX_HTML: &str = "<!doctype html><title>Trivia</title><div id=\"root\"></div>";

/// Server configuration used by all integration tests
pub fn test_config(static_dir: &std::path::Path) -> ServerConfig {
    ServerConfig::builder()
        .jwt_secret(TEST_SECRET)
        .database_url("sqlite::memory:")
        .static_dir(static_dir)
        .bcrypt_cost(4)
        .build()
        .expect("test config is valid")
}

/// Running application backed by an in-memory database
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    // Held so the directory outlives the server
    _static_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let static_dir = tempfile::tempdir().expect("Failed to create static dir");
        std::fs::write(static_dir.path().join("index.html"), INDEX_HTML)
            .expect("Failed to write index.html");
        std::fs::write(static_dir.path().join("app.js"), "console.log('trivia');")
            .expect("Failed to write app.js");

        let config = test_config(static_dir.path());
        let pool = load_database(&config)
            .await
            .expect("Failed to open test database");
        let state = AppState::new(config, pool);
        let server = TestServer::new(create_router(state.clone()))
            .expect("Failed to create test server");

        Self {
            server,
            state,
            _static_dir: static_dir,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.state.db_pool
    }

    pub fn sessions(&self) -> &SessionKeys {
        &self.state.sessions
    }
}
