/**
 * Server Configuration
 *
 * This module loads the process-wide server configuration and opens the
 * database connection pool.
 *
 * # Configuration Sources
 *
 * Configuration is read from environment variables once at startup (the
 * binary loads a `.env` file first, if present). The resulting
 * `ServerConfig` is immutable and passed explicitly to the components that
 * need it.
 *
 * | Variable       | Default                        |
 * |----------------|--------------------------------|
 * | `PORT`         | `4000`                         |
 * | `DATABASE_URL` | `sqlite://trivia.db?mode=rwc`  |
 * | `JWT_SECRET`   | required                       |
 * | `STATIC_DIR`   | `dist`                         |
 * | `BCRYPT_COST`  | `12`                           |
 */

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::shared::config::ConfigError;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://trivia.db?mode=rwc";
pub const DEFAULT_STATIC_DIR: &str = "dist";

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// Listening port
    pub port: u16,
    /// sqlx connection URI
    pub database_url: String,
    /// HS256 signing secret for session tokens
    pub jwt_secret: String,
    /// Directory holding the built frontend
    pub static_dir: PathBuf,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// * `MissingValue` - `JWT_SECRET` is not set
    /// * `InvalidValue` - `PORT` or `BCRYPT_COST` does not parse or is out of range
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder()
            .port(parse_var("PORT", DEFAULT_PORT)?)
            .bcrypt_cost(parse_var("BCRYPT_COST", bcrypt::DEFAULT_COST)?);

        if let Ok(url) = std::env::var("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Ok(dir) = std::env::var("STATIC_DIR") {
            builder = builder.static_dir(dir);
        }
        match std::env::var("JWT_SECRET") {
            Ok(secret) => builder = builder.jwt_secret(secret),
            Err(_) => {
                tracing::error!("JWT_SECRET is not set");
            }
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        Ok(())
    }

    /// Whether the database lives only in memory
    pub fn is_in_memory_database(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("database_url", &self.database_url)
            .field("jwt_secret", &"<redacted>")
            .field("static_dir", &self.static_dir)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    port: Option<u16>,
    database_url: Option<String>,
    jwt_secret: Option<String>,
    static_dir: Option<PathBuf>,
    bcrypt_cost: Option<u32>,
}

impl ServerConfigBuilder {
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let config = ServerConfig {
            port: self.port.unwrap_or(DEFAULT_PORT),
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            static_dir: self
                .static_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST),
        };
        config.validate()?;
        Ok(config)
    }
}

fn parse_var<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value.trim().parse().map_err(|_| {
            tracing::warn!("Invalid {} value: {}", key, value);
            ConfigError::InvalidValue { key, value }
        }),
        Err(_) => {
            tracing::debug!("{} not set, using default", key);
            Ok(default)
        }
    }
}

/// Open the connection pool and run migrations
///
/// An in-memory SQLite database exists per connection, so such a pool is
/// pinned to a single connection that is never recycled.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or a migration fails.
pub async fn load_database(config: &ServerConfig) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = if config.is_in_memory_database() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(8)
    };

    let pool = options.connect(&config.database_url).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
