//! Application configuration loaded from environment variables.

use std::env;

use byline_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub json_logs: bool,
    pub database: DatabaseConfig,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,
}

impl AppConfig {
    /// Load configuration from environment variables. The database URL is
    /// required: without its store the platform has nothing to serve.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database = DatabaseConfig {
            url: env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(20),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2),
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            json_logs: env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            database,
        })
    }
}
