//! Dashboard configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, so the desktop client can launch the process with nothing but
//! `STOCKROOM_DB_PATH` set.

use std::env;
use thiserror::Error;

/// Dashboard configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// HTTP port to listen on.
    pub port: u16,

    /// Path to the shared SQLite store.
    pub database_path: String,

    /// HS256 secret for signing access tokens.
    pub jwt_secret: String,

    /// Access token lifetime in seconds.
    pub token_lifetime_secs: i64,
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {0}")]
    InvalidValue(String),
}

impl DashboardConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable                 | Default          |
    /// |--------------------------|------------------|
    /// | `STOCKROOM_PORT`         | `8701`           |
    /// | `STOCKROOM_DB_PATH`      | `./stockroom.db` |
    /// | `STOCKROOM_JWT_SECRET`   | dev-only secret  |
    /// | `STOCKROOM_TOKEN_SECS`   | `28800` (8h)     |
    pub fn load() -> Result<Self, ConfigError> {
        Ok(DashboardConfig {
            port: env::var("STOCKROOM_PORT")
                .unwrap_or_else(|_| "8701".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("STOCKROOM_PORT".to_string()))?,

            database_path: env::var("STOCKROOM_DB_PATH")
                .unwrap_or_else(|_| "./stockroom.db".to_string()),

            // In production this MUST be set via environment variable;
            // the fallback only keeps single-machine dev setups running.
            jwt_secret: env::var("STOCKROOM_JWT_SECRET")
                .unwrap_or_else(|_| "stockroom-dev-secret-change-in-production".to_string()),

            token_lifetime_secs: env::var("STOCKROOM_TOKEN_SECS")
                .unwrap_or_else(|_| "28800".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("STOCKROOM_TOKEN_SECS".to_string()))?,
        })
    }
}
