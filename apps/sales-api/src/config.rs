//! Sales API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults; nothing here is secret, so there is no config file layer.

use chrono::Duration;
use std::env;

/// Sales API configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen port
    pub http_port: u16,

    /// SQLite database file path
    pub database_path: String,

    /// Max inquiries per client IP inside one window
    pub inquiry_rate_limit: i64,

    /// Sliding rate-limit window length in seconds
    pub inquiry_rate_window_secs: i64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config {
            http_port: env::var("HTTP_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HTTP_PORT".to_string()))?,

            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "./data/gerai.db".to_string()),

            inquiry_rate_limit: env::var("INQUIRY_RATE_LIMIT")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("INQUIRY_RATE_LIMIT".to_string()))?,

            inquiry_rate_window_secs: env::var("INQUIRY_RATE_WINDOW_SECS")
                .unwrap_or_else(|_| "600".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("INQUIRY_RATE_WINDOW_SECS".to_string()))?,
        };

        if config.inquiry_rate_limit <= 0 || config.inquiry_rate_window_secs <= 0 {
            return Err(ConfigError::InvalidValue(
                "inquiry rate limit and window must be positive".to_string(),
            ));
        }

        Ok(config)
    }

    /// The sliding window as a chrono duration.
    pub fn inquiry_rate_window(&self) -> Duration {
        Duration::seconds(self.inquiry_rate_window_secs)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

// =============================================================================
// Unit Tests
// =============================================================================
