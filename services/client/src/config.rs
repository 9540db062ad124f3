//! services/client/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
    pub ai_service_url: String,
    pub session_file: PathBuf,
    pub log_level: Level,
    pub http_timeout: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        // --- Remote Services ---
        let api_base_url = parse_url(
            "API_BASE_URL",
            lookup("API_BASE_URL").unwrap_or_else(|| "http://localhost:8080".to_string()),
        )?;
        let ai_service_url = parse_url(
            "AI_SERVICE_URL",
            lookup("AI_SERVICE_URL").unwrap_or_else(|| "http://localhost:8000".to_string()),
        )?;

        // --- Session Storage ---
        let session_file = lookup("SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(default_session_file);

        // --- Logging and Transport ---
        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let timeout_str = lookup("HTTP_TIMEOUT_SECS").unwrap_or_else(|| "10".to_string());
        let timeout_secs = timeout_str
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| {
                ConfigError::InvalidValue(
                    "HTTP_TIMEOUT_SECS".to_string(),
                    format!("'{}' is not a positive number of seconds", timeout_str),
                )
            })?;

        Ok(Self {
            api_base_url,
            ai_service_url,
            session_file,
            log_level,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_url(var: &str, value: String) -> Result<String, ConfigError> {
    let value = value.trim().trim_end_matches('/').to_string();
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(value)
    } else {
        Err(ConfigError::InvalidValue(
            var.to_string(),
            format!("'{}' is not an http(s) URL", value),
        ))
    }
}

/// `<data dir>/ai-trip/session.json`, or a dot-directory in the working
/// directory when the platform has no data dir.
fn default_session_file() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("ai-trip"))
        .unwrap_or_else(|| PathBuf::from("./.ai-trip"))
        .join("session.json")
}
