//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::sync::LazyLock;
use std::time::Duration;

use crate::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_EXECUTION_BASE_URL,
    DEFAULT_EXECUTION_DEADLINE_SECONDS, DEFAULT_JUDGE_WORKERS, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub judge: JudgeConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Judging pipeline configuration
#[derive(Debug, Clone)]
pub struct JudgeConfig {
    /// Base URL of the remote execution service
    pub execution_base_url: String,
    /// Optional API key forwarded to the execution service
    pub execution_api_key: Option<String>,
    /// Hard wall-clock deadline applied to each execution call, in seconds
    pub execution_deadline_seconds: u64,
    /// Number of concurrent judge workers
    pub workers: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            judge: JudgeConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        })
    }
}

impl JudgeConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            execution_base_url: env::var("EXECUTION_SERVICE_URL")
                .unwrap_or_else(|_| DEFAULT_EXECUTION_BASE_URL.to_string()),
            execution_api_key: env::var("EXECUTION_SERVICE_API_KEY").ok(),
            execution_deadline_seconds: env::var("EXECUTION_DEADLINE_SECONDS")
                .unwrap_or_else(|_| DEFAULT_EXECUTION_DEADLINE_SECONDS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("EXECUTION_DEADLINE_SECONDS".to_string()))?,
            workers: env::var("JUDGE_WORKERS")
                .unwrap_or_else(|_| DEFAULT_JUDGE_WORKERS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("JUDGE_WORKERS".to_string()))?,
        })
    }

    /// Deadline for one execution-service call
    pub fn execution_deadline(&self) -> Duration {
        Duration::from_secs(self.execution_deadline_seconds)
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Test that defaults are applied when env vars are not set
        let server = ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: "info".to_string(),
        };
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }

    #[test]
    fn test_judge_defaults() {
        let judge = JudgeConfig {
            execution_base_url: DEFAULT_EXECUTION_BASE_URL.to_string(),
            execution_api_key: None,
            execution_deadline_seconds: DEFAULT_EXECUTION_DEADLINE_SECONDS,
            workers: DEFAULT_JUDGE_WORKERS,
        };
        assert_eq!(judge.execution_deadline(), Duration::from_secs(15));
        assert_eq!(judge.workers, 4);
    }
}
