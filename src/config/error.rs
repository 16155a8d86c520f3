//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid host address: {0}")]
    InvalidHost(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid upstream timeout")]
    InvalidUpstreamTimeout,

    #[error("Upstream API URL must use http or https")]
    InvalidUpstreamUrl,

    #[error("Upstream timeout ({upstream_secs}s) must be shorter than the request timeout ({request_secs}s)")]
    UpstreamTimeoutTooLong { upstream_secs: u64, request_secs: u64 },
}
