//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `FURNACE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use emotion_furnace::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod error;
mod server;
mod upstream;

pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use upstream::{UpstreamConfig, UpstreamCredentials};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a server that
/// answers from the keyword fallback only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream chat-completion configuration
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FURNACE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `FURNACE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `FURNACE__UPSTREAM__API_KEY=...` -> `upstream.api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FURNACE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    /// With the remote path enabled, the upstream timeout must be shorter
    /// than the request timeout.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.upstream.validate()?;
        if self.upstream.is_configured()
            && self.upstream.timeout_secs >= self.server.request_timeout_secs
        {
            return Err(ValidationError::UpstreamTimeoutTooLong {
                upstream_secs: self.upstream.timeout_secs,
                request_secs: self.server.request_timeout_secs,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "FURNACE__SERVER__PORT",
        "FURNACE__SERVER__ENVIRONMENT",
        "FURNACE__UPSTREAM__API_KEY",
        "FURNACE__UPSTREAM__API_URL",
        "FURNACE__UPSTREAM__MODEL",
        "FURNACE__UPSTREAM__TIMEOUT_SECS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(!config.upstream.is_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_upstream_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("FURNACE__UPSTREAM__API_KEY", "key-abc");
        env::set_var("FURNACE__UPSTREAM__API_URL", "https://llm.example.com/chat/completions");
        env::set_var("FURNACE__UPSTREAM__MODEL", "doubao-pro");
        env::set_var("FURNACE__UPSTREAM__TIMEOUT_SECS", "15");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.upstream.is_configured());
        assert_eq!(config.upstream.timeout_secs, 15);
        assert_eq!(config.upstream.model.as_deref(), Some("doubao-pro"));
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("FURNACE__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }

    fn configured(upstream_secs: u64, request_secs: u64) -> AppConfig {
        AppConfig {
            server: ServerConfig {
                request_timeout_secs: request_secs,
                ..Default::default()
            },
            upstream: UpstreamConfig {
                api_key: Some("key-abc".to_string()),
                api_url: Some("https://llm.example.com/chat/completions".to_string()),
                model: Some("doubao-pro".to_string()),
                timeout_secs: upstream_secs,
            },
        }
    }

    #[test]
    fn test_upstream_timeout_must_undercut_request_timeout() {
        assert!(configured(20, 30).validate().is_ok());
        assert!(matches!(
            configured(20, 20).validate(),
            Err(ValidationError::UpstreamTimeoutTooLong {
                upstream_secs: 20,
                request_secs: 20
            })
        ));
        assert!(configured(20, 10).validate().is_err());
    }

    #[test]
    fn test_request_timeout_unconstrained_without_upstream() {
        let mut config = configured(20, 10);
        config.upstream.api_key = None;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("FURNACE__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.port, 3000);
    }
}
