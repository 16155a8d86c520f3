//! Upstream chat-completion configuration
//!
//! Every field is optional: the remote path is enabled only when the API key,
//! endpoint URL and model are all present and non-empty. Otherwise analysis
//! runs entirely on the keyword fallback.

use secrecy::Secret;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use super::error::ValidationError;

/// Upstream LLM configuration
#[derive(Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Bearer token for the chat-completion endpoint
    pub api_key: Option<String>,

    /// Full chat-completion endpoint URL
    pub api_url: Option<String>,

    /// Model identifier sent with every request
    pub model: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// The three values required to call the upstream endpoint.
#[derive(Debug, Clone)]
pub struct UpstreamCredentials {
    pub api_key: Secret<String>,
    pub api_url: String,
    pub model: String,
}

impl UpstreamConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns the credentials when all three are present and non-empty.
    pub fn credentials(&self) -> Option<UpstreamCredentials> {
        let api_key = self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())?;
        let api_url = self.api_url.as_deref().map(str::trim).filter(|u| !u.is_empty())?;
        let model = self.model.as_deref().map(str::trim).filter(|m| !m.is_empty())?;

        Some(UpstreamCredentials {
            api_key: Secret::new(api_key.to_string()),
            api_url: api_url.to_string(),
            model: model.to_string(),
        })
    }

    /// Check if the remote path is enabled
    pub fn is_configured(&self) -> bool {
        self.credentials().is_some()
    }

    /// Validate upstream configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidUpstreamTimeout);
        }
        if let Some(url) = self.api_url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidUpstreamUrl);
            }
        }
        Ok(())
    }
}

impl fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: None,
            model: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    20
}
