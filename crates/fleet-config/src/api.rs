//! Backend API configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Backend origin, without the `/api` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Bearer token from a previous `fleetdeck login`.
    #[serde(default)]
    pub token: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            token: String::new(),
        }
    }
}

impl ApiConfig {
    /// Check if a bearer token is available.
    pub fn is_configured(&self) -> bool {
        !self.token.is_empty()
    }

    /// Return the bearer token or a `NotConfigured` error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` when no token is set.
    pub fn require_token(&self) -> Result<&str, ConfigError> {
        if self.is_configured() {
            Ok(&self.token)
        } else {
            Err(ConfigError::NotConfigured {
                section: "api.token".to_string(),
            })
        }
    }

    /// Reject values the HTTP client cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a non-http(s) base URL or a
    /// zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                reason: format!("'{}' is not an http(s) URL", self.base_url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
