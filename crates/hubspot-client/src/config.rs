//! Client configuration.
//!
//! The server is configured entirely from the environment: `HUBSPOT_API_KEY`
//! holds the private-app access token, `HUBSPOT_BASE_URL` optionally points
//! the client at a different API host (useful for tests and mirrors).

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::error::{ClientError, ClientResult};

/// Default HubSpot API host.
pub const DEFAULT_BASE_URL: &str = "https://api.hubapi.com";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`crate::HubSpotClient`].
#[derive(Debug, Clone)]
pub struct HubSpotConfig {
    /// API host every request path is joined onto.
    pub base_url: Url,
    /// Private-app access token sent as a bearer credential.
    pub access_token: SecretString,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl HubSpotConfig {
    /// Create a configuration for the default API host.
    pub fn new(access_token: impl Into<String>) -> ClientResult<Self> {
        let base_url = Url::parse(DEFAULT_BASE_URL)
            .map_err(|e| ClientError::config_error(format!("invalid base url: {e}")))?;
        Ok(Self {
            base_url,
            access_token: SecretString::from(access_token.into()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Load configuration from the environment.
    ///
    /// `HUBSPOT_API_KEY` is required; `HUBSPOT_BASE_URL` overrides the API
    /// host when present.
    pub fn from_env() -> ClientResult<Self> {
        let token = std::env::var("HUBSPOT_API_KEY").map_err(|_| {
            ClientError::config_error("HUBSPOT_API_KEY environment variable is not set")
        })?;
        if token.trim().is_empty() {
            return Err(ClientError::config_error("HUBSPOT_API_KEY is empty"));
        }

        let mut config = Self::new(token)?;
        if let Ok(base_url) = std::env::var("HUBSPOT_BASE_URL") {
            config.base_url = Url::parse(&base_url).map_err(|e| {
                ClientError::config_error(format!("invalid HUBSPOT_BASE_URL '{base_url}': {e}"))
            })?;
        }
        Ok(config)
    }

    /// Override the API host.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HubSpotConfig::new("pat-na1-test").unwrap();
        assert_eq!(config.base_url.as_str(), "https://api.hubapi.com/");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_with_base_url() {
        let config = HubSpotConfig::new("pat-na1-test")
            .unwrap()
            .with_base_url(Url::parse("https://api.hubapi.example").unwrap());
        assert_eq!(config.base_url.host_str(), Some("api.hubapi.example"));
    }

    #[test]
    fn test_token_not_leaked_by_debug() {
        let config = HubSpotConfig::new("pat-na1-supersecret").unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("supersecret"));
    }
}
