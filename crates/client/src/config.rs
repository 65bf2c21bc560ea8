//! Client configuration
//!
//! Key and token acquisition is external; the client only consumes a
//! ready-made pair. Configuration can be assembled directly, through the
//! builder, or from `STACKEX_*` environment variables.
//!
//! ## Environment Variables
//! - `STACKEX_KEY`: application key injected as the `key` parameter
//! - `STACKEX_ACCESS_TOKEN`: OAuth token injected as `access_token`
//! - `STACKEX_SITE`: default site parameter (falls back to `stackoverflow`)

use std::time::Duration;

/// Default API root for the hosted network.
pub const DEFAULT_BASE_URL: &str = "https://api.stackexchange.com/2.3";

const DEFAULT_SITE: &str = "stackoverflow";
const DEFAULT_USER_AGENT: &str = concat!("stackex/", env!("CARGO_PKG_VERSION"));
const DEFAULT_WORKER_THREADS: usize = 4;

/// Configuration for a [`Client`](crate::Client).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL the endpoint path is joined onto.
    pub base_url: String,
    /// Site injected into requests that do not name one.
    pub site: Option<String>,
    /// Application key injected as `key` when the caller supplies none.
    pub api_key: Option<String>,
    /// OAuth access token injected as `access_token` when the caller
    /// supplies none.
    pub access_token: Option<String>,
    /// Timeout applied to each transport call.
    pub timeout: Duration,
    /// User agent reported to the API.
    pub user_agent: String,
    /// Worker threads backing the asynchronous call variants.
    pub worker_threads: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            site: Some(DEFAULT_SITE.to_string()),
            api_key: None,
            access_token: None,
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            worker_threads: DEFAULT_WORKER_THREADS,
        }
    }
}

impl ClientConfig {
    /// Create a builder for fluent configuration.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Load configuration from the environment, falling back to defaults
    /// for anything unset. Reads a `.env` file when one is present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let mut config = Self::default();
        if let Ok(site) = std::env::var("STACKEX_SITE") {
            config.site = Some(site);
        }
        if let Ok(key) = std::env::var("STACKEX_KEY") {
            config.api_key = Some(key);
        }
        if let Ok(token) = std::env::var("STACKEX_ACCESS_TOKEN") {
            config.access_token = Some(token);
        }
        config
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self { config: ClientConfig::default() }
    }
}

impl ClientConfigBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn site(mut self, site: impl Into<String>) -> Self {
        self.config.site = Some(site.into());
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.config.access_token = Some(token.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Configure the dispatcher pool size (at least one worker).
    pub fn worker_threads(mut self, workers: usize) -> Self {
        self.config.worker_threads = workers.max(1);
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_the_hosted_network() {
        let config = ClientConfig::default();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.site.as_deref(), Some("stackoverflow"));
        assert_eq!(config.api_key, None);
        assert_eq!(config.access_token, None);
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = ClientConfig::builder()
            .base_url("http://localhost:8080")
            .site("serverfault")
            .api_key("k")
            .access_token("t")
            .worker_threads(0)
            .build();

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.site.as_deref(), Some("serverfault"));
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.access_token.as_deref(), Some("t"));
        assert_eq!(config.worker_threads, 1);
    }
}
