//! HTTP transport seam

use reqwest::Url;
use tracing::debug;

use crate::config::ClientConfig;
use crate::errors::{Error, Result};

/// Blocking GET transport behind the request executor.
///
/// The API encodes failures in the response body, so implementations return
/// the body text regardless of HTTP status and surface only genuine network
/// failures as errors.
pub trait Transport: Send + Sync {
    fn get(&self, url: Url) -> Result<String>;
}

/// Production transport over a blocking reqwest client.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Build the transport from client configuration.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|err| Error::Config(format!("failed to build HTTP client: {err}")))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: Url) -> Result<String> {
        debug!(%url, "sending GET request");
        let response = self.client.get(url).send()?;

        let status = response.status();
        let body = response.text()?;
        debug!(%status, bytes = body.len(), "received response");
        Ok(body)
    }
}
