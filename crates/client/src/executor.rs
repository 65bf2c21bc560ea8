//! Single-request orchestration
//!
//! Turns `(endpoint path, parameters, throttle policy)` into a decoded
//! envelope or a classified error, performing at most one transport round
//! trip per call.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

use reqwest::Url;
use serde_json::Value;
use stackex_domain::FromApiObject;
use tracing::{debug, info, warn};

use crate::backoff::{self, BackoffPolicy, BackoffRegistry};
use crate::config::ClientConfig;
use crate::errors::{Error, Result};
use crate::response::{self, Envelope};
use crate::transport::Transport;

/// Request parameters; the last write for a key wins, and iteration order is
/// deterministic.
pub type Parameters = BTreeMap<String, String>;

/// Executes one API call: default injection, throttle policy, transport,
/// error classification, hydration, and backoff registration.
///
/// Cheap to clone; clones share the transport and the backoff registry, so a
/// deadline registered on one path is respected by every other.
#[derive(Clone)]
pub(crate) struct RequestExecutor {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
    registry: Arc<BackoffRegistry>,
}

impl RequestExecutor {
    pub(crate) fn new(
        config: Arc<ClientConfig>,
        transport: Arc<dyn Transport>,
        registry: Arc<BackoffRegistry>,
    ) -> Self {
        Self { config, transport, registry }
    }

    /// Perform at most one transport round trip for `path`.
    pub(crate) fn execute<T: FromApiObject>(
        &self,
        path: &str,
        parameters: &Parameters,
        policy: BackoffPolicy,
    ) -> Result<Envelope<T>> {
        let parameters = self.with_defaults(parameters);
        let signature = backoff::signature(path);

        let remaining = self.registry.check(&signature);
        if !remaining.is_zero() {
            match policy {
                BackoffPolicy::Wait => {
                    info!(signature = %signature, ?remaining, "waiting out backoff window");
                    thread::sleep(remaining);
                }
                BackoffPolicy::Fail => return Err(Error::InBackoff { remaining }),
                BackoffPolicy::Ignore => {
                    debug!(signature = %signature, ?remaining, "ignoring active backoff window");
                }
            }
        }

        let url = self.build_url(path, &parameters)?;
        debug!(%url, "executing API request");
        let body = self.transport.get(url)?;

        let value: Value = serde_json::from_str(&body)
            .map_err(|err| Error::MalformedResponse(err.to_string()))?;
        let Some(object) = value.as_object() else {
            return Err(Error::MalformedResponse("response body is not a JSON object".into()));
        };

        if let Some(error) = response::classify_error(object) {
            return Err(error);
        }

        let envelope = response::decode_envelope(object);
        if let Some(seconds) = envelope.backoff {
            warn!(signature = %signature, seconds, "server requested backoff");
            self.registry.register(&signature, seconds);
        }

        debug!(
            items = envelope.items.len(),
            has_more = envelope.has_more,
            quota_remaining = ?envelope.quota_remaining,
            "decoded response envelope"
        );
        Ok(envelope)
    }

    /// Inject configured defaults for keys the caller did not supply;
    /// caller-supplied values always win.
    fn with_defaults(&self, parameters: &Parameters) -> Parameters {
        let mut merged = parameters.clone();
        if let Some(site) = &self.config.site {
            merged.entry("site".to_owned()).or_insert_with(|| site.clone());
        }
        if let Some(key) = &self.config.api_key {
            merged.entry("key".to_owned()).or_insert_with(|| key.clone());
        }
        if let Some(token) = &self.config.access_token {
            merged.entry("access_token".to_owned()).or_insert_with(|| token.clone());
        }
        merged
    }

    fn build_url(&self, path: &str, parameters: &Parameters) -> Result<Url> {
        let joined = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);
        let mut url = Url::parse(&joined)
            .map_err(|err| Error::Config(format!("invalid request URL {joined}: {err}")))?;
        if !parameters.is_empty() {
            url.query_pairs_mut().extend_pairs(parameters.iter());
        }
        Ok(url)
    }
}
