//! Client error taxonomy
//!
//! Field-level decode anomalies are not errors: hydration absorbs them
//! silently (see `stackex-domain`). Everything here is surfaced to the
//! caller unchanged, and nothing is retried automatically.

use std::time::Duration;

use thiserror::Error;

/// Errors surfaced by client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The response body was not a parseable JSON object; fatal for the call.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The server reported an error payload in place of `items`.
    #[error("API error {id} ({name}): {message}")]
    Api { id: i64, name: String, message: String },

    /// The endpoint's throttle window has not elapsed. Raised only under
    /// [`BackoffPolicy::Fail`](crate::BackoffPolicy::Fail), before any
    /// transport call.
    #[error("endpoint is in backoff for another {remaining:?}")]
    InBackoff { remaining: Duration },

    /// Passthrough failure from the HTTP transport.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Caller misuse detected before any transport call.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Client construction or configuration failure.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;
