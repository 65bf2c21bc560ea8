//! Client facade

use std::sync::Arc;

use stackex_domain::FromApiObject;

use crate::backoff::{BackoffPolicy, BackoffRegistry};
use crate::config::ClientConfig;
use crate::dispatch::Dispatcher;
use crate::errors::Result;
use crate::executor::{Parameters, RequestExecutor};
use crate::response::Envelope;
use crate::transport::{HttpTransport, Transport};

/// Client for the API.
///
/// Owns the configuration, the backoff registry shared by every call, and
/// the worker pool behind the asynchronous variants. Lives for the session;
/// envelopes and models it returns are owned by the caller, with no caching
/// across calls.
///
/// Per-endpoint convenience methods (`fetch_questions`, `fetch_answers`,
/// ...) are defined in [`endpoints`](crate::endpoints) and funnel through
/// [`Client::execute`].
pub struct Client {
    executor: RequestExecutor,
    dispatcher: Dispatcher,
}

impl Client {
    /// Create a client with the production HTTP transport.
    ///
    /// # Errors
    /// Returns [`Error::Config`](crate::Error::Config) if the HTTP client
    /// cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Create a client over a custom [`Transport`] implementation.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let dispatcher = Dispatcher::new(config.worker_threads);
        let executor = RequestExecutor::new(
            Arc::new(config),
            transport,
            Arc::new(BackoffRegistry::new()),
        );
        Self { executor, dispatcher }
    }

    /// Execute a read request synchronously.
    ///
    /// Injects the configured `site`, `key` and `access_token` parameters
    /// for keys the caller did not supply, honors `policy` against the
    /// shared backoff registry (a `Wait` call may block for the remaining
    /// window), and decodes the response into an envelope of `T`.
    ///
    /// # Errors
    /// See [`Error`](crate::Error) for the full taxonomy; no kind is retried
    /// automatically.
    pub fn execute<T: FromApiObject>(
        &self,
        path: &str,
        parameters: &Parameters,
        policy: BackoffPolicy,
    ) -> Result<Envelope<T>> {
        self.executor.execute(path, parameters, policy)
    }

    /// Execute a read request on a worker, invoking `callback` exactly once
    /// with either the decoded envelope or the classified error.
    ///
    /// Observable semantics match [`Client::execute`], including backoff
    /// registry interaction. Callbacks of independently issued calls
    /// complete in no particular order.
    pub fn execute_async<T, F>(
        &self,
        path: &str,
        parameters: &Parameters,
        policy: BackoffPolicy,
        callback: F,
    ) where
        T: FromApiObject + Send + 'static,
        F: FnOnce(Result<Envelope<T>>) + Send + 'static,
    {
        let executor = self.executor.clone();
        let path = path.to_owned();
        let parameters = parameters.clone();
        self.dispatcher.dispatch(Box::new(move || {
            callback(executor.execute(&path, &parameters, policy));
        }));
    }
}
