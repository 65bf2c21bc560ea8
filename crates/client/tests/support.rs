//! Shared helpers for client integration tests

use std::sync::Arc;

use stackex_client::{Client, ClientConfig};
use wiremock::MockServer;

/// Build a client pointed at a mock server, with no key or token configured.
pub fn client_for(server: &MockServer) -> Arc<Client> {
    let config = ClientConfig::builder()
        .base_url(server.uri())
        .site("stackoverflow")
        .worker_threads(2)
        .build();
    Arc::new(Client::new(config).expect("client should build"))
}

/// Run a blocking closure off the async test runtime.
pub async fn blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.expect("blocking task should not panic")
}
