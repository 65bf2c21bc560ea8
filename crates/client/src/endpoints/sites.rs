//! Requests against the `sites` endpoint

use stackex_domain::Site;

use crate::backoff::BackoffPolicy;
use crate::client::Client;
use crate::errors::Result;
use crate::executor::Parameters;
use crate::response::Envelope;

impl Client {
    /// Fetch the sites in the network.
    ///
    /// The endpoint is network-wide: the `site` parameter is pinned to the
    /// empty string so the configured default is not injected.
    pub fn fetch_sites(
        &self,
        parameters: &Parameters,
        policy: BackoffPolicy,
    ) -> Result<Envelope<Site>> {
        let mut parameters = parameters.clone();
        parameters.insert("site".to_owned(), String::new());
        self.execute("sites", &parameters, policy)
    }

    /// Asynchronous variant of [`fetch_sites`](Self::fetch_sites).
    pub fn fetch_sites_async<F>(
        &self,
        parameters: &Parameters,
        policy: BackoffPolicy,
        callback: F,
    ) where
        F: FnOnce(Result<Envelope<Site>>) + Send + 'static,
    {
        let mut parameters = parameters.clone();
        parameters.insert("site".to_owned(), String::new());
        self.execute_async("sites", &parameters, policy, callback);
    }
}
