//! Requests against the `users` endpoints

use stackex_domain::User;

use crate::backoff::BackoffPolicy;
use crate::client::Client;
use crate::errors::Result;
use crate::executor::Parameters;
use crate::response::Envelope;

use super::joined_ids;

impl Client {
    /// Fetch a page of users on the configured site.
    pub fn fetch_users(
        &self,
        parameters: &Parameters,
        policy: BackoffPolicy,
    ) -> Result<Envelope<User>> {
        self.execute("users", parameters, policy)
    }

    /// Asynchronous variant of [`fetch_users`](Self::fetch_users).
    pub fn fetch_users_async<F>(
        &self,
        parameters: &Parameters,
        policy: BackoffPolicy,
        callback: F,
    ) where
        F: FnOnce(Result<Envelope<User>>) + Send + 'static,
    {
        self.execute_async("users", parameters, policy, callback);
    }

    /// Fetch the users with the given IDs.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRequest`](crate::Error::InvalidRequest) when
    /// `ids` is empty; no request is issued.
    pub fn fetch_users_by_ids(
        &self,
        ids: &[i64],
        parameters: &Parameters,
        policy: BackoffPolicy,
    ) -> Result<Envelope<User>> {
        let path = format!("users/{}", joined_ids(ids)?);
        self.execute(&path, parameters, policy)
    }

    /// Asynchronous variant of
    /// [`fetch_users_by_ids`](Self::fetch_users_by_ids). An empty `ids` list
    /// surfaces through the callback without dispatching.
    pub fn fetch_users_by_ids_async<F>(
        &self,
        ids: &[i64],
        parameters: &Parameters,
        policy: BackoffPolicy,
        callback: F,
    ) where
        F: FnOnce(Result<Envelope<User>>) + Send + 'static,
    {
        match joined_ids(ids) {
            Ok(joined) => {
                self.execute_async(&format!("users/{joined}"), parameters, policy, callback);
            }
            Err(err) => callback(Err(err)),
        }
    }

    /// Fetch a single user by ID.
    pub fn fetch_user(
        &self,
        id: i64,
        parameters: &Parameters,
        policy: BackoffPolicy,
    ) -> Result<Envelope<User>> {
        self.fetch_users_by_ids(&[id], parameters, policy)
    }

    /// Asynchronous variant of [`fetch_user`](Self::fetch_user).
    pub fn fetch_user_async<F>(
        &self,
        id: i64,
        parameters: &Parameters,
        policy: BackoffPolicy,
        callback: F,
    ) where
        F: FnOnce(Result<Envelope<User>>) + Send + 'static,
    {
        self.fetch_users_by_ids_async(&[id], parameters, policy, callback);
    }
}
