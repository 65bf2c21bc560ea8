//! Requests against the `answers` endpoints

use stackex_domain::Answer;

use crate::backoff::BackoffPolicy;
use crate::client::Client;
use crate::errors::Result;
use crate::executor::Parameters;
use crate::response::Envelope;

use super::joined_ids;

impl Client {
    /// Fetch a page of answers on the configured site.
    pub fn fetch_answers(
        &self,
        parameters: &Parameters,
        policy: BackoffPolicy,
    ) -> Result<Envelope<Answer>> {
        self.execute("answers", parameters, policy)
    }

    /// Asynchronous variant of [`fetch_answers`](Self::fetch_answers).
    pub fn fetch_answers_async<F>(
        &self,
        parameters: &Parameters,
        policy: BackoffPolicy,
        callback: F,
    ) where
        F: FnOnce(Result<Envelope<Answer>>) + Send + 'static,
    {
        self.execute_async("answers", parameters, policy, callback);
    }

    /// Fetch the answers with the given IDs.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRequest`](crate::Error::InvalidRequest) when
    /// `ids` is empty; no request is issued.
    pub fn fetch_answers_by_ids(
        &self,
        ids: &[i64],
        parameters: &Parameters,
        policy: BackoffPolicy,
    ) -> Result<Envelope<Answer>> {
        let path = format!("answers/{}", joined_ids(ids)?);
        self.execute(&path, parameters, policy)
    }

    /// Asynchronous variant of
    /// [`fetch_answers_by_ids`](Self::fetch_answers_by_ids). An empty `ids`
    /// list surfaces through the callback without dispatching.
    pub fn fetch_answers_by_ids_async<F>(
        &self,
        ids: &[i64],
        parameters: &Parameters,
        policy: BackoffPolicy,
        callback: F,
    ) where
        F: FnOnce(Result<Envelope<Answer>>) + Send + 'static,
    {
        match joined_ids(ids) {
            Ok(joined) => {
                self.execute_async(&format!("answers/{joined}"), parameters, policy, callback);
            }
            Err(err) => callback(Err(err)),
        }
    }

    /// Fetch a single answer by ID.
    pub fn fetch_answer(
        &self,
        id: i64,
        parameters: &Parameters,
        policy: BackoffPolicy,
    ) -> Result<Envelope<Answer>> {
        self.fetch_answers_by_ids(&[id], parameters, policy)
    }

    /// Asynchronous variant of [`fetch_answer`](Self::fetch_answer).
    pub fn fetch_answer_async<F>(
        &self,
        id: i64,
        parameters: &Parameters,
        policy: BackoffPolicy,
        callback: F,
    ) where
        F: FnOnce(Result<Envelope<Answer>>) + Send + 'static,
    {
        self.fetch_answers_by_ids_async(&[id], parameters, policy, callback);
    }
}
