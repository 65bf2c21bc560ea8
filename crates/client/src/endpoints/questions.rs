//! Requests against the `questions` endpoints

use stackex_domain::{Answer, Question};

use crate::backoff::BackoffPolicy;
use crate::client::Client;
use crate::errors::Result;
use crate::executor::Parameters;
use crate::response::Envelope;

use super::joined_ids;

impl Client {
    /// Fetch a page of questions on the configured site.
    pub fn fetch_questions(
        &self,
        parameters: &Parameters,
        policy: BackoffPolicy,
    ) -> Result<Envelope<Question>> {
        self.execute("questions", parameters, policy)
    }

    /// Asynchronous variant of [`fetch_questions`](Self::fetch_questions).
    pub fn fetch_questions_async<F>(
        &self,
        parameters: &Parameters,
        policy: BackoffPolicy,
        callback: F,
    ) where
        F: FnOnce(Result<Envelope<Question>>) + Send + 'static,
    {
        self.execute_async("questions", parameters, policy, callback);
    }

    /// Fetch the questions with the given IDs.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRequest`](crate::Error::InvalidRequest) when
    /// `ids` is empty; no request is issued.
    pub fn fetch_questions_by_ids(
        &self,
        ids: &[i64],
        parameters: &Parameters,
        policy: BackoffPolicy,
    ) -> Result<Envelope<Question>> {
        let path = format!("questions/{}", joined_ids(ids)?);
        self.execute(&path, parameters, policy)
    }

    /// Asynchronous variant of
    /// [`fetch_questions_by_ids`](Self::fetch_questions_by_ids). An empty
    /// `ids` list surfaces through the callback without dispatching.
    pub fn fetch_questions_by_ids_async<F>(
        &self,
        ids: &[i64],
        parameters: &Parameters,
        policy: BackoffPolicy,
        callback: F,
    ) where
        F: FnOnce(Result<Envelope<Question>>) + Send + 'static,
    {
        match joined_ids(ids) {
            Ok(joined) => {
                self.execute_async(&format!("questions/{joined}"), parameters, policy, callback);
            }
            Err(err) => callback(Err(err)),
        }
    }

    /// Fetch a single question by ID.
    pub fn fetch_question(
        &self,
        id: i64,
        parameters: &Parameters,
        policy: BackoffPolicy,
    ) -> Result<Envelope<Question>> {
        self.fetch_questions_by_ids(&[id], parameters, policy)
    }

    /// Asynchronous variant of [`fetch_question`](Self::fetch_question).
    pub fn fetch_question_async<F>(
        &self,
        id: i64,
        parameters: &Parameters,
        policy: BackoffPolicy,
        callback: F,
    ) where
        F: FnOnce(Result<Envelope<Question>>) + Send + 'static,
    {
        self.fetch_questions_by_ids_async(&[id], parameters, policy, callback);
    }

    /// Fetch the answers on a question.
    pub fn fetch_question_answers(
        &self,
        id: i64,
        parameters: &Parameters,
        policy: BackoffPolicy,
    ) -> Result<Envelope<Answer>> {
        let path = format!("questions/{id}/answers");
        self.execute(&path, parameters, policy)
    }

    /// Asynchronous variant of
    /// [`fetch_question_answers`](Self::fetch_question_answers).
    pub fn fetch_question_answers_async<F>(
        &self,
        id: i64,
        parameters: &Parameters,
        policy: BackoffPolicy,
        callback: F,
    ) where
        F: FnOnce(Result<Envelope<Answer>>) + Send + 'static,
    {
        self.execute_async(&format!("questions/{id}/answers"), parameters, policy, callback);
    }
}
