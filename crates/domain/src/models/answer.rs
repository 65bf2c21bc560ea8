//! Answer model

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::hydration::{Fields, FromApiObject, JsonObject};
use crate::models::post::Post;

/// An answer, layered on the shared [`Post`] base.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Answer {
    /// Shared post-level fields, hydrated before any answer-specific field.
    pub post: Post,
    pub answer_id: Option<i64>,
    pub awarded_bounty_amount: Option<i64>,
    pub community_owned_date: Option<DateTime<Utc>>,
    pub is_accepted: Option<bool>,
    pub locked_date: Option<DateTime<Utc>>,
    pub question_id: Option<i64>,
}

impl FromApiObject for Answer {
    fn from_object(obj: &JsonObject) -> Self {
        // Base first: answer-specific fields layer on a fully hydrated Post.
        let post = Post::from_object(obj);
        let fields = Fields::new(obj);
        Self {
            post,
            answer_id: fields.int("answer_id"),
            awarded_bounty_amount: fields.int("awarded_bounty_amount"),
            community_owned_date: fields.timestamp("community_owned_date"),
            is_accepted: fields.boolean("is_accepted"),
            locked_date: fields.timestamp("locked_date"),
            question_id: fields.int("question_id"),
        }
    }
}
