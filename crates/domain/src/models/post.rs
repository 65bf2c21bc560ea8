//! Shared base fields for content items

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::hydration::{Fields, FromApiObject, JsonObject};
use crate::models::user::ShallowUser;

/// Discriminates the concrete content kinds sharing the [`Post`] base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    Question,
    Answer,
}

impl PostType {
    /// Parse the API's `post_type` discriminator; unknown values stay unset.
    pub(crate) fn from_api(value: &str) -> Option<Self> {
        match value {
            "question" => Some(Self::Question),
            "answer" => Some(Self::Answer),
            _ => None,
        }
    }
}

/// Fields common to questions and answers.
///
/// Variants embed a `Post` and hydrate it before their own fields, so
/// base-level accessors are always populated by the time variant-specific
/// post-processing runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Post {
    pub body: Option<String>,
    pub body_markdown: Option<String>,
    pub comment_count: Option<i64>,
    pub creation_date: Option<DateTime<Utc>>,
    pub down_vote_count: Option<i64>,
    pub downvoted: Option<bool>,
    pub last_activity_date: Option<DateTime<Utc>>,
    pub last_edit_date: Option<DateTime<Utc>>,
    pub last_editor: Option<ShallowUser>,
    pub link: Option<String>,
    pub owner: Option<ShallowUser>,
    pub post_id: Option<i64>,
    pub post_type: Option<PostType>,
    pub score: Option<i64>,
    pub share_link: Option<String>,
    pub title: Option<String>,
    pub up_vote_count: Option<i64>,
    pub upvoted: Option<bool>,
}

impl FromApiObject for Post {
    fn from_object(obj: &JsonObject) -> Self {
        let fields = Fields::new(obj);
        Self {
            body: fields.string("body"),
            body_markdown: fields.string("body_markdown"),
            comment_count: fields.int("comment_count"),
            creation_date: fields.timestamp("creation_date"),
            down_vote_count: fields.int("down_vote_count"),
            downvoted: fields.boolean("downvoted"),
            last_activity_date: fields.timestamp("last_activity_date"),
            last_edit_date: fields.timestamp("last_edit_date"),
            last_editor: fields.model("last_editor"),
            link: fields.string("link"),
            owner: fields.model("owner"),
            post_id: fields.int("post_id"),
            post_type: fields.string("post_type").as_deref().and_then(PostType::from_api),
            score: fields.int("score"),
            share_link: fields.string("share_link"),
            title: fields.string("title"),
            up_vote_count: fields.int("up_vote_count"),
            upvoted: fields.boolean("upvoted"),
        }
    }
}
