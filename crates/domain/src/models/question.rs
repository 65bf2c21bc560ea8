//! Question model and its nested value objects

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::hydration::{Fields, FromApiObject, JsonObject};
use crate::models::post::Post;
use crate::models::site::Site;
use crate::models::user::ShallowUser;

/// Details about a question closure.
///
/// `original_questions` holds full [`Question`] values by ownership; the API
/// never nests a question inside its own closure details, so the structure is
/// acyclic by construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClosedDetails {
    pub by_users: Option<Vec<ShallowUser>>,
    pub description: Option<String>,
    pub on_hold: Option<bool>,
    pub original_questions: Option<Vec<Question>>,
    pub reason: Option<String>,
}

impl FromApiObject for ClosedDetails {
    fn from_object(obj: &JsonObject) -> Self {
        let fields = Fields::new(obj);
        Self {
            by_users: fields.models("by_users"),
            description: fields.string("description"),
            on_hold: fields.boolean("on_hold"),
            original_questions: fields.models("original_questions"),
            reason: fields.string("reason"),
        }
    }
}

/// A moderator notice attached to a question.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Notice {
    pub body: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
    pub owner_user_id: Option<i64>,
}

impl FromApiObject for Notice {
    fn from_object(obj: &JsonObject) -> Self {
        let fields = Fields::new(obj);
        Self {
            body: fields.string("body"),
            creation_date: fields.timestamp("creation_date"),
            owner_user_id: fields.int("owner_user_id"),
        }
    }
}

/// Migration provenance for questions moved between sites.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MigrationInfo {
    pub on_date: Option<DateTime<Utc>>,
    pub other_site: Option<Site>,
    pub question_id: Option<i64>,
}

impl FromApiObject for MigrationInfo {
    fn from_object(obj: &JsonObject) -> Self {
        let fields = Fields::new(obj);
        Self {
            on_date: fields.timestamp("on_date"),
            other_site: fields.model("other_site"),
            question_id: fields.int("question_id"),
        }
    }
}

/// A question, layered on the shared [`Post`] base.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Question {
    /// Shared post-level fields, hydrated before any question-specific field.
    pub post: Post,
    pub accepted_answer_id: Option<i64>,
    pub answer_count: Option<i64>,
    pub bounty_amount: Option<i64>,
    pub bounty_closes_date: Option<DateTime<Utc>>,
    pub can_close: Option<bool>,
    pub can_flag: Option<bool>,
    pub close_vote_count: Option<i64>,
    pub closed_date: Option<DateTime<Utc>>,
    pub closed_details: Option<ClosedDetails>,
    pub closed_reason: Option<String>,
    pub community_owned_date: Option<DateTime<Utc>>,
    pub delete_vote_count: Option<i64>,
    pub favorite_count: Option<i64>,
    pub favorited: Option<bool>,
    pub is_answered: Option<bool>,
    pub locked_date: Option<DateTime<Utc>>,
    pub migrated_from: Option<MigrationInfo>,
    pub migrated_to: Option<MigrationInfo>,
    pub notice: Option<Notice>,
    pub protected_date: Option<DateTime<Utc>>,
    pub question_id: Option<i64>,
    pub reopen_vote_count: Option<i64>,
    pub tags: Option<Vec<String>>,
    pub view_count: Option<i64>,
}

impl FromApiObject for Question {
    fn from_object(obj: &JsonObject) -> Self {
        // Base first: question-specific fields layer on a fully hydrated Post.
        let post = Post::from_object(obj);
        let fields = Fields::new(obj);
        Self {
            post,
            accepted_answer_id: fields.int("accepted_answer_id"),
            answer_count: fields.int("answer_count"),
            bounty_amount: fields.int("bounty_amount"),
            bounty_closes_date: fields.timestamp("bounty_closes_date"),
            can_close: fields.boolean("can_close"),
            can_flag: fields.boolean("can_flag"),
            close_vote_count: fields.int("close_vote_count"),
            closed_date: fields.timestamp("closed_date"),
            closed_details: fields.model("closed_details"),
            closed_reason: fields.string("closed_reason"),
            community_owned_date: fields.timestamp("community_owned_date"),
            delete_vote_count: fields.int("delete_vote_count"),
            favorite_count: fields.int("favorite_count"),
            favorited: fields.boolean("favorited"),
            is_answered: fields.boolean("is_answered"),
            locked_date: fields.timestamp("locked_date"),
            migrated_from: fields.model("migrated_from"),
            migrated_to: fields.model("migrated_to"),
            notice: fields.model("notice"),
            protected_date: fields.timestamp("protected_date"),
            question_id: fields.int("question_id"),
            reopen_vote_count: fields.int("reopen_vote_count"),
            tags: fields.strings("tags"),
            view_count: fields.int("view_count"),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    #[test]
    fn base_fields_never_diverge_by_variant() {
        let value = json!({
            "post_id": 9,
            "post_type": "question",
            "title": "How do I exit vim?",
            "score": 5000,
            "creation_date": 1_000_000_000,
            "owner": { "display_name": "jclark", "user_id": 57 },
            "question_id": 9,
            "is_answered": true,
        });
        let obj = value.as_object().unwrap();

        let question = Question::from_object(obj);
        let post = Post::from_object(obj);

        assert_eq!(question.post, post);
        assert_eq!(question.question_id, Some(9));
        assert_eq!(question.is_answered, Some(true));
    }

    #[test]
    fn minimal_question_leaves_everything_else_unset() {
        let value = json!({ "question_id": 1, "creation_date": 1_000_000_000 });
        let question = Question::from_object(value.as_object().unwrap());

        assert_eq!(question.question_id, Some(1));
        assert_eq!(
            question.post.creation_date,
            Utc.timestamp_opt(1_000_000_000, 0).single()
        );
        assert_eq!(question.accepted_answer_id, None);
        assert_eq!(question.answer_count, None);
        assert_eq!(question.closed_details, None);
        assert_eq!(question.notice, None);
        assert_eq!(question.tags, None);
        assert_eq!(question.post.title, None);
        assert_eq!(question.post.owner, None);
    }

    #[test]
    fn closed_details_nest_original_questions() {
        let value = json!({
            "question_id": 77,
            "closed_date": 1_400_000_000,
            "closed_reason": "duplicate",
            "closed_details": {
                "description": "This question has been asked before",
                "on_hold": false,
                "reason": "duplicate",
                "by_users": [{ "display_name": "mod", "user_id": 1 }],
                "original_questions": [
                    { "question_id": 12, "title": "The original" },
                ],
            },
        });
        let question = Question::from_object(value.as_object().unwrap());

        let details = question.closed_details.unwrap();
        assert_eq!(details.reason.as_deref(), Some("duplicate"));
        assert_eq!(details.on_hold, Some(false));
        assert_eq!(details.by_users.as_ref().map(Vec::len), Some(1));

        let originals = details.original_questions.unwrap();
        assert_eq!(originals.len(), 1);
        assert_eq!(originals[0].question_id, Some(12));
        assert_eq!(originals[0].post.title.as_deref(), Some("The original"));
    }

    #[test]
    fn migration_info_carries_other_site() {
        let value = json!({
            "question_id": 5,
            "migrated_from": {
                "on_date": 1_300_000_000,
                "question_id": 4,
                "other_site": { "api_site_parameter": "superuser", "name": "Super User" },
            },
        });
        let question = Question::from_object(value.as_object().unwrap());

        let migration = question.migrated_from.unwrap();
        assert_eq!(migration.question_id, Some(4));
        assert_eq!(
            migration.other_site.unwrap().api_site_parameter.as_deref(),
            Some("superuser")
        );
    }

    #[test]
    fn ill_typed_nested_object_stays_unset() {
        let value = json!({
            "question_id": 3,
            "closed_details": "gone",
            "notice": 12,
        });
        let question = Question::from_object(value.as_object().unwrap());

        assert_eq!(question.question_id, Some(3));
        assert_eq!(question.closed_details, None);
        assert_eq!(question.notice, None);
    }
}
