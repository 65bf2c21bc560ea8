//! User models
//!
//! The API attaches a shallow user object to posts (`owner`, `last_editor`)
//! and returns the full shape from the `users` endpoints. [`User`] embeds
//! [`ShallowUser`] by composition, mirroring how variants embed
//! [`Post`](crate::models::Post).

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::hydration::{Fields, FromApiObject, JsonObject};

/// The account class the API reports for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Unregistered,
    Registered,
    Moderator,
    TeamAdmin,
    DoesNotExist,
}

impl UserType {
    pub(crate) fn from_api(value: &str) -> Option<Self> {
        match value {
            "unregistered" => Some(Self::Unregistered),
            "registered" => Some(Self::Registered),
            "moderator" => Some(Self::Moderator),
            "team_admin" => Some(Self::TeamAdmin),
            "does_not_exist" => Some(Self::DoesNotExist),
            _ => None,
        }
    }
}

/// Badge tallies attached to user objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BadgeCounts {
    pub bronze: Option<i64>,
    pub silver: Option<i64>,
    pub gold: Option<i64>,
}

impl FromApiObject for BadgeCounts {
    fn from_object(obj: &JsonObject) -> Self {
        let fields = Fields::new(obj);
        Self {
            bronze: fields.int("bronze"),
            silver: fields.int("silver"),
            gold: fields.int("gold"),
        }
    }
}

/// The abbreviated user shape embedded in other entities.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShallowUser {
    pub accept_rate: Option<i64>,
    pub badge_counts: Option<BadgeCounts>,
    pub display_name: Option<String>,
    pub link: Option<String>,
    pub profile_image: Option<String>,
    pub reputation: Option<i64>,
    pub user_id: Option<i64>,
    pub user_type: Option<UserType>,
}

impl FromApiObject for ShallowUser {
    fn from_object(obj: &JsonObject) -> Self {
        let fields = Fields::new(obj);
        Self {
            accept_rate: fields.int("accept_rate"),
            badge_counts: fields.model("badge_counts"),
            display_name: fields.string("display_name"),
            link: fields.string("link"),
            profile_image: fields.string("profile_image"),
            reputation: fields.int("reputation"),
            user_id: fields.int("user_id"),
            user_type: fields.string("user_type").as_deref().and_then(UserType::from_api),
        }
    }
}

/// The full user shape returned by the `users` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct User {
    /// Shallow fields, hydrated before any full-profile field.
    pub shallow: ShallowUser,
    pub about_me: Option<String>,
    pub age: Option<i64>,
    pub creation_date: Option<DateTime<Utc>>,
    pub down_vote_count: Option<i64>,
    pub is_employee: Option<bool>,
    pub last_access_date: Option<DateTime<Utc>>,
    pub last_modified_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub up_vote_count: Option<i64>,
    pub view_count: Option<i64>,
    pub website_url: Option<String>,
}

impl FromApiObject for User {
    fn from_object(obj: &JsonObject) -> Self {
        let shallow = ShallowUser::from_object(obj);
        let fields = Fields::new(obj);
        Self {
            shallow,
            about_me: fields.string("about_me"),
            age: fields.int("age"),
            creation_date: fields.timestamp("creation_date"),
            down_vote_count: fields.int("down_vote_count"),
            is_employee: fields.boolean("is_employee"),
            last_access_date: fields.timestamp("last_access_date"),
            last_modified_date: fields.timestamp("last_modified_date"),
            location: fields.string("location"),
            up_vote_count: fields.int("up_vote_count"),
            view_count: fields.int("view_count"),
            website_url: fields.string("website_url"),
        }
    }
}
