//! Network site models

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::hydration::{Fields, FromApiObject, JsonObject};

/// Lifecycle state of a site in the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteState {
    Normal,
    ClosedBeta,
    OpenBeta,
    LinkedMeta,
}

impl SiteState {
    pub(crate) fn from_api(value: &str) -> Option<Self> {
        match value {
            "normal" => Some(Self::Normal),
            "closed_beta" => Some(Self::ClosedBeta),
            "open_beta" => Some(Self::OpenBeta),
            "linked_meta" => Some(Self::LinkedMeta),
            _ => None,
        }
    }
}

/// A related site reference (meta site, chat, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RelatedSite {
    pub api_site_parameter: Option<String>,
    pub name: Option<String>,
    pub relation: Option<String>,
    pub site_url: Option<String>,
}

impl FromApiObject for RelatedSite {
    fn from_object(obj: &JsonObject) -> Self {
        let fields = Fields::new(obj);
        Self {
            api_site_parameter: fields.string("api_site_parameter"),
            name: fields.string("name"),
            relation: fields.string("relation"),
            site_url: fields.string("site_url"),
        }
    }
}

/// A site in the network, as returned by the `sites` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Site {
    pub aliases: Option<Vec<String>>,
    pub api_site_parameter: Option<String>,
    pub audience: Option<String>,
    pub closed_beta_date: Option<DateTime<Utc>>,
    pub favicon_url: Option<String>,
    pub high_resolution_icon_url: Option<String>,
    pub icon_url: Option<String>,
    pub launch_date: Option<DateTime<Utc>>,
    pub logo_url: Option<String>,
    pub name: Option<String>,
    pub open_beta_date: Option<DateTime<Utc>>,
    pub related_sites: Option<Vec<RelatedSite>>,
    pub site_state: Option<SiteState>,
    pub site_type: Option<String>,
    pub site_url: Option<String>,
    pub twitter_account: Option<String>,
}

impl FromApiObject for Site {
    fn from_object(obj: &JsonObject) -> Self {
        let fields = Fields::new(obj);
        Self {
            aliases: fields.strings("aliases"),
            api_site_parameter: fields.string("api_site_parameter"),
            audience: fields.string("audience"),
            closed_beta_date: fields.timestamp("closed_beta_date"),
            favicon_url: fields.string("favicon_url"),
            high_resolution_icon_url: fields.string("high_resolution_icon_url"),
            icon_url: fields.string("icon_url"),
            launch_date: fields.timestamp("launch_date"),
            logo_url: fields.string("logo_url"),
            name: fields.string("name"),
            open_beta_date: fields.timestamp("open_beta_date"),
            related_sites: fields.models("related_sites"),
            site_state: fields.string("site_state").as_deref().and_then(SiteState::from_api),
            site_type: fields.string("site_type"),
            site_url: fields.string("site_url"),
            twitter_account: fields.string("twitter_account"),
        }
    }
}
