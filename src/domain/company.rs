//! Singleton page content: home, about and contact.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::types::nullable;

/// Logo tile used by the home page brand, customer and platform strips.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LogoItem {
    #[serde(deserialize_with = "nullable")]
    pub image_url: String,
    #[serde(deserialize_with = "nullable")]
    pub link: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Recommendation {
    #[serde(deserialize_with = "nullable")]
    pub image_url: String,
    #[serde(deserialize_with = "nullable")]
    pub link: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub message: String,
    #[serde(deserialize_with = "nullable")]
    pub rating: u8,
}

impl Recommendation {
    /// Rating clamped to the five-star scale.
    pub fn stars(&self) -> u8 {
        self.rating.min(5)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct HomeContent {
    #[serde(deserialize_with = "nullable")]
    pub welcome_message: String,
    #[serde(deserialize_with = "nullable")]
    pub short_paragraph: String,
    #[serde(deserialize_with = "nullable")]
    pub our_brands: Vec<LogoItem>,
    #[serde(deserialize_with = "nullable")]
    pub our_customers: Vec<LogoItem>,
    #[serde(deserialize_with = "nullable")]
    pub our_platforms: Vec<LogoItem>,
    #[serde(deserialize_with = "nullable")]
    pub recommendations: Vec<Recommendation>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ManagementMember {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub designation: String,
    #[serde(deserialize_with = "nullable")]
    pub profile_image: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Milestone {
    #[serde(deserialize_with = "nullable")]
    pub year: i32,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub image: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutUs {
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub company_name: String,
    #[serde(deserialize_with = "nullable")]
    pub company_description: String,
    #[serde(deserialize_with = "nullable")]
    pub owner_name: String,
    #[serde(deserialize_with = "nullable")]
    pub owner_title: String,
    #[serde(deserialize_with = "nullable")]
    pub owner_description: String,
    #[serde(deserialize_with = "nullable")]
    pub owner_image_url: String,
    /// JSON array of [`ManagementMember`] stored as a string.
    #[serde(deserialize_with = "nullable")]
    pub management_team_json: String,
    /// JSON array of [`Milestone`] stored as a string.
    #[serde(deserialize_with = "nullable")]
    pub milestones_json: String,
}

/// Decodes a JSON array embedded in a string field; blank or malformed input
/// yields an empty list.
fn decode_embedded<T: DeserializeOwned>(field: &str, raw: &str) -> Vec<T> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    serde_json::from_str(raw).unwrap_or_else(|err| {
        log::warn!("Ignoring malformed {field}: {err}");
        Vec::new()
    })
}

impl AboutUs {
    pub fn management_team(&self) -> Vec<ManagementMember> {
        decode_embedded("managementTeamJson", &self.management_team_json)
    }

    pub fn milestones(&self) -> Vec<Milestone> {
        decode_embedded("milestonesJson", &self.milestones_json)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    #[serde(deserialize_with = "nullable")]
    pub phone: String,
    #[serde(deserialize_with = "nullable")]
    pub address: String,
    #[serde(deserialize_with = "nullable")]
    pub facebook_url: String,
    #[serde(deserialize_with = "nullable")]
    pub twitter_url: String,
    #[serde(deserialize_with = "nullable")]
    pub instagram_url: String,
    #[serde(deserialize_with = "nullable")]
    pub linkedin_url: String,
}
