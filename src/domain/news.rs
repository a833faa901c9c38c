use serde::{Deserialize, Serialize};

use crate::domain::types::nullable;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct NewsItem {
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub image_url: String,
    pub thumbnail_url: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    pub content: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub category: String,
    pub author: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub view_count: u64,
    #[serde(deserialize_with = "nullable")]
    pub is_featured: bool,
    #[serde(deserialize_with = "nullable")]
    pub created_at: String,
    #[serde(deserialize_with = "nullable")]
    pub updated_at: String,
}
