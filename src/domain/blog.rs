use serde::{Deserialize, Serialize};

use crate::domain::types::nullable;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Blog {
    #[serde(deserialize_with = "nullable")]
    pub blog_id: u64,
    #[serde(deserialize_with = "nullable")]
    pub topic: String,
    #[serde(deserialize_with = "nullable")]
    pub date: String,
    #[serde(deserialize_with = "nullable")]
    pub division: String,
    #[serde(deserialize_with = "nullable")]
    pub image_url: String,
    #[serde(deserialize_with = "nullable")]
    pub short_description: String,
    /// Plain-text body; blank lines separate paragraphs.
    #[serde(deserialize_with = "nullable")]
    pub paragraph: String,
    #[serde(deserialize_with = "nullable")]
    pub slug: String,
    #[serde(deserialize_with = "nullable")]
    pub view_count: u64,
    #[serde(deserialize_with = "nullable")]
    pub created_at: String,
}

impl Blog {
    /// Up to `limit` posts from `recent` in the same division, excluding `self`.
    pub fn related<'a>(&self, recent: &'a [Blog], limit: usize) -> Vec<&'a Blog> {
        recent
            .iter()
            .filter(|b| b.blog_id != self.blog_id && b.division == self.division)
            .take(limit)
            .collect()
    }
}
