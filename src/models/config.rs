//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    /// Glob of the Tera templates, e.g. `templates/**/*`.
    pub templates_dir: String,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    /// Root of the content backend; `/api/public/` is appended.
    pub api_base_url: String,
    /// Prefix for backend-relative image paths. Defaults to `api_base_url`.
    #[serde(default)]
    pub media_base_url: Option<String>,
    /// Public origin of this site, used for share links.
    pub site_url: String,
    #[serde(default = "default_site_name")]
    pub site_name: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_assets_dir() -> String {
    "./assets".to_string()
}

fn default_site_name() -> String {
    "Metro".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_page_size() -> usize {
    12
}

impl ServerConfig {
    pub fn media_base(&self) -> &str {
        self.media_base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(&self.api_base_url)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
