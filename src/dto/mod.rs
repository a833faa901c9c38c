//! View models that bridge services with templates.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

pub mod catalog;
pub mod detail;
pub mod main;

/// Resolves backend image paths against the media base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaUrls {
    base: String,
}

impl MediaUrls {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URLs pass through, relative paths are joined onto the base
    /// and an empty path stays empty.
    pub fn resolve(&self, path: &str) -> String {
        let path = path.trim();
        if path.is_empty() {
            return String::new();
        }
        if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
        {
            return path.to_string();
        }
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }
}

/// HTML that is safe to emit unescaped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SafeHtml(String);

impl SafeHtml {
    /// Strips scripts, handlers and unknown tags from backend markup.
    pub fn clean(markup: &str) -> Self {
        Self(ammonia::clean(markup.trim()))
    }

    /// Escapes plain text, turning blank-line separated blocks into
    /// paragraphs and single newlines into line breaks.
    pub fn from_text(text: &str) -> Self {
        let text = text.replace("\r\n", "\n");
        let html = text
            .split("\n\n")
            .map(str::trim)
            .filter(|block| !block.is_empty())
            .map(|block| {
                let lines: Vec<String> = block.lines().map(ammonia::clean_text).collect();
                format!("<p>{}</p>", lines.join("<br>"))
            })
            .collect::<Vec<_>>()
            .join("\n");
        Self(html)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Formats a backend timestamp as `October 18, 2026`. Values that are not
/// RFC 3339, ISO date-time or ISO date strings are returned unchanged.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match parsed {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
