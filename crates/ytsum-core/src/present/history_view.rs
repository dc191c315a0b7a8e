use chrono::{DateTime, NaiveDateTime, Utc};

use crate::history::HistoryItem;
use crate::present::paragraphs::split_paragraphs;

pub const UNTITLED_VIDEO: &str = "Untitled video";
const EXCERPT_CHARS: usize = 160;

/// Formats a service timestamp as `YYYY-MM-DD HH:MM` (UTC).
///
/// Accepts RFC 3339 and offset-less ISO-8601; anything else is returned
/// unchanged so the user still sees something.
#[must_use]
pub fn format_created_at(raw: &str) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc).format(DISPLAY).to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format(DISPLAY).to_string();
    }
    raw.to_string()
}

/// First paragraph of a summary, cut to a fixed number of characters.
fn excerpt(summary: &str) -> String {
    let first = split_paragraphs(summary)
        .into_iter()
        .find(|p| !p.trim().is_empty())
        .unwrap_or("")
        .trim();

    if first.chars().count() <= EXCERPT_CHARS {
        return first.to_string();
    }
    let cut: String = first.chars().take(EXCERPT_CHARS).collect();
    format!("{}…", cut.trim_end())
}

/// One row of the history list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow<'a> {
    pub video_id: &'a str,
    pub title: &'a str,
    pub thumbnail_url: Option<&'a str>,
    pub excerpt: String,
    pub has_fallacy_analysis: bool,
    pub created_at: String,
}

impl<'a> From<&'a HistoryItem> for HistoryRow<'a> {
    fn from(item: &'a HistoryItem) -> Self {
        Self {
            video_id: &item.video_id,
            title: item.title.as_deref().unwrap_or(UNTITLED_VIDEO),
            thumbnail_url: item.thumbnail_url.as_deref(),
            excerpt: excerpt(&item.summary),
            has_fallacy_analysis: item.has_fallacy_analysis,
            created_at: format_created_at(&item.created_at),
        }
    }
}
