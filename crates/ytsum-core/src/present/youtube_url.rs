//! Advisory recognition of `YouTube` video URLs.
//!
//! The service is the authority on which URLs it accepts; the front end
//! uses this to warn early about obviously unsupported input.

use std::sync::LazyLock;

use regex::Regex;

use crate::CoreError;

static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/(?:watch\?.*v=|shorts/)|youtu\.be/)([a-zA-Z0-9_-]{11})")
        .expect("valid video id regex")
});

const SUPPORTED_FORMATS: &str =
    "Supported formats: youtube.com/watch?v=..., youtu.be/..., youtube.com/shorts/...";

/// Extracts the 11-character video id from a `YouTube` URL.
///
/// Recognizes `youtube.com/watch?v=`, `m.youtube.com/watch?v=`, `youtu.be/`
/// and `youtube.com/shorts/` forms.
///
/// # Errors
///
/// Returns [`CoreError::EmptyUrl`] for blank input and
/// [`CoreError::InvalidVideoUrl`] for playlist-only or unrecognized URLs.
pub fn extract_video_id(url: &str) -> Result<String, CoreError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(CoreError::EmptyUrl);
    }

    if is_playlist_only(url) {
        return Err(CoreError::InvalidVideoUrl {
            url: url.to_string(),
            reason: "playlist URLs are not supported; provide a single video URL".to_string(),
        });
    }

    VIDEO_ID_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| CoreError::InvalidVideoUrl {
            url: url.to_string(),
            reason: SUPPORTED_FORMATS.to_string(),
        })
}

/// A playlist page, or a URL carrying `list=` without a `v=` video.
fn is_playlist_only(url: &str) -> bool {
    let without_fragment = url.split('#').next().unwrap_or(url);
    let (before_query, query) = without_fragment
        .split_once('?')
        .unwrap_or((without_fragment, ""));

    let after_scheme = before_query
        .split_once("://")
        .map_or(before_query, |(_, rest)| rest);
    let path = after_scheme.find('/').map_or("", |i| &after_scheme[i..]);
    if path == "/playlist" {
        return true;
    }

    let keys: Vec<&str> = query
        .split('&')
        .filter_map(|pair| pair.split('=').next())
        .collect();
    keys.contains(&"list") && !keys.contains(&"v")
}
