//! Summarization request and response types.

use serde::{Deserialize, Serialize};

use crate::present::input::{LengthPercent, SubmittedUrl};

/// Body of `POST /api/summarize`.
///
/// `length_percent` is left out of the JSON entirely when the caller did not
/// choose a length, so the service applies its own default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummarizeRequest {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_percent: Option<LengthPercent>,
}

impl SummarizeRequest {
    #[must_use]
    pub fn new(url: &SubmittedUrl, length: Option<LengthPercent>) -> Self {
        Self {
            url: url.as_str().to_string(),
            length_percent: length,
        }
    }
}

/// Metadata extracted for a video. Any field but `video_id` may be missing
/// when extraction only partially succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub video_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub channel_name: Option<String>,
    #[serde(default)]
    pub duration_seconds: Option<u64>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

/// Diagnostics for one summary generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub chars_in: u64,
    pub chars_out: u64,
    pub total_tokens: u64,
    pub generation_seconds: f64,
}

/// A character-offset span into the summary text.
///
/// Producers guarantee `start <= end` and that spans in one sequence do not
/// overlap, but not that they arrive sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Highlight {
    pub start: usize,
    pub end: usize,
}

impl Highlight {
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Response of `POST /api/summarize`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizeResult {
    pub summary: String,
    pub transcript: String,
    #[serde(default)]
    pub metadata: Option<VideoMetadata>,
    #[serde(default)]
    pub stats: Option<SummaryStats>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    /// `true` when the summary was produced but the service could not
    /// persist it to history.
    #[serde(default)]
    pub storage_warning: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_result_defaults_optional_fields() {
        let result: SummarizeResult = serde_json::from_str(
            r#"{"summary":"S","transcript":"T","metadata":null,"stats":null}"#,
        )
        .expect("should parse");
        assert_eq!(result.summary, "S");
        assert_eq!(result.transcript, "T");
        assert!(result.metadata.is_none());
        assert!(result.stats.is_none());
        assert!(result.highlights.is_empty());
        assert!(!result.storage_warning);
    }

    #[test]
    fn summarize_result_parses_full_payload() {
        let result: SummarizeResult = serde_json::from_value(serde_json::json!({
            "summary": "First.\n\nSecond.",
            "transcript": "raw words",
            "metadata": {
                "video_id": "dQw4w9WgXcQ",
                "title": "Test Video Title",
                "channel_name": null,
                "duration_seconds": 754,
                "thumbnail_url": null
            },
            "stats": {
                "chars_in": 1200,
                "chars_out": 300,
                "total_tokens": 512,
                "generation_seconds": 1.25
            },
            "highlights": [{"start": 8, "end": 15}, {"start": 0, "end": 6}],
            "storage_warning": true
        }))
        .expect("should parse");

        let metadata = result.metadata.expect("metadata present");
        assert_eq!(metadata.duration_seconds, Some(754));
        assert!(metadata.channel_name.is_none());
        assert_eq!(result.stats.map(|s| s.total_tokens), Some(512));
        assert_eq!(result.highlights.len(), 2);
        assert_eq!(result.highlights[0], Highlight { start: 8, end: 15 });
        assert!(result.storage_warning);
    }

    #[test]
    fn metadata_requires_video_id() {
        let result = serde_json::from_str::<VideoMetadata>(r#"{"title":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn negative_duration_is_rejected() {
        let result = serde_json::from_str::<VideoMetadata>(
            r#"{"video_id":"abc","duration_seconds":-5}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn summarize_request_omits_absent_length() {
        let url = SubmittedUrl::new("https://youtu.be/x").expect("non-empty");
        let body = serde_json::to_value(SummarizeRequest::new(&url, None)).unwrap();
        assert_eq!(body, serde_json::json!({"url": "https://youtu.be/x"}));
    }

    #[test]
    fn summarize_request_forwards_length_percent() {
        let url = SubmittedUrl::new("https://youtu.be/x").expect("non-empty");
        let body =
            serde_json::to_value(SummarizeRequest::new(&url, Some(LengthPercent::new(30))))
                .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"url": "https://youtu.be/x", "length_percent": 30})
        );
    }

    #[test]
    fn highlight_len_saturates() {
        let inverted = Highlight { start: 9, end: 3 };
        assert_eq!(inverted.len(), 0);
        assert!(inverted.is_empty());
        assert_eq!(Highlight { start: 2, end: 7 }.len(), 5);
    }
}
