//! History records persisted by the service.

use serde::{Deserialize, Serialize};

use crate::fallacy::FallacyAnalysisResult;
use crate::qa::QaMessage;
use crate::video::Highlight;

/// Lightweight projection of a stored analysis for list views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub video_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub summary: String,
    #[serde(default)]
    pub has_fallacy_analysis: bool,
    /// ISO-8601 timestamp exactly as sent by the service.
    pub created_at: String,
}

/// Envelope of `GET /api/history`.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryResponse {
    pub items: Vec<HistoryItem>,
}

/// Full stored record returned by `GET /api/history/{video_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: i64,
    pub video_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub summary: String,
    pub transcript: String,
    #[serde(default)]
    pub fallacy_analysis: Option<FallacyAnalysisResult>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub qa_history: Vec<QaMessage>,
    pub created_at: String,
}

impl VideoRecord {
    /// Projects the record down to the list-view shape.
    #[must_use]
    pub fn to_history_item(&self) -> HistoryItem {
        HistoryItem {
            video_id: self.video_id.clone(),
            title: self.title.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
            summary: self.summary.clone(),
            has_fallacy_analysis: self.fallacy_analysis.is_some(),
            created_at: self.created_at.clone(),
        }
    }
}
