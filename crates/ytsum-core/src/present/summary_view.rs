use crate::present::duration::format_duration;
use crate::present::paragraphs::split_paragraphs;
use crate::video::{SummarizeResult, VideoMetadata};

pub const SUMMARY_HEADING: &str = "Summary";
pub const THUMBNAIL_ALT_FALLBACK: &str = "Video thumbnail";
pub const STORAGE_WARNING_TEXT: &str =
    "The summary was generated but could not be saved to history.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub src: String,
    pub alt: String,
}

/// Display-ready metadata block. Each field is `None` when the service did
/// not extract it, and the renderer omits the matching element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataView {
    pub title: Option<String>,
    pub channel: Option<String>,
    pub duration: Option<String>,
    pub thumbnail: Option<Thumbnail>,
}

impl From<&VideoMetadata> for MetadataView {
    fn from(metadata: &VideoMetadata) -> Self {
        let thumbnail = metadata.thumbnail_url.as_ref().map(|src| Thumbnail {
            src: src.clone(),
            alt: metadata
                .title
                .clone()
                .unwrap_or_else(|| THUMBNAIL_ALT_FALLBACK.to_string()),
        });

        Self {
            title: metadata.title.clone(),
            channel: metadata.channel_name.clone(),
            duration: metadata.duration_seconds.map(format_duration),
            thumbnail,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView<'a> {
    pub heading: &'static str,
    pub paragraphs: Vec<&'a str>,
    /// `None` hides the whole metadata section.
    pub metadata: Option<MetadataView>,
    pub storage_warning: Option<&'static str>,
}

impl<'a> SummaryView<'a> {
    #[must_use]
    pub fn new(summary: &'a str, metadata: Option<&VideoMetadata>) -> Self {
        Self {
            heading: SUMMARY_HEADING,
            paragraphs: split_paragraphs(summary),
            metadata: metadata.map(MetadataView::from),
            storage_warning: None,
        }
    }

    #[must_use]
    pub fn from_result(result: &'a SummarizeResult) -> Self {
        let mut view = Self::new(&result.summary, result.metadata.as_ref());
        if result.storage_warning {
            view.storage_warning = Some(STORAGE_WARNING_TEXT);
        }
        view
    }
}
