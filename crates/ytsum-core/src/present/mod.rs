//! Pure transforms from domain values to display-ready values.
//!
//! Nothing in here performs I/O or keeps state between calls; the front end
//! owns all view state and feeds it through these functions.

pub mod duration;
pub mod fallacy_view;
pub mod highlights;
pub mod history_view;
pub mod input;
pub mod paragraphs;
pub mod severity;
pub mod summary_view;
pub mod youtube_url;

pub use duration::format_duration;
pub use fallacy_view::{FallacyCard, FallacyList, FallacySummaryPanel};
pub use highlights::{segment_highlights, HighlightSegment};
pub use history_view::{format_created_at, HistoryRow};
pub use input::{LengthPercent, LengthSlider, SubmittedUrl, UrlInput};
pub use paragraphs::split_paragraphs;
pub use severity::{classify_severity, SeverityBadge};
pub use summary_view::{MetadataView, SummaryView};
pub use youtube_url::extract_video_id;
