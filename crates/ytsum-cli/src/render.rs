//! Plain-text rendering of client results for the terminal.
//!
//! Every function here is pure and returns the text to print, built on the
//! view models in `ytsum_core::present`.

use ytsum_client::ApiError;
use ytsum_core::present::fallacy_view::FallacyCard;
use ytsum_core::present::summary_view::STORAGE_WARNING_TEXT;
use ytsum_core::present::{
    segment_highlights, FallacyList, FallacySummaryPanel, HistoryRow, MetadataView, SummaryView,
};
use ytsum_core::{
    FallacyAnalysisResult, Highlight, HistoryItem, QaMessage, QaRole, SummarizeResult,
    VideoMetadata, VideoRecord,
};

const HIGHLIGHT_MARK: &str = "**";
const EMPTY_HISTORY: &str = "No saved videos yet.";
// Length of the "\n\n" separator `split_paragraphs` splits on.
const PARAGRAPH_BREAK_CHARS: usize = 2;

/// Wraps highlighted spans of `text` in `**` markers.
fn mark_highlights(text: &str, highlights: &[Highlight]) -> String {
    segment_highlights(text, highlights)
        .into_iter()
        .map(|segment| {
            if segment.highlighted {
                format!("{HIGHLIGHT_MARK}{}{HIGHLIGHT_MARK}", segment.text)
            } else {
                segment.text.to_string()
            }
        })
        .collect()
}

/// Char-offset spans that `segment_highlights` keeps after sorting and
/// dropping overlaps.
fn accepted_spans(text: &str, highlights: &[Highlight]) -> Vec<Highlight> {
    let mut spans = Vec::new();
    let mut offset = 0;
    for segment in segment_highlights(text, highlights) {
        let len = segment.text.chars().count();
        if segment.highlighted {
            spans.push(Highlight {
                start: offset,
                end: offset + len,
            });
        }
        offset += len;
    }
    spans
}

/// Marks each paragraph on its own, so a highlight crossing a paragraph
/// break is closed before the break and reopened after it.
///
/// `paragraphs` must be `split_paragraphs(summary)`.
fn marked_paragraphs(summary: &str, paragraphs: &[&str], highlights: &[Highlight]) -> Vec<String> {
    let spans = accepted_spans(summary, highlights);
    let mut start = 0;
    paragraphs
        .iter()
        .map(|paragraph| {
            let end = start + paragraph.chars().count();
            let local: Vec<Highlight> = spans
                .iter()
                .filter_map(|span| {
                    let from = span.start.max(start);
                    let to = span.end.min(end);
                    (from < to).then(|| Highlight {
                        start: from - start,
                        end: to - start,
                    })
                })
                .collect();
            start = end + PARAGRAPH_BREAK_CHARS;
            mark_highlights(paragraph, &local)
        })
        .collect()
}

fn metadata_lines(metadata: &MetadataView) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(title) = &metadata.title {
        lines.push(title.clone());
    }
    if let Some(channel) = &metadata.channel {
        lines.push(format!("Channel: {channel}"));
    }
    if let Some(duration) = &metadata.duration {
        lines.push(format!("Duration: {duration}"));
    }
    if let Some(thumbnail) = &metadata.thumbnail {
        lines.push(format!("Thumbnail: {} ({})", thumbnail.src, thumbnail.alt));
    }
    lines
}

fn summary_lines(
    summary: &str,
    highlights: &[Highlight],
    metadata: Option<&VideoMetadata>,
    storage_warning: bool,
) -> Vec<String> {
    let view = SummaryView::new(summary, metadata);

    let mut lines = view.metadata.as_ref().map(metadata_lines).unwrap_or_default();
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(view.heading.to_string());
    for (i, paragraph) in marked_paragraphs(summary, &view.paragraphs, highlights)
        .into_iter()
        .enumerate()
    {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(paragraph);
    }
    if storage_warning {
        lines.push(String::new());
        lines.push(format!("warning: {STORAGE_WARNING_TEXT}"));
    }
    lines
}

/// Metadata block, summary paragraphs with highlights, and the storage
/// warning when the service could not persist the result.
pub(crate) fn summary(result: &SummarizeResult) -> String {
    summary_lines(
        &result.summary,
        &result.highlights,
        result.metadata.as_ref(),
        result.storage_warning,
    )
    .join("\n")
}

fn card_lines(card: &FallacyCard<'_>) -> Vec<String> {
    let mut heading = format!("[{}] {} ({})", card.badge.label, card.name, card.category);
    if let Some(timestamp) = card.timestamp {
        heading.push_str(&format!(" at {timestamp}"));
    }
    vec![
        heading,
        format!("  \"{}\"", card.quote),
        format!("  {}", card.explanation),
        format!("  Example: {}", card.example_scenario),
        format!("  Why it's wrong: {}", card.example_why),
    ]
}

/// Summary panel followed by one card per fallacy, or the empty-state
/// message.
pub(crate) fn fallacies(result: &FallacyAnalysisResult) -> String {
    let mut lines = vec!["Fallacy analysis".to_string()];

    if let Some(panel) = FallacySummaryPanel::new(Some(&result.summary)) {
        lines.push(format!(
            "Total: {} (high {}, medium {}, low {})",
            panel.total, panel.high, panel.medium, panel.low
        ));
        if !panel.primary_tactics.is_empty() {
            lines.push(format!("Primary tactics: {}", panel.primary_tactics));
        }
        if !panel.consistent {
            lines.push("note: severity counts do not add up to the total".to_string());
        }
    }
    lines.push(String::new());

    match FallacyList::new(&result.fallacies) {
        FallacyList::Empty(message) => lines.push(message.to_string()),
        FallacyList::Cards(cards) => {
            for (i, card) in cards.iter().enumerate() {
                if i > 0 {
                    lines.push(String::new());
                }
                lines.extend(card_lines(card));
            }
        }
    }
    lines.join("\n")
}

fn history_row_lines(row: &HistoryRow<'_>) -> Vec<String> {
    let marker = if row.has_fallacy_analysis {
        "  [fallacies]"
    } else {
        ""
    };
    let mut lines = vec![format!(
        "{}  {}  {}{marker}",
        row.video_id, row.created_at, row.title
    )];
    if !row.excerpt.is_empty() {
        lines.push(format!("    {}", row.excerpt));
    }
    lines
}

/// One entry per stored video, in the order the service returned them.
pub(crate) fn history(items: &[HistoryItem]) -> String {
    if items.is_empty() {
        return EMPTY_HISTORY.to_string();
    }
    items
        .iter()
        .map(HistoryRow::from)
        .flat_map(|row| history_row_lines(&row))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Single history entry, used after a restore.
pub(crate) fn history_item(item: &HistoryItem) -> String {
    history_row_lines(&HistoryRow::from(item)).join("\n")
}

fn qa_lines(messages: &[QaMessage]) -> Vec<String> {
    messages
        .iter()
        .map(|message| match message.role {
            QaRole::User => format!("Q: {}", message.content),
            QaRole::Assistant => format!("A: {}", message.content),
        })
        .collect()
}

/// Full stored record: summary, fallacy analysis when present, and any
/// prior Q&A.
pub(crate) fn record(record: &VideoRecord) -> String {
    let item = record.to_history_item();
    let row = HistoryRow::from(&item);
    let mut lines = vec![
        row.title.to_string(),
        format!("Video: {}  Saved: {}", row.video_id, row.created_at),
        String::new(),
    ];
    lines.extend(summary_lines(
        &record.summary,
        &record.highlights,
        None,
        false,
    ));

    if let Some(analysis) = &record.fallacy_analysis {
        lines.push(String::new());
        lines.push(fallacies(analysis));
    }
    if !record.qa_history.is_empty() {
        lines.push(String::new());
        lines.push("Questions".to_string());
        lines.extend(qa_lines(&record.qa_history));
    }
    lines.join("\n")
}

/// Service or client failure: the message, then details when present.
pub(crate) fn api_error(error: &ApiError) -> String {
    match &error.info.details {
        Some(details) => format!("error: {}\n  {details}", error.message()),
        None => format!("error: {}", error.message()),
    }
}
