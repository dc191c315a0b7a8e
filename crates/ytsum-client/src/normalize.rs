//! Collapses every failure mode into one [`ApiErrorInfo`].
//!
//! A failing response whose body is a well-formed error payload is passed
//! through verbatim. A missing or malformed body, or a request that never
//! got a response, becomes a synthetic `internal_error` carrying the
//! operation's own fallback message.

use ytsum_core::ApiErrorInfo;

const GENERIC_FALLBACK: &str = "An unexpected error occurred. Please try again.";

/// One client operation. Used to pick the fallback message and to label
/// log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Summarize,
    AnalyzeFallacies,
    FetchHistory,
    FetchHistoryItem,
    DeleteHistoryItem,
    RestoreHistoryItem,
    AskQuestion,
}

impl Operation {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Operation::Summarize => "summarize",
            Operation::AnalyzeFallacies => "analyze_fallacies",
            Operation::FetchHistory => "fetch_history",
            Operation::FetchHistoryItem => "fetch_history_item",
            Operation::DeleteHistoryItem => "delete_history_item",
            Operation::RestoreHistoryItem => "restore_history_item",
            Operation::AskQuestion => "ask_question",
        }
    }

    /// Message used when the failure carries no structured payload.
    #[must_use]
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::Summarize | Operation::AnalyzeFallacies => GENERIC_FALLBACK,
            Operation::FetchHistory => "Failed to load history.",
            Operation::FetchHistoryItem => "Failed to load video record.",
            Operation::DeleteHistoryItem => "Failed to delete video.",
            Operation::RestoreHistoryItem => "Failed to restore video.",
            Operation::AskQuestion => "Failed to get an answer. Please try again.",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Builds the error payload for a failed exchange.
///
/// `body` is the raw body of a failing response, or `None` when the
/// transport itself failed. Never fails.
#[must_use]
pub fn normalize_failure(operation: Operation, body: Option<&[u8]>) -> ApiErrorInfo {
    body.and_then(|bytes| serde_json::from_slice::<ApiErrorInfo>(bytes).ok())
        .unwrap_or_else(|| ApiErrorInfo::internal(operation.fallback_message()))
}

/// Builds the error payload for a success response whose body did not
/// match the expected shape.
#[must_use]
pub fn decode_failure(operation: Operation, error: &serde_json::Error) -> ApiErrorInfo {
    ApiErrorInfo {
        details: Some(format!("unexpected response shape: {error}")),
        ..ApiErrorInfo::internal(operation.fallback_message())
    }
}
