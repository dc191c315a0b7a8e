use thiserror::Error;
use ytsum_core::ApiErrorInfo;

use crate::normalize::Operation;

/// Failure of a single client operation.
///
/// Structured service errors and client-synthesized ones share this type;
/// they differ only in the contents of [`ApiError::info`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} failed: {info}")]
pub struct ApiError {
    pub operation: Operation,
    /// HTTP status of the failing response; `None` when no response arrived.
    pub status: Option<u16>,
    pub info: ApiErrorInfo,
}

impl ApiError {
    #[must_use]
    pub fn new(operation: Operation, status: Option<u16>, info: ApiErrorInfo) -> Self {
        Self {
            operation,
            status,
            info,
        }
    }

    /// Machine-readable error code, e.g. `transcript_unavailable`.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.info.error
    }

    /// Human-readable message suitable for display.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.info.message
    }
}

/// Errors building a [`crate::SummarizerClient`].
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// The underlying `reqwest::Client` could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
