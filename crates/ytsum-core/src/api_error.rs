use serde::{Deserialize, Serialize};

/// Machine code used for every error the client synthesizes itself.
pub const INTERNAL_ERROR_CODE: &str = "internal_error";

/// Structured error payload returned by the service on failure.
///
/// The client also synthesizes one of these (with [`INTERNAL_ERROR_CODE`])
/// when a failure carries no parseable payload, so consumers only ever see
/// this one shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorInfo {
    /// Machine-readable code, e.g. `invalid_url` or `transcript_unavailable`.
    pub error: String,
    /// Human-readable message suitable for display.
    pub message: String,
    #[serde(default)]
    pub details: Option<String>,
}

impl ApiErrorInfo {
    /// Builds the synthetic `internal_error` payload with the given message.
    #[must_use]
    pub fn internal(message: &str) -> Self {
        Self {
            error: INTERNAL_ERROR_CODE.to_string(),
            message: message.to_string(),
            details: None,
        }
    }

    /// Returns `true` when this payload was synthesized on the client side
    /// or the service reported an unexpected internal failure.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        self.error == INTERNAL_ERROR_CODE
    }
}

impl std::fmt::Display for ApiErrorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
