//! Shared domain model, configuration, and presentation transforms for the
//! video summarizer client.
//!
//! The model types mirror the JSON shapes exchanged with the analysis
//! service. The [`present`] module holds pure functions that turn those
//! values into display-ready data for whatever front end renders them.

pub mod api_error;
pub mod client_config;
pub mod config;
pub mod error;
pub mod fallacy;
pub mod history;
pub mod present;
pub mod qa;
pub mod video;

pub use api_error::ApiErrorInfo;
pub use client_config::ClientConfig;
pub use config::{load_client_config, load_client_config_from_env};
pub use error::{ConfigError, CoreError};
pub use fallacy::{
    ClearExample, Fallacy, FallacyAnalysisRequest, FallacyAnalysisResult, FallacySummary,
    Severity,
};
pub use history::{HistoryItem, HistoryResponse, VideoRecord};
pub use present::input::{LengthPercent, SubmittedUrl};
pub use qa::{AskRequest, AskResponse, QaConversation, QaMessage, QaRole};
pub use video::{Highlight, SummarizeRequest, SummarizeResult, SummaryStats, VideoMetadata};
