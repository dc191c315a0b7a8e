//! HTTP client for the video summarizer service.
//!
//! Every operation performs exactly one request and reports failure through
//! [`ApiError`], which always carries a structured
//! [`ytsum_core::ApiErrorInfo`] whether the service sent one or not.

pub mod client;
pub mod error;
pub mod normalize;

pub use client::SummarizerClient;
pub use error::{ApiError, ClientBuildError};
pub use normalize::{normalize_failure, Operation};
