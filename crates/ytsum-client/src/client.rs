//! HTTP client for the summarizer service REST API.
//!
//! Wraps `reqwest` with one method per service capability. Each method
//! issues a single request, with no retries or caching, and maps every
//! failure through [`crate::normalize`] into an [`ApiError`].

use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use ytsum_core::config::DEFAULT_HISTORY_LIMIT;
use ytsum_core::{
    AskRequest, AskResponse, ClientConfig, FallacyAnalysisRequest, FallacyAnalysisResult,
    HistoryItem, HistoryResponse, LengthPercent, SubmittedUrl, SummarizeRequest, SummarizeResult,
    VideoRecord,
};

use crate::error::{ApiError, ClientBuildError};
use crate::normalize::{decode_failure, normalize_failure, Operation};

/// Client for the summarizer service.
///
/// Holds only the connection pool and the base address, both fixed at
/// construction. Cloning is cheap and clones are fully independent callers.
#[derive(Debug, Clone)]
pub struct SummarizerClient {
    client: Client,
    base_url: Url,
}

impl SummarizerClient {
    /// Creates a client from resolved process configuration.
    ///
    /// # Errors
    ///
    /// See [`SummarizerClient::with_base_url`].
    pub fn new(config: &ClientConfig) -> Result<Self, ClientBuildError> {
        Self::with_base_url(&config.api_base_url, &config.user_agent)
    }

    /// Creates a client pointed at `base_url` (also used to target a mock
    /// server in tests).
    ///
    /// No request timeout is configured; an exchange lasts as long as the
    /// transport allows.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientBuildError::InvalidBaseUrl`] if
    /// `base_url` is not an absolute http(s) URL.
    pub fn with_base_url(base_url: &str, user_agent: &str) -> Result<Self, ClientBuildError> {
        let client = Client::builder().user_agent(user_agent).build()?;

        // Normalise to exactly one trailing slash so endpoint paths are
        // appended below any path prefix instead of replacing it.
        let normalised = format!("{}/", base_url.trim().trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| ClientBuildError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(ClientBuildError::InvalidBaseUrl {
                base_url: base_url.to_string(),
                reason: "expected an absolute http(s) URL".to_string(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Requests a summary of the video at `url`.
    ///
    /// `length` is forwarded as `length_percent` and left out of the body
    /// when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with the service's payload on a failing status,
    /// or a synthetic `internal_error` on transport or decode failure.
    pub async fn summarize(
        &self,
        url: &SubmittedUrl,
        length: Option<LengthPercent>,
    ) -> Result<SummarizeResult, ApiError> {
        let body = SummarizeRequest::new(url, length);
        let request = self
            .client
            .post(self.endpoint(&["api", "summarize"]))
            .json(&body);
        Self::send_json(Operation::Summarize, request).await
    }

    /// Requests a rhetorical-fallacy analysis of the video at `url`.
    ///
    /// A summary whose severity counts disagree with its total is returned
    /// as-is and logged.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failure; see [`SummarizerClient::summarize`].
    pub async fn analyze_fallacies(
        &self,
        url: &SubmittedUrl,
    ) -> Result<FallacyAnalysisResult, ApiError> {
        let request = self
            .client
            .post(self.endpoint(&["api", "fallacies"]))
            .json(&FallacyAnalysisRequest::new(url));
        let result: FallacyAnalysisResult =
            Self::send_json(Operation::AnalyzeFallacies, request).await?;

        if !result.is_consistent() {
            tracing::warn!(
                total = result.summary.total_fallacies,
                severity_total = result.summary.severity_total(),
                listed = result.fallacies.len(),
                "fallacy summary counts are inconsistent"
            );
        }
        Ok(result)
    }

    /// Lists stored analyses, newest first as ordered by the service.
    ///
    /// `limit` defaults to 50 and is always sent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`]; the fallback message is `"Failed to load history."`.
    pub async fn fetch_history(&self, limit: Option<u32>) -> Result<Vec<HistoryItem>, ApiError> {
        let limit = limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
        let mut url = self.endpoint(&["api", "history"]);
        url.query_pairs_mut().append_pair("limit", &limit.to_string());

        let response: HistoryResponse =
            Self::send_json(Operation::FetchHistory, self.client.get(url)).await?;
        Ok(response.items)
    }

    /// Fetches the full stored record for `video_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`]; the fallback message is
    /// `"Failed to load video record."`.
    pub async fn fetch_history_item(&self, video_id: &str) -> Result<VideoRecord, ApiError> {
        let url = self.endpoint(&["api", "history", video_id]);
        Self::send_json(Operation::FetchHistoryItem, self.client.get(url)).await
    }

    /// Deletes the stored record for `video_id`.
    ///
    /// The service answers `204 No Content` on success; any body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`]; the fallback message is `"Failed to delete video."`.
    pub async fn delete_history_item(&self, video_id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["api", "history", video_id]);
        Self::send(Operation::DeleteHistoryItem, self.client.delete(url), |status| {
            status.is_success() || status == StatusCode::NO_CONTENT
        })
        .await?;
        Ok(())
    }

    /// Restores a previously deleted record and returns its list projection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`]; the fallback message is `"Failed to restore video."`.
    pub async fn restore_history_item(&self, video_id: &str) -> Result<HistoryItem, ApiError> {
        let url = self.endpoint(&["api", "history", video_id, "restore"]);
        Self::send_json(Operation::RestoreHistoryItem, self.client.post(url)).await
    }

    /// Asks a follow-up question about a transcript and returns the answer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any failure; see [`SummarizerClient::summarize`].
    pub async fn ask_question(&self, request: &AskRequest) -> Result<String, ApiError> {
        let request = self
            .client
            .post(self.endpoint(&["api", "ask"]))
            .json(request);
        let response: AskResponse = Self::send_json(Operation::AskQuestion, request).await?;
        Ok(response.answer)
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Infallible: the constructor rejects cannot-be-a-base URLs.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Sends `request` and returns the response if `is_success` accepts its
    /// status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] built by [`normalize_failure`] when the transport
    /// fails or the status is rejected.
    async fn send<F>(
        operation: Operation,
        request: RequestBuilder,
        is_success: F,
    ) -> Result<Response, ApiError>
    where
        F: Fn(StatusCode) -> bool,
    {
        tracing::debug!(%operation, "sending request");

        let response = match request.send().await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(%operation, %error, "request failed before a response arrived");
                return Err(ApiError::new(
                    operation,
                    None,
                    normalize_failure(operation, None),
                ));
            }
        };

        let status = response.status();
        if is_success(status) {
            tracing::debug!(%operation, status = status.as_u16(), "request succeeded");
            return Ok(response);
        }

        let body = response.bytes().await.ok();
        let info = normalize_failure(operation, body.as_deref());
        tracing::debug!(
            %operation,
            status = status.as_u16(),
            code = %info.error,
            "service returned an error"
        );
        Err(ApiError::new(operation, Some(status.as_u16()), info))
    }

    /// Sends `request` expecting a 2xx status and decodes the JSON body.
    ///
    /// # Errors
    ///
    /// As [`SummarizerClient::send`], plus a synthetic `internal_error` when
    /// the body cannot be read or does not decode into `T`.
    async fn send_json<T>(operation: Operation, request: RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = Self::send(operation, request, |status| status.is_success()).await?;
        let status = response.status().as_u16();

        let body = response.bytes().await.map_err(|error| {
            tracing::warn!(%operation, %error, "failed to read response body");
            ApiError::new(operation, Some(status), normalize_failure(operation, None))
        })?;

        serde_json::from_slice(&body).map_err(|error| {
            tracing::warn!(%operation, %error, "response body did not match the expected shape");
            ApiError::new(operation, Some(status), decode_failure(operation, &error))
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
