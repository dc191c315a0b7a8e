use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::present::input::SubmittedUrl;
use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::High, Severity::Medium, Severity::Low];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Severity::High),
            "medium" => Ok(Severity::Medium),
            "low" => Ok(Severity::Low),
            other => Err(CoreError::UnknownSeverity(other.to_string())),
        }
    }
}

/// Body of `POST /api/fallacies`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FallacyAnalysisRequest {
    pub url: String,
}

impl FallacyAnalysisRequest {
    #[must_use]
    pub fn new(url: &SubmittedUrl) -> Self {
        Self {
            url: url.as_str().to_string(),
        }
    }
}

/// A counter-example illustrating why a detected fallacy is flawed reasoning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearExample {
    pub scenario: String,
    pub why_wrong: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fallacy {
    /// Free-form locator into the transcript, e.g. `"03:15"`.
    #[serde(default)]
    pub timestamp: Option<String>,
    pub quote: String,
    pub fallacy_name: String,
    pub category: String,
    pub severity: Severity,
    pub explanation: String,
    pub clear_example: ClearExample,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallacySummary {
    pub total_fallacies: u32,
    pub high_severity: u32,
    pub medium_severity: u32,
    pub low_severity: u32,
    /// Distinct fallacy names, most relevant first.
    #[serde(default)]
    pub primary_tactics: Vec<String>,
}

impl FallacySummary {
    /// Sum of the per-severity counts. Widened so that hostile counts cannot
    /// overflow.
    #[must_use]
    pub fn severity_total(&self) -> u64 {
        u64::from(self.high_severity)
            + u64::from(self.medium_severity)
            + u64::from(self.low_severity)
    }

    /// Whether the per-severity counts add up to `total_fallacies`.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.severity_total() == u64::from(self.total_fallacies)
    }

    #[must_use]
    pub fn count_for(&self, severity: Severity) -> u32 {
        match severity {
            Severity::High => self.high_severity,
            Severity::Medium => self.medium_severity,
            Severity::Low => self.low_severity,
        }
    }
}

/// Response of `POST /api/fallacies`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallacyAnalysisResult {
    pub summary: FallacySummary,
    #[serde(default)]
    pub fallacies: Vec<Fallacy>,
}

impl FallacyAnalysisResult {
    /// Whether the summary agrees with itself and with the fallacy list.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.summary.is_consistent()
            && usize::try_from(self.summary.total_fallacies)
                .is_ok_and(|n| n == self.fallacies.len())
    }
}
