use crate::fallacy::Severity;
use crate::CoreError;

/// Display label plus the style key the renderer attaches to a fallacy card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityBadge {
    pub severity: Severity,
    pub label: &'static str,
    pub style_key: &'static str,
}

impl From<Severity> for SeverityBadge {
    fn from(severity: Severity) -> Self {
        let (label, style_key) = match severity {
            Severity::High => ("High", "fallacy-card--high"),
            Severity::Medium => ("Medium", "fallacy-card--medium"),
            Severity::Low => ("Low", "fallacy-card--low"),
        };
        Self {
            severity,
            label,
            style_key,
        }
    }
}

/// Classifies a raw severity string.
///
/// # Errors
///
/// Returns [`CoreError::UnknownSeverity`] for anything other than `high`,
/// `medium`, or `low`. Unknown values are never mapped to a default.
pub fn classify_severity(raw: &str) -> Result<SeverityBadge, CoreError> {
    raw.parse::<Severity>().map(SeverityBadge::from)
}
