use crate::fallacy::{Fallacy, FallacySummary, Severity};
use crate::present::severity::SeverityBadge;

pub const NO_FALLACIES_MESSAGE: &str = "No fallacies found in this video.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallacyCard<'a> {
    pub timestamp: Option<&'a str>,
    pub quote: &'a str,
    pub name: &'a str,
    pub category: &'a str,
    pub badge: SeverityBadge,
    pub explanation: &'a str,
    pub example_scenario: &'a str,
    pub example_why: &'a str,
}

impl<'a> From<&'a Fallacy> for FallacyCard<'a> {
    fn from(fallacy: &'a Fallacy) -> Self {
        Self {
            timestamp: fallacy.timestamp.as_deref(),
            quote: &fallacy.quote,
            name: &fallacy.fallacy_name,
            category: &fallacy.category,
            badge: SeverityBadge::from(fallacy.severity),
            explanation: &fallacy.explanation,
            example_scenario: &fallacy.clear_example.scenario,
            example_why: &fallacy.clear_example.why_wrong,
        }
    }
}

/// Either the list of cards or the empty-state message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallacyList<'a> {
    Cards(Vec<FallacyCard<'a>>),
    Empty(&'static str),
}

impl<'a> FallacyList<'a> {
    #[must_use]
    pub fn new(fallacies: &'a [Fallacy]) -> Self {
        if fallacies.is_empty() {
            FallacyList::Empty(NO_FALLACIES_MESSAGE)
        } else {
            FallacyList::Cards(fallacies.iter().map(FallacyCard::from).collect())
        }
    }
}

/// Aggregate counts shown above the fallacy cards.
///
/// Renders whatever the service sent, including counts whose sum disagrees
/// with the total; `consistent` lets the renderer flag that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallacySummaryPanel {
    pub total: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
    pub primary_tactics: String,
    pub consistent: bool,
}

impl FallacySummaryPanel {
    /// Returns `None` when there is no summary, which hides the panel.
    #[must_use]
    pub fn new(summary: Option<&FallacySummary>) -> Option<Self> {
        summary.map(|s| Self {
            total: s.total_fallacies,
            high: s.count_for(Severity::High),
            medium: s.count_for(Severity::Medium),
            low: s.count_for(Severity::Low),
            primary_tactics: s.primary_tactics.join(", "),
            consistent: s.is_consistent(),
        })
    }
}
