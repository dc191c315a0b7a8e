//! User input gates: the URL field and the summary-length slider.

use serde::Serialize;

use crate::CoreError;

/// A URL that passed the input gate: trimmed and non-empty.
///
/// Client operations that take a URL accept only this type, so a blank URL
/// cannot reach the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubmittedUrl(String);

impl SubmittedUrl {
    /// Trims `raw` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyUrl`] when nothing is left after trimming.
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyUrl);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SubmittedUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// State of the URL text field.
#[derive(Debug, Clone, Default)]
pub struct UrlInput {
    value: String,
    loading: bool,
}

impl UrlInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Raw field contents, untrimmed.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn is_input_disabled(&self) -> bool {
        self.loading
    }

    /// Whether the submit control should be enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.value.trim().is_empty()
    }

    /// Emits the trimmed URL, or nothing when the field is blank or a
    /// request is already in flight.
    #[must_use]
    pub fn submit(&self) -> Option<SubmittedUrl> {
        if self.loading {
            return None;
        }
        SubmittedUrl::new(&self.value).ok()
    }
}

/// Requested summary length as a percentage of the transcript.
///
/// Always within `MIN..=MAX` and a multiple of `STEP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct LengthPercent(u8);

impl LengthPercent {
    pub const MIN: u8 = 10;
    pub const MAX: u8 = 50;
    pub const STEP: u8 = 5;
    pub const DEFAULT: LengthPercent = LengthPercent(25);

    /// Clamps `value` into range and snaps it to the nearest step.
    #[must_use]
    pub fn new(value: i64) -> Self {
        let clamped = value.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        let step = i64::from(Self::STEP);
        let snapped = (clamped + step / 2) / step * step;
        // Snapping rounds 48/49 up to 50 and never leaves the range.
        Self(u8::try_from(snapped).unwrap_or(Self::MAX))
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for LengthPercent {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for LengthPercent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// View model of the summary-length slider.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthSlider {
    value: LengthPercent,
    disabled: bool,
}

impl LengthSlider {
    #[must_use]
    pub fn new(value: LengthPercent, disabled: bool) -> Self {
        Self { value, disabled }
    }

    #[must_use]
    pub fn value(&self) -> LengthPercent {
        self.value
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Value label, e.g. `"25%"`.
    #[must_use]
    pub fn value_label(&self) -> String {
        self.value.to_string()
    }

    /// Caption shown next to the control, e.g. `"Summary length: 25%"`.
    #[must_use]
    pub fn caption(&self) -> String {
        format!("Summary length: {}", self.value)
    }

    /// Handles a change event from the control and returns the value to
    /// emit upward. The slider itself is not modified; the owner feeds the
    /// emitted value back in.
    #[must_use]
    pub fn on_input(&self, raw: &str) -> Option<LengthPercent> {
        raw.trim().parse::<i64>().ok().map(LengthPercent::new)
    }
}

#[cfg(test)]
#[path = "input_test.rs"]
mod tests;
