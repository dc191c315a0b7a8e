use super::*;

fn filled(value: &str) -> UrlInput {
    let mut input = UrlInput::new();
    input.set_value(value);
    input
}

// ---------------------------------------------------------------------------
// URL gate
// ---------------------------------------------------------------------------

#[test]
fn submit_emits_trimmed_url() {
    let input = filled("  https://youtu.be/abc123def45  ");
    let emitted = input.submit().expect("should emit");
    assert_eq!(emitted.as_str(), "https://youtu.be/abc123def45");
}

#[test]
fn field_keeps_raw_value() {
    let input = filled("  https://youtu.be/abc123def45  ");
    assert_eq!(input.value(), "  https://youtu.be/abc123def45  ");
}

#[test]
fn empty_input_emits_nothing() {
    assert!(filled("").submit().is_none());
}

#[test]
fn whitespace_only_input_emits_nothing() {
    assert!(filled("   ").submit().is_none());
    assert!(filled("\t\n ").submit().is_none());
}

#[test]
fn loading_disables_input_and_submit() {
    let mut input = filled("https://youtu.be/abc123def45");
    input.set_loading(true);
    assert!(input.is_input_disabled());
    assert!(!input.can_submit());
    assert!(input.submit().is_none());
}

#[test]
fn empty_input_disables_submit() {
    assert!(!UrlInput::new().can_submit());
}

#[test]
fn text_and_not_loading_enables_submit() {
    let input = filled("https://youtu.be/abc123def45");
    assert!(input.can_submit());
    assert!(!input.is_input_disabled());
}

#[test]
fn submitted_url_rejects_blank() {
    assert!(matches!(SubmittedUrl::new("  "), Err(CoreError::EmptyUrl)));
}

// ---------------------------------------------------------------------------
// Length slider
// ---------------------------------------------------------------------------

#[test]
fn slider_labels_default_value() {
    let slider = LengthSlider::default();
    assert_eq!(slider.value().get(), 25);
    assert_eq!(slider.value_label(), "25%");
}

#[test]
fn slider_labels_at_bounds() {
    assert_eq!(LengthSlider::new(LengthPercent::new(10), false).value_label(), "10%");
    assert_eq!(LengthSlider::new(LengthPercent::new(50), false).value_label(), "50%");
}

#[test]
fn slider_caption_contains_value() {
    let caption = LengthSlider::new(LengthPercent::new(30), false).caption();
    assert!(caption.contains("Summary length:"));
    assert!(caption.contains("30%"));
}

#[test]
fn on_input_emits_new_value_without_mutating() {
    let slider = LengthSlider::new(LengthPercent::new(25), false);
    assert_eq!(slider.on_input("35"), Some(LengthPercent::new(35)));
    assert_eq!(slider.value().get(), 25);
}

#[test]
fn on_input_ignores_non_numeric() {
    let slider = LengthSlider::default();
    assert_eq!(slider.on_input("abc"), None);
}

#[test]
fn disabled_flag_is_exposed() {
    assert!(LengthSlider::new(LengthPercent::DEFAULT, true).is_disabled());
    assert!(!LengthSlider::new(LengthPercent::DEFAULT, false).is_disabled());
}

#[test]
fn length_percent_clamps_to_range() {
    assert_eq!(LengthPercent::new(0).get(), 10);
    assert_eq!(LengthPercent::new(-40).get(), 10);
    assert_eq!(LengthPercent::new(99).get(), 50);
    assert_eq!(LengthPercent::new(i64::MAX).get(), 50);
}

#[test]
fn length_percent_snaps_to_step() {
    assert_eq!(LengthPercent::new(32).get(), 30);
    assert_eq!(LengthPercent::new(33).get(), 35);
    assert_eq!(LengthPercent::new(49).get(), 50);
    assert_eq!(LengthPercent::new(11).get(), 10);
}

#[test]
fn every_length_stays_in_range() {
    for raw in -10..=70 {
        let value = LengthPercent::new(raw).get();
        assert!((LengthPercent::MIN..=LengthPercent::MAX).contains(&value));
        assert_eq!(value % LengthPercent::STEP, 0);
    }
}
