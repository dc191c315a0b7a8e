/// Formats a video length as `H:MM:SS` from one hour upward, otherwise `M:SS`.
///
/// The leading unit is never zero-padded: `65` → `"1:05"`, `7323` →
/// `"2:02:03"`, `0` → `"0:00"`.
#[must_use]
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}
