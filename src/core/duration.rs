//! Human-readable durations.

/// Formats a millisecond duration using its two most significant units.
///
/// Sub-second remainders are floored away. Negative input formats as `"0s"`.
///
/// # Example
///
/// ```rust
/// use chatlens::core::format_duration;
///
/// assert_eq!(format_duration(2 * 86_400_000 + 5 * 3_600_000), "2d 5h");
/// assert_eq!(format_duration(225_000), "3m 45s");
/// assert_eq!(format_duration(12_999), "12s");
/// ```
pub fn format_duration(ms: i64) -> String {
    let seconds = ms.max(0) / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d {}h", days, hours % 24)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes % 60)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds % 60)
    } else {
        format!("{}s", seconds)
    }
}
