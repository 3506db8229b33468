//! Duration formatting for report display and export.
//!
//! All durations render as "HH:MM". Negative values clamp to "00:00";
//! seconds are never shown.

use chrono::Duration;

/// Formats a duration as "HH:MM", zero-padded.
///
/// # Examples
///
/// ```rust
/// use worklens::libs::formatter::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::hours(8)), "08:00");
/// assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
/// assert_eq!(format_duration(&Duration::minutes(-5)), "00:00");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats a minute total as "HH:MM".
pub fn format_minutes(minutes: i64) -> String {
    format_duration(&Duration::minutes(minutes))
}

/// Formats a fractional minute average as "HH:MM", rounding to the
/// nearest whole minute first.
///
/// # Examples
///
/// ```rust
/// use worklens::libs::formatter::format_minutes_f64;
///
/// assert_eq!(format_minutes_f64(59.9), "01:00");
/// assert_eq!(format_minutes_f64(59.4), "00:59");
/// ```
pub fn format_minutes_f64(minutes: f64) -> String {
    format_minutes(minutes.round() as i64)
}
