//! Display formatting for durations and timestamps.
//!
//! All report views, export rows, and console messages go through these
//! helpers so durations and instants render the same way everywhere.
//! Negative inputs are clamped to zero; formatting never fails.

use chrono::NaiveDateTime;

/// Formats a minute count as a compact duration, e.g. "1h 30m", "45m", "2h".
pub fn format_minutes(minutes: i64) -> String {
    let minutes = minutes.max(0);
    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours == 0 {
        return format!("{}m", mins);
    }
    if mins == 0 {
        return format!("{}h", hours);
    }
    format!("{}h {}m", hours, mins)
}

/// Formats a second count as a running-timer readout, e.g. "01:07:09".
pub fn format_elapsed(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{:02}:{:02}:{:02}", seconds / 3600, (seconds % 3600) / 60, seconds % 60)
}

/// Formats how long ago an instant was, e.g. "just now", "5m ago",
/// "3h ago", "2d ago". Future instants clamp to "just now".
pub fn format_relative(instant: &NaiveDateTime, now: &NaiveDateTime) -> String {
    let minutes = (*now - *instant).num_minutes().max(0);
    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    format!("{}d ago", hours / 24)
}

/// Formats the time-of-day component as "HH:MM".
pub fn format_clock(instant: &NaiveDateTime) -> String {
    instant.format("%H:%M").to_string()
}

/// Formats the calendar-day component, e.g. "Jan 1, 2023".
pub fn format_date(instant: &NaiveDateTime) -> String {
    instant.format("%b %-d, %Y").to_string()
}
