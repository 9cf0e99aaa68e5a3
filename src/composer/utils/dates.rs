//! Admission window date formatting.

use chrono::{DateTime, NaiveDate};

/// `2026-01-05` or an RFC 3339 timestamp becomes `January 5, 2026`.
/// Anything else is shown as written.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()));
    match date {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Human-readable application window, if either end is known.
pub fn admission_window(start: Option<&str>, end: Option<&str>) -> Option<String> {
    match (start, end) {
        (Some(start), Some(end)) => Some(format!("{} to {}", format_date(start), format_date(end))),
        (Some(start), None) => Some(format!("Opens {}", format_date(start))),
        (None, Some(end)) => Some(format!("Closes {}", format_date(end))),
        (None, None) => None,
    }
}
