//! Display formatting for movie fields

use chrono::{DateTime, NaiveDate};

/// Render a runtime in minutes exactly as the cards display it.
pub fn format_duration(minutes: u32) -> String {
    format!("{} minutes", minutes)
}

/// Render a release date as "Jan 5, 2025".
///
/// A missing or empty date means the release is not yet announced and
/// renders as "TBA". Both plain dates (`2025-01-05`) and RFC 3339
/// datetimes are accepted; anything else is shown as received.
pub fn format_release_date(date: Option<&str>) -> String {
    match date {
        Some(raw) if !raw.trim().is_empty() => format_date(raw),
        _ => "TBA".to_string(),
    }
}

fn format_date(raw: &str) -> String {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return month_day_year(datetime.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return month_day_year(date);
    }
    raw.to_string()
}

fn month_day_year(date: NaiveDate) -> String {
    // %-d suppresses the leading zero on single-digit days
    date.format("%b %-d, %Y").to_string()
}
