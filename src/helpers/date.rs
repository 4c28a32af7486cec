//! Date helper functions

use chrono::{Datelike, NaiveDate};

/// Parse a publication date string
///
/// Accepts ISO dates (`2026-02-14`) and long-form dates
/// (`Feb 14, 2026` or `February 14, 2026`).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let formats = ["%Y-%m-%d", "%b %d, %Y", "%B %d, %Y"];

    for fmt in formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    None
}

/// Format a date for display (like "Feb 14, 2026")
pub fn display_date(date: &NaiveDate) -> String {
    format!("{} {}, {}", date.format("%b"), date.day(), date.year())
}

/// Month group label (like "February 2026")
///
/// The year is always included so same-named months from different
/// years stay distinct.
pub fn month_label(date: &NaiveDate) -> String {
    format!("{} {}", date.format("%B"), date.year())
}
