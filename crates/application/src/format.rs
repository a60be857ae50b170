//! Table-cell formatting for list views
//!
//! List views render every cell from entity values; these helpers keep
//! that rendering consistent with what the form parsers accept back.

use chrono::{DateTime, Utc};

/// Format an instant for a table cell using a strftime pattern
///
/// Rendered in UTC, matching the parser's GMT anchoring.
#[must_use]
pub fn format_date(value: &DateTime<Utc>, pattern: &str) -> String {
    value.format(pattern).to_string()
}

/// Format a decimal for a table cell with a fixed number of places
///
/// Always uses `.` as the decimal separator, regardless of system locale.
#[must_use]
pub fn format_decimal(value: f64, places: usize) -> String {
    format!("{value:.places$}")
}
