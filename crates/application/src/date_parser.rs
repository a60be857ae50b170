//! Free-text date parsing for form fields
//!
//! Dates arrive as whatever the operator typed. A fixed, ordered list of
//! patterns is tried and the first full match wins; date-only input
//! resolves to midnight. Wall times are read as GMT so the same text maps
//! to the same instant on every machine.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;
use tracing::debug;

/// A single accepted input pattern
struct DatePattern {
    /// Label shown in error messages and UI hints
    label: &'static str,
    strftime: &'static str,
    with_time: bool,
}

impl DatePattern {
    const fn date_only(label: &'static str, strftime: &'static str) -> Self {
        Self {
            label,
            strftime,
            with_time: false,
        }
    }

    const fn date_time(label: &'static str, strftime: &'static str) -> Self {
        Self {
            label,
            strftime,
            with_time: true,
        }
    }

    /// Parse `text` against this pattern, requiring a full, exact match
    fn try_parse(&self, text: &str) -> Option<DateTime<Utc>> {
        let (candidate, strftime) = if self.with_time {
            (Cow::Borrowed(text), Cow::Borrowed(self.strftime))
        } else {
            // Date-only input resolves to midnight
            (
                Cow::Owned(format!("{text} 00:00:00")),
                Cow::Owned(format!("{} %H:%M:%S", self.strftime)),
            )
        };
        let naive = NaiveDateTime::parse_from_str(&candidate, &strftime).ok()?;
        // chrono reads unpadded numbers and skips whitespace around them.
        // Only text that renders back to itself counts as a match.
        if candidate != naive.format(&strftime).to_string() {
            return None;
        }
        Some(naive.and_utc())
    }
}

/// Patterns accepted by [`parse_date`], tried in order
const ACCEPTED_PATTERNS: [DatePattern; 5] = [
    DatePattern::date_only("dd/MM/yyyy", "%d/%m/%Y"),
    DatePattern::date_time("dd/MM/yyyy HH:mm:ss", "%d/%m/%Y %H:%M:%S"),
    DatePattern::date_only("dd-MM-yyyy", "%d-%m-%Y"),
    DatePattern::date_time("dd-MM-yyyy HH:mm:ss", "%d-%m-%Y %H:%M:%S"),
    DatePattern::date_only("yyyy-MM-dd", "%Y-%m-%d"),
];

/// Labels of every accepted pattern, in the order they are tried
pub fn accepted_patterns() -> impl Iterator<Item = &'static str> {
    ACCEPTED_PATTERNS.iter().map(|pattern| pattern.label)
}

/// Error returned when field text cannot be read as a date
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    /// Input was empty or whitespace-only
    #[error("date text can't be empty")]
    Empty,

    /// Input matched none of the accepted patterns
    #[error("date '{text}' matches none of the accepted formats: {}", .accepted.join(", "))]
    Unrecognized {
        /// The rejected input, exactly as given
        text: String,
        /// Accepted pattern labels, for display
        accepted: Vec<&'static str>,
    },
}

/// Parse form field text into an instant
///
/// Accepted patterns, tried in order:
/// - `dd/MM/yyyy`
/// - `dd/MM/yyyy HH:mm:ss`
/// - `dd-MM-yyyy`
/// - `dd-MM-yyyy HH:mm:ss`
/// - `yyyy-MM-dd`
///
/// Date-only patterns resolve to midnight. The wall time is read as GMT
/// and returned as a UTC instant. Emptiness is checked on the trimmed
/// text, but the patterns match against the input exactly as given:
/// surrounding whitespace, unpadded numbers, and two-digit years all
/// match nothing.
///
/// # Errors
///
/// [`DateParseError::Empty`] when the input is blank, or
/// [`DateParseError::Unrecognized`] when no pattern matches; the latter
/// carries the rejected text and the accepted pattern labels.
pub fn parse_date(text: &str) -> Result<DateTime<Utc>, DateParseError> {
    if text.trim().is_empty() {
        return Err(DateParseError::Empty);
    }

    for pattern in &ACCEPTED_PATTERNS {
        if let Some(instant) = pattern.try_parse(text) {
            debug!(input = %text, pattern = pattern.label, "Parsed date");
            return Ok(instant);
        }
    }

    debug!(input = %text, "Date matched no accepted pattern");
    Err(DateParseError::Unrecognized {
        text: text.to_string(),
        accepted: accepted_patterns().collect(),
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn parses_slash_date_to_midnight() {
        assert_eq!(parse_date("25/12/2023"), Ok(midnight(2023, 12, 25)));
    }

    #[test]
    fn parses_dash_date_to_midnight() {
        assert_eq!(parse_date("25-12-2023"), Ok(midnight(2023, 12, 25)));
    }

    #[test]
    fn parses_iso_date_to_midnight() {
        assert_eq!(parse_date("2023-12-25"), Ok(midnight(2023, 12, 25)));
    }

    #[test]
    fn equivalent_spellings_agree() {
        let slash = parse_date("25/12/2023").unwrap();
        let dash = parse_date("25-12-2023").unwrap();
        let iso = parse_date("2023-12-25").unwrap();
        assert_eq!(slash, dash);
        assert_eq!(dash, iso);
    }

    #[test]
    fn parses_slash_date_with_time() {
        let expected = Utc.with_ymd_and_hms(2023, 12, 25, 13, 45, 10).unwrap();
        assert_eq!(parse_date("25/12/2023 13:45:10"), Ok(expected));
    }

    #[test]
    fn parses_dash_date_with_time() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 2, 8, 0, 59).unwrap();
        assert_eq!(parse_date("02-01-2024 08:00:59"), Ok(expected));
    }

    #[test]
    fn time_is_kept_not_truncated_to_midnight() {
        let parsed = parse_date("25/12/2023 10:00:00").unwrap();
        assert_ne!(parsed, midnight(2023, 12, 25));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(parse_date(""), Err(DateParseError::Empty));
    }

    #[test]
    fn whitespace_input_is_rejected() {
        assert_eq!(parse_date("   "), Err(DateParseError::Empty));
    }

    #[test]
    fn slash_year_first_is_unrecognized() {
        let err = parse_date("2023/12/25").unwrap_err();
        match err {
            DateParseError::Unrecognized { text, .. } => assert_eq!(text, "2023/12/25"),
            DateParseError::Empty => panic!("expected Unrecognized"),
        }
    }

    #[test]
    fn iso_with_time_is_unrecognized() {
        assert!(parse_date("2023-12-25 10:00:00").is_err());
    }

    #[test]
    fn surrounding_whitespace_is_not_stripped_for_matching() {
        assert!(parse_date(" 25/12/2023").is_err());
        assert!(parse_date("25/12/2023 ").is_err());
    }

    #[test]
    fn unpadded_day_and_month_are_unrecognized() {
        assert!(parse_date("1/2/2023").is_err());
    }

    #[test]
    fn two_digit_year_is_unrecognized() {
        let err = parse_date("25/12/23").unwrap_err();
        match err {
            DateParseError::Unrecognized { text, .. } => assert_eq!(text, "25/12/23"),
            DateParseError::Empty => panic!("expected Unrecognized"),
        }
    }

    #[test]
    fn doubled_space_before_the_time_is_unrecognized() {
        assert!(parse_date("25/12/2023  10:00:00").is_err());
    }

    #[test]
    fn impossible_calendar_date_is_rejected() {
        assert!(parse_date("31/02/2023").is_err());
    }

    #[test]
    fn error_message_lists_accepted_patterns() {
        let message = parse_date("not a date").unwrap_err().to_string();
        assert!(message.contains("not a date"));
        assert!(message.contains("dd/MM/yyyy"));
        assert!(message.contains("dd-MM-yyyy HH:mm:ss"));
        assert!(message.contains("yyyy-MM-dd"));
    }

    #[test]
    fn accepted_patterns_are_ordered() {
        let labels: Vec<_> = accepted_patterns().collect();
        assert_eq!(
            labels,
            vec![
                "dd/MM/yyyy",
                "dd/MM/yyyy HH:mm:ss",
                "dd-MM-yyyy",
                "dd-MM-yyyy HH:mm:ss",
                "yyyy-MM-dd",
            ]
        );
    }
}
