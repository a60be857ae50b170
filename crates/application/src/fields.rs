//! Lenient readers and input filters for form field text
//!
//! The readers turn field text into optional numbers: parse failure is an
//! absent value, never an error. The filters implement the constraints
//! the shell applies while the operator types.

/// Read an integer field leniently
///
/// Anything that is not a plain base-10 integer, surrounding whitespace
/// included, reads as `None`.
#[must_use]
pub fn try_parse_int(text: &str) -> Option<i32> {
    text.parse().ok()
}

/// Read a decimal field leniently
#[must_use]
pub fn try_parse_double(text: &str) -> Option<f64> {
    text.parse().ok()
}

/// Input filter for integer-only fields: keep ASCII digits, drop the rest
///
/// Runs on every keystroke, so a minus sign never reaches the id or
/// quantity fields from the keyboard. Negative values handed in
/// programmatically are still caught by validation.
#[must_use]
pub fn retain_digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Input filter for bounded text fields: truncate to `max` characters
#[must_use]
pub fn clamp_len(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
