//! Format-trying date parsing.
//!
//! Used in two places: the date mergers accept a candidate run only if its
//! merged text parses, and the date strategies filter candidate tokens on
//! parseability. Parse failure is a normal "not a date" result, never an
//! error.

use chrono::NaiveDate;

use crate::classify::is_digit_run;

/// Formats tried when the text structurally looks like a numeric date with a
/// four-digit year.
const FOUR_DIGIT_YEAR_FORMATS: [&str; 2] = ["%m-%d-%Y", "%m/%d/%Y"];

/// Formats tried otherwise, in order: two-digit-year numeric dates, then
/// written month forms with and without the comma.
const FALLBACK_FORMATS: [&str; 4] = ["%m-%d-%y", "%m/%d/%y", "%B %d, %Y", "%B %d %Y"];

/// Parse a token description as a date, trying fixed formats in order.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.to_lowercase();
    let formats: &[&str] = if looks_like_four_digit_numeric(&text) {
        &FOUR_DIGIT_YEAR_FORMATS
    } else {
        &FALLBACK_FORMATS
    };
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&text, fmt).ok())
}

/// True for `digits SEP digits SEP dddd` where SEP is `-` or `/` and the
/// final component has exactly four digits.
fn looks_like_four_digit_numeric(text: &str) -> bool {
    let parts: Vec<&str> = if text.contains('-') {
        text.split('-').collect()
    } else if text.contains('/') {
        text.split('/').collect()
    } else {
        return false;
    };
    parts.len() == 3
        && parts.iter().all(|p| is_digit_run(p))
        && parts[2].len() == 4
}
