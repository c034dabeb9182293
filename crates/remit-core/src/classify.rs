//! Token text classification predicates.
//!
//! Explicit character-class checks over token text, shared by the mergers and
//! the extraction strategies. The recognized separator set and the month
//! table are fixed vocabulary, not configuration.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Separators accepted between the components of a numeric date.
pub const DATE_SEPARATORS: [&str; 4] = [",", ".", "-", "/"];

/// A non-empty run of ASCII digits.
pub fn is_digit_run(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// A digit run that tolerates the letter `O` standing in for `0`.
///
/// OCR engines routinely confuse the two glyphs inside dates; the numeric
/// date merger accepts such runs and rewrites them on merge.
pub fn is_digit_run_lenient(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit() || c == 'O')
}

/// Rewrite the `O` glyph to the digit `0` throughout the text.
pub fn fix_digit_glyphs(text: &str) -> String {
    text.replace('O', "0")
}

/// One of the recognized date separators, as a standalone token.
pub fn is_date_separator(text: &str) -> bool {
    DATE_SEPARATORS.contains(&text)
}

/// A complete decimal number: integer part (optionally in comma-separated
/// groups), a literal `.`, and a fractional digit run. This is the shape the
/// decimal merger produces and the amount strategies filter on.
pub fn is_decimal_number(text: &str) -> bool {
    let Some((integer, fraction)) = text.split_once('.') else {
        return false;
    };
    if !is_digit_run(fraction) {
        return false;
    }
    !integer.is_empty() && integer.split(',').all(is_digit_run)
}

/// Numeric value of a decimal-number token, commas stripped.
pub fn decimal_value(text: &str) -> Option<Decimal> {
    if !is_decimal_number(text) {
        return None;
    }
    Decimal::from_str(&text.replace(',', "")).ok()
}

/// Month number for a case-insensitive month name or 3-letter abbreviation.
///
/// "may" is both the full name and its own abbreviation; the table resolves
/// it once.
pub fn month_number(text: &str) -> Option<u32> {
    let month = match text.to_lowercase().as_str() {
        "january" | "jan" => 1,
        "february" | "feb" => 2,
        "march" | "mar" => 3,
        "april" | "apr" => 4,
        "may" => 5,
        "june" | "jun" => 6,
        "july" | "jul" => 7,
        "august" | "aug" => 8,
        "september" | "sep" => 9,
        "october" | "oct" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,
        _ => return None,
    };
    Some(month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_runs() {
        assert!(is_digit_run("2024"));
        assert!(!is_digit_run(""));
        assert!(!is_digit_run("2O24"));
        assert!(is_digit_run_lenient("2O24"));
        assert!(!is_digit_run_lenient("2o24"));
        assert!(!is_digit_run_lenient("12a"));
    }

    #[test]
    fn test_fix_digit_glyphs() {
        assert_eq!(fix_digit_glyphs("2O2O"), "2020");
        assert_eq!(fix_digit_glyphs("15"), "15");
    }

    #[test]
    fn test_date_separators() {
        for sep in DATE_SEPARATORS {
            assert!(is_date_separator(sep));
        }
        assert!(!is_date_separator(":"));
        assert!(!is_date_separator("--"));
    }

    #[test]
    fn test_decimal_number_shape() {
        assert!(is_decimal_number("1234.56"));
        assert!(is_decimal_number("1,234.56"));
        assert!(is_decimal_number("0.99"));
        assert!(!is_decimal_number("1234"));
        assert!(!is_decimal_number("1,234"));
        assert!(!is_decimal_number(".56"));
        assert!(!is_decimal_number("12."));
        assert!(!is_decimal_number("$1.50"));
        assert!(!is_decimal_number("1.2.3"));
    }

    #[test]
    fn test_decimal_value() {
        use rust_decimal::Decimal;
        use std::str::FromStr;

        assert_eq!(decimal_value("1,200.00"), Decimal::from_str("1200.00").ok());
        assert_eq!(decimal_value("hello"), None);
    }

    #[test]
    fn test_month_table() {
        assert_eq!(month_number("January"), Some(1));
        assert_eq!(month_number("SEP"), Some(9));
        assert_eq!(month_number("may"), Some(5));
        assert_eq!(month_number("May"), Some(5));
        assert_eq!(month_number("mai"), None);
        assert_eq!(month_number("Janu"), None);
    }
}
