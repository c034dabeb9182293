//! Numeric-date merger.
//!
//! Coalesces `digits SEP digits SEP digits` runs into one annotation, where
//! SEP is one of `, . - /` and the second separator must repeat the first
//! (`3/15-2024` never merges). Digit runs tolerate the OCR `O` glyph; the
//! merged text has every `O` rewritten to `0`. A run merges only if the
//! rewritten text parses as a date, so `99/99/9999` flushes unmerged.

use tracing::debug;

use crate::annotation::Annotation;
use crate::classify::{fix_digit_glyphs, is_date_separator, is_digit_run_lenient};
use crate::dates::parse_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Waiting for the leading digit run (month).
    Start,
    /// Expecting the first separator.
    FirstSeparator,
    /// Expecting the day digits.
    DayDigits,
    /// Expecting the second separator, which must match the first.
    SecondSeparator,
    /// Expecting the year digits, which complete the match.
    YearDigits,
}

struct NumericDateMerger {
    state: State,
    segments: Vec<Annotation>,
    output: Vec<Annotation>,
}

impl NumericDateMerger {
    fn new() -> Self {
        Self {
            state: State::Start,
            segments: Vec::new(),
            output: Vec::new(),
        }
    }

    fn push(&mut self, token: Annotation) {
        match self.state {
            State::Start => {
                if is_digit_run_lenient(&token.description) {
                    self.segments.push(token);
                    self.state = State::FirstSeparator;
                } else {
                    self.output.push(token);
                }
            }
            State::FirstSeparator => {
                if is_date_separator(&token.description) {
                    self.segments.push(token);
                    self.state = State::DayDigits;
                } else {
                    // A fresh digit run resynchronizes here: the old digit is
                    // flushed alone and matching restarts at this token.
                    self.break_and_retry(token);
                }
            }
            State::DayDigits => {
                if is_digit_run_lenient(&token.description) {
                    self.segments.push(token);
                    self.state = State::SecondSeparator;
                } else {
                    self.break_and_retry(token);
                }
            }
            State::SecondSeparator => {
                if is_date_separator(&token.description)
                    && token.description == self.segments[1].description
                {
                    self.segments.push(token);
                    self.state = State::YearDigits;
                } else {
                    self.break_and_retry(token);
                }
            }
            State::YearDigits => {
                if is_digit_run_lenient(&token.description) {
                    self.segments.push(token);
                    self.finalize();
                } else {
                    self.break_and_retry(token);
                }
            }
        }
    }

    fn finalize(&mut self) {
        let texts: Vec<String> = self
            .segments
            .iter()
            .map(|a| fix_digit_glyphs(&a.description))
            .collect();
        let candidate = texts.concat();
        if parse_date(&candidate).is_some() {
            if let Some(merged) =
                Annotation::merged(&self.segments, texts.iter().map(String::as_str), "")
            {
                self.output.push(merged);
            }
        } else {
            debug!(%candidate, "structural date match did not parse, flushing");
            self.output.append(&mut self.segments);
        }
        self.segments.clear();
        self.state = State::Start;
    }

    fn break_and_retry(&mut self, token: Annotation) {
        self.output.append(&mut self.segments);
        self.state = State::Start;
        self.push(token);
    }

    fn finish(mut self) -> Vec<Annotation> {
        self.output.append(&mut self.segments);
        self.output
    }
}

/// Merge numeric-date token runs in `tokens`.
pub fn merge_numeric_dates(tokens: Vec<Annotation>) -> Vec<Annotation> {
    let mut merger = NumericDateMerger::new();
    for token in tokens {
        merger.push(token);
    }
    merger.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::testing::{descriptions, row};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_merges_slash_date() {
        let merged = merge_numeric_dates(row(&["3", "/", "15", "/", "2024"]));
        assert_eq!(descriptions(&merged), vec!["3/15/2024"]);
    }

    #[test]
    fn test_merges_dash_date() {
        let merged = merge_numeric_dates(row(&["3", "-", "15", "-", "2024"]));
        assert_eq!(descriptions(&merged), vec!["3-15-2024"]);
    }

    #[test]
    fn test_asymmetric_separators_reject() {
        let merged = merge_numeric_dates(row(&["3", "/", "15", "-", "2024"]));
        assert_eq!(descriptions(&merged), vec!["3", "/", "15", "-", "2024"]);
    }

    #[test]
    fn test_ocr_glyph_rewritten() {
        let merged = merge_numeric_dates(row(&["3", "/", "15", "/", "2O24"]));
        assert_eq!(descriptions(&merged), vec!["3/15/2024"]);
    }

    #[test]
    fn test_unparseable_run_flushes_unmerged() {
        let merged = merge_numeric_dates(row(&["99", "/", "99", "/", "9999"]));
        assert_eq!(descriptions(&merged), vec!["99", "/", "99", "/", "9999"]);
    }

    #[test]
    fn test_resynchronizes_on_fresh_digit_run() {
        // "7" starts a failed match; the following run is a real date and
        // must still merge.
        let merged = merge_numeric_dates(row(&["7", "3", "/", "15", "/", "2024"]));
        assert_eq!(descriptions(&merged), vec!["7", "3/15/2024"]);
    }

    #[test]
    fn test_resynchronizes_mid_pattern() {
        let merged = merge_numeric_dates(row(&["3", "/", "15", "3", "/", "15", "/", "24"]));
        assert_eq!(descriptions(&merged), vec!["3", "/", "15", "3/15/24"]);
    }

    #[test]
    fn test_merged_bounds_are_envelope() {
        let tokens = row(&["3", "/", "15", "/", "2024"]);
        let expected = tokens[0].bounds.envelope(&tokens[4].bounds);
        let merged = merge_numeric_dates(tokens);
        assert_eq!(merged[0].bounds, expected);
    }

    #[test]
    fn test_no_match_conserves_tokens() {
        let input = row(&["Due", ":", "soon"]);
        let output = merge_numeric_dates(input.clone());
        assert_eq!(output, input);
    }
}
