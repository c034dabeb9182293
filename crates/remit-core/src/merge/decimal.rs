//! Decimal-number merger.
//!
//! Coalesces `integer ("," digits)* "." digits` token runs into a single
//! annotation: `["1", ",", "234", ".", "56"]` becomes `"1,234.56"`. A run is
//! only finalized once the fractional digits arrive; a bare integer or a
//! comma-grouped integer without a decimal part flushes unmerged.

use crate::annotation::Annotation;
use crate::classify::is_digit_run;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Waiting for the leading integer.
    Start,
    /// Inside the integer part; a `.` or `,` may extend the run.
    Integer,
    /// Just consumed `,`; a thousands group must follow.
    AfterComma,
    /// Just consumed `.`; fractional digits complete the match.
    AfterPoint,
}

struct DecimalMerger {
    state: State,
    segments: Vec<Annotation>,
    output: Vec<Annotation>,
}

impl DecimalMerger {
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
                if is_digit_run(&token.description) {
                    self.segments.push(token);
                    self.state = State::Integer;
                } else {
                    self.output.push(token);
                }
            }
            State::Integer => match token.description.as_str() {
                "." => {
                    self.segments.push(token);
                    self.state = State::AfterPoint;
                }
                "," => {
                    self.segments.push(token);
                    self.state = State::AfterComma;
                }
                _ => self.break_and_retry(token),
            },
            State::AfterComma => {
                if is_digit_run(&token.description) {
                    self.segments.push(token);
                    self.state = State::Integer;
                } else {
                    self.break_and_retry(token);
                }
            }
            State::AfterPoint => {
                if is_digit_run(&token.description) {
                    self.segments.push(token);
                    self.finalize();
                } else {
                    self.break_and_retry(token);
                }
            }
        }
    }

    fn finalize(&mut self) {
        if let Some(merged) = Annotation::merged_verbatim(&self.segments, "") {
            self.output.push(merged);
        }
        self.segments.clear();
        self.state = State::Start;
    }

    /// Flush the buffered run unmerged and re-feed the breaking token from
    /// the initial state, so it can start a new match of its own.
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

/// Merge decimal-number token runs in `tokens`.
pub fn merge_decimals(tokens: Vec<Annotation>) -> Vec<Annotation> {
    let mut merger = DecimalMerger::new();
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
    fn test_merges_plain_decimal() {
        let merged = merge_decimals(row(&["1", "234", ".", "56"]));
        // "1" and "234" are separate integers; only the run adjacent to the
        // decimal point merges.
        assert_eq!(descriptions(&merged), vec!["1", "234.56"]);
    }

    #[test]
    fn test_merges_comma_grouped_decimal() {
        let merged = merge_decimals(row(&["1", ",", "234", ".", "56"]));
        assert_eq!(descriptions(&merged), vec!["1,234.56"]);
    }

    #[test]
    fn test_merges_repeated_thousands_groups() {
        let merged = merge_decimals(row(&["12", ",", "345", ",", "678", ".", "90"]));
        assert_eq!(descriptions(&merged), vec!["12,345,678.90"]);
    }

    #[test]
    fn test_bare_integer_not_merged() {
        let merged = merge_decimals(row(&["1234", "items"]));
        assert_eq!(descriptions(&merged), vec!["1234", "items"]);
    }

    #[test]
    fn test_comma_group_without_decimal_flushes_unmerged() {
        let merged = merge_decimals(row(&["1", ",", "234", "end"]));
        assert_eq!(descriptions(&merged), vec!["1", ",", "234", "end"]);
    }

    #[test]
    fn test_merged_bounds_are_envelope() {
        let tokens = row(&["1", ".", "50"]);
        let expected = tokens[0].bounds.envelope(&tokens[2].bounds);
        let merged = merge_decimals(tokens);
        assert_eq!(merged[0].bounds, expected);
    }

    #[test]
    fn test_consecutive_decimals_both_merge() {
        let merged = merge_decimals(row(&["1", ".", "50", "2", ".", "75"]));
        assert_eq!(descriptions(&merged), vec!["1.50", "2.75"]);
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let once = merge_decimals(row(&["1", ",", "200", ".", "00"]));
        let twice = merge_decimals(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_match_conserves_tokens() {
        let input = row(&["a", ".", ",", "b"]);
        let output = merge_decimals(input.clone());
        assert_eq!(output, input);
    }
}
