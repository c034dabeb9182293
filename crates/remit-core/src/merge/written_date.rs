//! Written-date merger.
//!
//! Coalesces `month-word day [,] year` runs like `["May", "3", ",", "2024"]`
//! into a single space-joined annotation `"May 3, 2024"`. A consumed comma is
//! fused onto the day's text before joining, so the comma never gets its own
//! space. Month words are matched case-insensitively against the full name
//! and 3-letter abbreviation table. The merged text must parse as a date or
//! the run flushes unmerged.

use tracing::debug;

use crate::annotation::Annotation;
use crate::classify::{is_digit_run, month_number};
use crate::dates::parse_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Waiting for a month word.
    Start,
    /// Expecting the day number.
    DayNumber,
    /// Expecting either a comma or the year directly.
    CommaOrYear,
    /// Comma consumed; expecting the year.
    YearAfterComma,
}

struct WrittenDateMerger {
    state: State,
    segments: Vec<Annotation>,
    output: Vec<Annotation>,
}

impl WrittenDateMerger {
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
                if month_number(&token.description).is_some() {
                    self.segments.push(token);
                    self.state = State::DayNumber;
                } else {
                    self.output.push(token);
                }
            }
            State::DayNumber => {
                if is_digit_run(&token.description) {
                    self.segments.push(token);
                    self.state = State::CommaOrYear;
                } else {
                    // A second month word right after an unmatched one
                    // resynchronizes: the first is flushed alone and matching
                    // restarts here.
                    self.break_and_retry(token);
                }
            }
            State::CommaOrYear => {
                if token.description == "," {
                    self.segments.push(token);
                    self.state = State::YearAfterComma;
                } else if is_digit_run(&token.description) {
                    self.segments.push(token);
                    self.finalize(false);
                } else {
                    self.break_and_retry(token);
                }
            }
            State::YearAfterComma => {
                if is_digit_run(&token.description) {
                    self.segments.push(token);
                    self.finalize(true);
                } else {
                    self.break_and_retry(token);
                }
            }
        }
    }

    /// Merge the buffered `[month, day, (,)? year]` run. With a comma the
    /// joined description has three space-separated segments, the comma fused
    /// onto the day.
    fn finalize(&mut self, with_comma: bool) {
        let texts: Vec<String> = if with_comma {
            vec![
                self.segments[0].description.clone(),
                format!("{},", self.segments[1].description),
                self.segments[3].description.clone(),
            ]
        } else {
            self.segments.iter().map(|a| a.description.clone()).collect()
        };
        let candidate = texts.join(" ");
        if parse_date(&candidate).is_some() {
            if let Some(merged) =
                Annotation::merged(&self.segments, texts.iter().map(String::as_str), " ")
            {
                self.output.push(merged);
            }
        } else {
            debug!(%candidate, "written date run did not parse, flushing");
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

/// Merge written-date token runs in `tokens`.
pub fn merge_written_dates(tokens: Vec<Annotation>) -> Vec<Annotation> {
    let mut merger = WrittenDateMerger::new();
    for token in tokens {
        merger.push(token);
    }
    merger.finish()
}
