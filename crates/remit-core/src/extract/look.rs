//! Label-anchored geometric searches.

use rust_decimal::Decimal;

use crate::annotation::Annotation;
use crate::classify::{decimal_value, is_decimal_number};
use crate::dates::parse_date;
use crate::spatial::{below, distance, horizontally_aligned, to_the_right_of, vertically_aligned};
use crate::trace::Tracer;

use super::Strategy;

/// What shape of token counts as a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Decimal-number tokens, e.g. `1,200.00`.
    Amount,
    /// Tokens whose text parses as a date.
    Date,
}

impl ValueKind {
    fn matches(&self, text: &str) -> bool {
        match self {
            ValueKind::Amount => is_decimal_number(text),
            ValueKind::Date => parse_date(text).is_some(),
        }
    }
}

/// How to choose between per-label candidates when the label word occurs more
/// than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pick {
    /// First candidate in input order.
    First,
    /// Candidate with the largest numeric value; ties keep the earlier one.
    MaxValue,
}

/// Find a value token horizontally aligned with, and at or to the right of, a
/// label word.
///
/// Per label occurrence the candidate is the first aligned rightward value in
/// input order. Across occurrences, amounts take the numerically largest
/// candidate and dates the first.
#[derive(Debug, Clone)]
pub struct LookToTheRight {
    label: String,
    kind: ValueKind,
    pick: Pick,
}

impl LookToTheRight {
    /// Amount search: largest value wins across label occurrences.
    pub fn amounts(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: ValueKind::Amount,
            pick: Pick::MaxValue,
        }
    }

    /// Date search: first label occurrence wins.
    pub fn dates(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: ValueKind::Date,
            pick: Pick::First,
        }
    }
}

impl Strategy for LookToTheRight {
    fn find(&self, tokens: &[Annotation], tracer: &dyn Tracer) -> Option<Annotation> {
        let labels = find_labels(&self.label, tokens, tracer);

        let mut candidates = Vec::new();
        for label in &labels {
            let values: Vec<Annotation> = tokens
                .iter()
                .filter(|t| self.kind.matches(&t.description))
                .cloned()
                .collect();
            tracer.record("value-filter", tokens, &values);

            let aligned: Vec<Annotation> = values
                .iter()
                .filter(|t| horizontally_aligned(&label.bounds, &t.bounds))
                .cloned()
                .collect();
            tracer.record("alignment-filter", &values, &aligned);

            let rightward: Vec<Annotation> = aligned
                .iter()
                .filter(|t| to_the_right_of(&label.bounds, &t.bounds))
                .cloned()
                .collect();
            tracer.record("directional-filter", &aligned, &rightward);

            // First in input order; candidates are not re-sorted by x.
            if let Some(first) = rightward.into_iter().next() {
                candidates.push(first);
            }
        }

        let result = match self.pick {
            Pick::First => candidates.first().cloned(),
            Pick::MaxValue => pick_max_value(candidates),
        };
        tracer.record("final-pick", tokens, result_slice(&result));
        result
    }
}

/// Find a date token vertically aligned with, and at or below, a label word.
/// First aligned date below the first matching label wins.
#[derive(Debug, Clone)]
pub struct LookBelow {
    label: String,
}

impl LookBelow {
    pub fn dates(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Strategy for LookBelow {
    fn find(&self, tokens: &[Annotation], tracer: &dyn Tracer) -> Option<Annotation> {
        let labels = find_labels(&self.label, tokens, tracer);

        for label in &labels {
            let values: Vec<Annotation> = tokens
                .iter()
                .filter(|t| ValueKind::Date.matches(&t.description))
                .cloned()
                .collect();
            tracer.record("value-filter", tokens, &values);

            let aligned: Vec<Annotation> = values
                .iter()
                .filter(|t| vertically_aligned(&label.bounds, &t.bounds))
                .cloned()
                .collect();
            tracer.record("alignment-filter", &values, &aligned);

            let downward: Vec<Annotation> = aligned
                .iter()
                .filter(|t| below(&label.bounds, &t.bounds))
                .cloned()
                .collect();
            tracer.record("directional-filter", &aligned, &downward);

            if let Some(first) = downward.into_iter().next() {
                tracer.record("final-pick", tokens, std::slice::from_ref(&first));
                return Some(first);
            }
        }
        tracer.record("final-pick", tokens, &[]);
        None
    }
}

/// Find the date token whose center is nearest to a reference annotation.
/// Ties keep the first-encountered token.
#[derive(Debug, Clone)]
pub struct ClosestTo {
    reference: Annotation,
}

impl ClosestTo {
    pub fn new(reference: Annotation) -> Self {
        Self { reference }
    }
}

impl Strategy for ClosestTo {
    fn find(&self, tokens: &[Annotation], tracer: &dyn Tracer) -> Option<Annotation> {
        let values: Vec<Annotation> = tokens
            .iter()
            .filter(|t| ValueKind::Date.matches(&t.description))
            .cloned()
            .collect();
        tracer.record("value-filter", tokens, &values);

        let mut best: Option<(f64, Annotation)> = None;
        for token in values {
            let d = distance(&self.reference.bounds, &token.bounds);
            let closer = match &best {
                None => true,
                Some((bd, _)) => d < *bd,
            };
            if closer {
                best = Some((d, token));
            }
        }
        let result = best.map(|(_, a)| a);
        tracer.record("final-pick", tokens, result_slice(&result));
        result
    }
}

/// Tokens whose description equals the label word, case-insensitively.
fn find_labels(label: &str, tokens: &[Annotation], tracer: &dyn Tracer) -> Vec<Annotation> {
    let labels: Vec<Annotation> = tokens
        .iter()
        .filter(|t| t.description.eq_ignore_ascii_case(label))
        .cloned()
        .collect();
    tracer.record("label-search", tokens, &labels);
    labels
}

/// Largest amount by numeric value; earlier candidates win ties.
fn pick_max_value(candidates: Vec<Annotation>) -> Option<Annotation> {
    let mut best: Option<(Decimal, Annotation)> = None;
    for candidate in candidates {
        let Some(value) = decimal_value(&candidate.description) else {
            continue;
        };
        let better = match &best {
            None => true,
            Some((bv, _)) => value > *bv,
        };
        if better {
            best = Some((value, candidate));
        }
    }
    best.map(|(_, a)| a)
}

/// View an optional result as a zero-or-one element slice for tracing.
fn result_slice(result: &Option<Annotation>) -> &[Annotation] {
    result.as_ref().map(std::slice::from_ref).unwrap_or(&[])
}
