//! Top-level invoice field extraction.
//!
//! Fixed label vocabularies and the composed strategies for the two target
//! fields: total payment amount and due date.

use crate::annotation::Annotation;
use crate::merge::merge_all;
use crate::trace::Tracer;

use super::{FirstSuccess, LookBelow, LookToTheRight, Strategy};

/// Label words tried, in priority order, when locating the payment amount.
pub const AMOUNT_LABELS: [&str; 4] = ["pay", "due", "total", "balance"];

/// Label words tried, in priority order, when locating the due date.
pub const DATE_LABELS: [&str; 2] = ["due", "date"];

/// Composite strategy for the total payment amount: one rightward amount
/// search per label word, first label word that yields anything wins.
pub fn total_amount_strategy() -> FirstSuccess {
    FirstSuccess::new(
        AMOUNT_LABELS
            .iter()
            .map(|label| Box::new(LookToTheRight::amounts(*label)) as Box<dyn Strategy>)
            .collect(),
    )
}

/// Composite strategy for the due date: the rightward search over the whole
/// label list first, and only if that yields nothing, the downward search
/// over the same list.
pub fn due_date_strategy() -> FirstSuccess {
    let rightward = FirstSuccess::new(
        DATE_LABELS
            .iter()
            .map(|label| Box::new(LookToTheRight::dates(*label)) as Box<dyn Strategy>)
            .collect(),
    );
    let downward = FirstSuccess::new(
        DATE_LABELS
            .iter()
            .map(|label| Box::new(LookBelow::dates(*label)) as Box<dyn Strategy>)
            .collect(),
    );
    FirstSuccess::new(vec![Box::new(rightward), Box::new(downward)])
}

/// Locate the total payment amount in a canonical token list.
pub fn total_amount(tokens: &[Annotation], tracer: &dyn Tracer) -> Option<Annotation> {
    total_amount_strategy().find(tokens, tracer)
}

/// Locate the due date in a canonical token list.
pub fn due_date(tokens: &[Annotation], tracer: &dyn Tracer) -> Option<Annotation> {
    due_date_strategy().find(tokens, tracer)
}

/// The extracted invoice fields. Either field may be absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtractedFields {
    pub total_amount: Option<Annotation>,
    pub due_date: Option<Annotation>,
}

impl ExtractedFields {
    /// Amount text as callers render it, with internal spaces stripped.
    pub fn total_amount_text(&self) -> Option<String> {
        self.total_amount
            .as_ref()
            .map(|a| a.description.replace(' ', ""))
    }

    /// Due date text as recognized on the page.
    pub fn due_date_text(&self) -> Option<&str> {
        self.due_date.as_ref().map(|a| a.description.as_str())
    }
}

/// Run the full pipeline on raw OCR tokens: merge passes in their fixed
/// order, then both field strategies.
pub fn extract_fields(tokens: Vec<Annotation>, tracer: &dyn Tracer) -> ExtractedFields {
    let canonical = merge_all(tokens);
    ExtractedFields {
        total_amount: total_amount(&canonical, tracer),
        due_date: due_date(&canonical, tracer),
    }
}
