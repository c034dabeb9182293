//! Field-extraction strategies.
//!
//! Strategies search the canonical (post-merge) token list for a field value
//! anchored to a label word, and return one annotation or nothing. None of
//! them mutate their input; absence is a normal result, not an error.

mod composite;
mod fields;
mod look;

pub use composite::FirstSuccess;
pub use fields::{
    due_date, due_date_strategy, extract_fields, total_amount, total_amount_strategy,
    ExtractedFields, AMOUNT_LABELS, DATE_LABELS,
};
pub use look::{ClosestTo, LookBelow, LookToTheRight, ValueKind};

use crate::annotation::Annotation;
use crate::trace::Tracer;

/// A search over the token list yielding at most one annotation.
pub trait Strategy {
    fn find(&self, tokens: &[Annotation], tracer: &dyn Tracer) -> Option<Annotation>;
}
