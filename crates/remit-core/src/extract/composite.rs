//! Priority-ordered strategy composition.

use crate::annotation::Annotation;
use crate::trace::Tracer;

use super::Strategy;

/// Try inner strategies in order and return the first non-absent result.
///
/// Later strategies are never consulted once an earlier one succeeds, even if
/// they would find a "better" match by some other metric.
pub struct FirstSuccess {
    strategies: Vec<Box<dyn Strategy>>,
}

impl FirstSuccess {
    pub fn new(strategies: Vec<Box<dyn Strategy>>) -> Self {
        Self { strategies }
    }
}

impl Strategy for FirstSuccess {
    fn find(&self, tokens: &[Annotation], tracer: &dyn Tracer) -> Option<Annotation> {
        self.strategies
            .iter()
            .find_map(|s| s.find(tokens, tracer))
    }
}
