//! Diagnostic trace sink for extraction strategies.
//!
//! Strategies report each intermediate candidate set (label search, alignment
//! filter, directional filter, final pick) to a `Tracer`. Tracing is purely
//! observational and never affects extraction results.

use tracing::debug;

use crate::annotation::Annotation;

/// Observer invoked at well-defined extraction steps.
pub trait Tracer {
    /// Record one step: the annotations a filter consumed and what survived.
    fn record(&self, step: &str, inputs: &[Annotation], result: &[Annotation]);
}

/// Default tracer that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    fn record(&self, _step: &str, _inputs: &[Annotation], _result: &[Annotation]) {}
}

/// Tracer that emits each step as a `tracing` debug event.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn record(&self, step: &str, inputs: &[Annotation], result: &[Annotation]) {
        debug!(
            step,
            inputs = inputs.len(),
            kept = ?result.iter().map(|a| a.description.as_str()).collect::<Vec<_>>(),
            "extraction step"
        );
    }
}
