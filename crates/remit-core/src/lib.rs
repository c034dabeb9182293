//! Core library for invoice field extraction from positioned OCR output.
//!
//! This crate provides:
//! - Ingestion of the OCR service's positioned-text response
//! - Finite-state token mergers that reassemble split numbers and dates
//! - Spatial predicates and label-anchored search strategies
//! - Extraction of the total payment amount and the due date
//!
//! The pipeline is a pure function over an ordered token list: raw tokens are
//! merged (decimal numbers, numeric dates, written dates, in that fixed
//! order) into a canonical annotation list, then each field strategy searches
//! it and returns one annotation or nothing. Fetching the OCR response,
//! storage, and CLI concerns live outside this crate.

pub mod annotation;
pub mod classify;
pub mod dates;
pub mod error;
pub mod extract;
pub mod geometry;
pub mod merge;
pub mod ocr;
pub mod spatial;
pub mod trace;

pub use annotation::Annotation;
pub use dates::parse_date;
pub use error::{RemitError, Result};
pub use extract::{
    due_date, extract_fields, total_amount, ClosestTo, ExtractedFields, FirstSuccess, LookBelow,
    LookToTheRight, Strategy,
};
pub use geometry::{Bounds, Point};
pub use merge::{merge_all, merge_decimals, merge_numeric_dates, merge_written_dates};
pub use ocr::{annotations_from_json, OcrResponse};
pub use trace::{LogTracer, NoopTracer, Tracer};
