//! Ingestion of the OCR service response.
//!
//! The service returns `responses[0].textAnnotations`, each annotation
//! carrying a `boundingPoly` whose vertices are ordered top-left, top-right,
//! bottom-right, bottom-left. Only the first response is consumed; an absent
//! `responses` or `textAnnotations` yields an empty token list rather than an
//! error. Fetching the response and persisting it are the caller's concern.

use serde::Deserialize;
use tracing::debug;

use crate::annotation::Annotation;
use crate::error::{RemitError, Result};
use crate::geometry::{Bounds, Point};

/// Top-level OCR service response.
#[derive(Debug, Deserialize)]
pub struct OcrResponse {
    #[serde(default)]
    responses: Vec<PageResponse>,
}

#[derive(Debug, Deserialize)]
struct PageResponse {
    #[serde(rename = "textAnnotations", default)]
    text_annotations: Vec<RawAnnotation>,
}

#[derive(Debug, Deserialize)]
struct RawAnnotation {
    #[serde(default)]
    description: String,
    #[serde(rename = "boundingPoly")]
    bounding_poly: RawPoly,
}

#[derive(Debug, Deserialize)]
struct RawPoly {
    #[serde(default)]
    vertices: Vec<RawVertex>,
}

/// The service omits zero-valued coordinates, so both fields default to 0.
#[derive(Debug, Deserialize)]
struct RawVertex {
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
}

impl OcrResponse {
    /// Convert the first response's text annotations into the token list the
    /// extraction pipeline operates on.
    pub fn into_annotations(self) -> Result<Vec<Annotation>> {
        let Some(page) = self.responses.into_iter().next() else {
            return Ok(Vec::new());
        };
        let tokens = page
            .text_annotations
            .into_iter()
            .map(annotation_from_raw)
            .collect::<Result<Vec<_>>>()?;
        debug!(count = tokens.len(), "ingested OCR tokens");
        Ok(tokens)
    }
}

/// Parse an OCR service JSON payload into the token list.
pub fn annotations_from_json(payload: &str) -> Result<Vec<Annotation>> {
    let response: OcrResponse = serde_json::from_str(payload)?;
    response.into_annotations()
}

fn annotation_from_raw(raw: RawAnnotation) -> Result<Annotation> {
    let v = &raw.bounding_poly.vertices;
    if v.len() < 4 {
        return Err(RemitError::InvalidInput(format!(
            "bounding polygon for {:?} has {} vertices, expected 4",
            raw.description,
            v.len()
        )));
    }
    let bounds = Bounds::new(
        Point::new(v[0].x, v[0].y),
        Point::new(v[1].x, v[1].y),
        Point::new(v[2].x, v[2].y),
        Point::new(v[3].x, v[3].y),
    );
    Ok(Annotation::new(raw.description, bounds))
}
