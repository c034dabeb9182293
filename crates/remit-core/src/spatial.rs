//! Spatial predicates over bounding boxes.
//!
//! Alignment is a one-sided containment test: the reference box's span
//! against the candidate's center, not a symmetric interval overlap. Tokens
//! much taller or narrower than the reference can therefore align in one
//! direction only. Kept as-is for compatibility with the established
//! extraction behavior.

use crate::geometry::Bounds;

/// True iff `candidate`'s vertical center lies within `reference`'s vertical
/// span.
pub fn horizontally_aligned(reference: &Bounds, candidate: &Bounds) -> bool {
    let y = candidate.center().y;
    reference.top_left.y <= y && y <= reference.bottom_left.y
}

/// True iff `candidate`'s horizontal center lies within `reference`'s
/// horizontal span.
pub fn vertically_aligned(reference: &Bounds, candidate: &Bounds) -> bool {
    let x = candidate.center().x;
    reference.top_left.x <= x && x <= reference.top_right.x
}

/// True iff `candidate`'s center is at or to the right of `label`'s center.
pub fn to_the_right_of(label: &Bounds, candidate: &Bounds) -> bool {
    candidate.center().x >= label.center().x
}

/// True iff `candidate`'s center is at or below `label`'s center.
pub fn below(label: &Bounds, candidate: &Bounds) -> bool {
    candidate.center().y >= label.center().y
}

/// Euclidean distance between the two boxes' centers.
pub fn distance(a: &Bounds, b: &Bounds) -> f64 {
    a.center().distance_to(&b.center())
}
