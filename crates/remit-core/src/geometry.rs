//! Geometric primitives for OCR token positions.
//!
//! Coordinates are in image space: x grows to the right, y grows downward.

use serde::{Deserialize, Serialize};

/// A point in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A (near-)axis-aligned quadrilateral described by its four corners.
///
/// Width and height are signed; callers must not assume positivity for
/// degenerate boxes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_right: Point,
    pub bottom_left: Point,
}

impl Bounds {
    pub fn new(top_left: Point, top_right: Point, bottom_right: Point, bottom_left: Point) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Axis-aligned rectangle from opposite corners, mainly for tests and
    /// synthetic layouts.
    pub fn from_rect(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            top_left: Point::new(left, top),
            top_right: Point::new(right, top),
            bottom_right: Point::new(right, bottom),
            bottom_left: Point::new(left, bottom),
        }
    }

    pub fn width(&self) -> f64 {
        self.top_right.x - self.top_left.x
    }

    pub fn height(&self) -> f64 {
        self.bottom_left.y - self.top_left.y
    }

    /// Center of the box, derived from the top-left corner and the signed
    /// width/height.
    pub fn center(&self) -> Point {
        Point::new(
            self.top_left.x + self.width() / 2.0,
            self.top_left.y + self.height() / 2.0,
        )
    }

    /// Minimal axis-aligned quadrilateral covering `self` and `other`.
    ///
    /// Each output corner takes the extremal coordinates of the two inputs'
    /// matching corners (min-x/min-y for top-left, max-x/min-y for top-right,
    /// and so on). Commutative and associative, so folding over any number of
    /// boxes in any order yields the same envelope.
    pub fn envelope(&self, other: &Bounds) -> Bounds {
        Bounds {
            top_left: Point::new(
                self.top_left.x.min(other.top_left.x),
                self.top_left.y.min(other.top_left.y),
            ),
            top_right: Point::new(
                self.top_right.x.max(other.top_right.x),
                self.top_right.y.min(other.top_right.y),
            ),
            bottom_right: Point::new(
                self.bottom_right.x.max(other.bottom_right.x),
                self.bottom_right.y.max(other.bottom_right.y),
            ),
            bottom_left: Point::new(
                self.bottom_left.x.min(other.bottom_left.x),
                self.bottom_left.y.max(other.bottom_left.y),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
    }

    #[test]
    fn test_center_within_span() {
        let b = Bounds::from_rect(10.0, 20.0, 50.0, 40.0);
        let c = b.center();
        assert_eq!(c, Point::new(30.0, 30.0));
        assert!(c.x >= b.top_left.x && c.x <= b.top_right.x);
        assert!(c.y >= b.top_left.y && c.y <= b.bottom_left.y);
    }

    #[test]
    fn test_envelope_covers_both() {
        let a = Bounds::from_rect(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::from_rect(5.0, 5.0, 20.0, 15.0);
        let e = a.envelope(&b);
        assert_eq!(e, Bounds::from_rect(0.0, 0.0, 20.0, 15.0));
    }

    #[test]
    fn test_envelope_commutative_associative() {
        let a = Bounds::from_rect(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::from_rect(5.0, -2.0, 20.0, 8.0);
        let c = Bounds::from_rect(-3.0, 1.0, 4.0, 30.0);

        assert_eq!(a.envelope(&b), b.envelope(&a));
        assert_eq!(a.envelope(&b).envelope(&c), a.envelope(&b.envelope(&c)));
    }

    #[test]
    fn test_signed_width_not_clamped() {
        // A degenerate box with swapped corners keeps its negative width.
        let b = Bounds::from_rect(50.0, 0.0, 10.0, 10.0);
        assert_eq!(b.width(), -40.0);
    }
}
