//! The annotation type: a text token with its bounding quadrilateral.

use serde::{Deserialize, Serialize};

use crate::geometry::Bounds;

/// A recognized text token (or merged run of tokens) with its position.
///
/// Annotations are immutable once constructed; mergers produce new
/// annotations rather than editing existing ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Recognized text content.
    pub description: String,
    /// Bounding quadrilateral on the page image.
    pub bounds: Bounds,
}

impl Annotation {
    pub fn new(description: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            description: description.into(),
            bounds,
        }
    }

    /// Merge a run of annotations into one.
    ///
    /// The description is the in-order concatenation of the parts' texts
    /// joined by `separator`; the bounds are the axis-aligned envelope of the
    /// parts' boxes. `texts` lets callers substitute rewritten text for a
    /// part (OCR glyph fixes, comma fusion) while keeping its box.
    pub fn merged<'a, I>(parts: &[Annotation], texts: I, separator: &str) -> Option<Annotation>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let (first, rest) = parts.split_first()?;
        let bounds = rest
            .iter()
            .fold(first.bounds, |acc, a| acc.envelope(&a.bounds));
        let description = texts.into_iter().collect::<Vec<_>>().join(separator);
        Some(Annotation::new(description, bounds))
    }

    /// Merge keeping each part's original text.
    pub fn merged_verbatim(parts: &[Annotation], separator: &str) -> Option<Annotation> {
        Annotation::merged(parts, parts.iter().map(|a| a.description.as_str()), separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Bounds;
    use pretty_assertions::assert_eq;

    fn ann(text: &str, left: f64, right: f64) -> Annotation {
        Annotation::new(text, Bounds::from_rect(left, 0.0, right, 10.0))
    }

    #[test]
    fn test_merged_concatenates_in_order() {
        let parts = vec![ann("1", 0.0, 5.0), ann(",", 5.0, 7.0), ann("234", 7.0, 20.0)];
        let merged = Annotation::merged_verbatim(&parts, "").unwrap();
        assert_eq!(merged.description, "1,234");
        assert_eq!(merged.bounds, Bounds::from_rect(0.0, 0.0, 20.0, 10.0));
    }

    #[test]
    fn test_merged_with_separator() {
        let parts = vec![ann("May", 0.0, 10.0), ann("3,", 12.0, 16.0), ann("2024", 18.0, 30.0)];
        let merged = Annotation::merged_verbatim(&parts, " ").unwrap();
        assert_eq!(merged.description, "May 3, 2024");
    }

    #[test]
    fn test_merged_empty_run() {
        assert_eq!(Annotation::merged_verbatim(&[], ""), None);
    }
}
