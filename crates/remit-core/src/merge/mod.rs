//! Finite-state token mergers.
//!
//! Raw OCR output splits semantic tokens apart: `1,234.56` arrives as five
//! tokens, `3/15/2024` as five, `May 3, 2024` as four. Each merger runs one
//! automaton over the token sequence and replaces every matched run with a
//! single annotation whose bounds are the envelope of the run.
//!
//! Shared contract: tokens are consumed strictly in input order; an
//! in-progress match is buffered; completing the pattern flushes one merged
//! annotation; breaking it flushes the buffer unmerged and re-feeds the
//! breaking token from the initial state (so a fresh digit run or month word
//! immediately restarts matching instead of being discarded). Relative order
//! of the original tokens is always preserved.

mod decimal;
mod numeric_date;
mod written_date;

pub use decimal::merge_decimals;
pub use numeric_date::merge_numeric_dates;
pub use written_date::merge_written_dates;

use crate::annotation::Annotation;

/// Run the full merge pipeline in its fixed order: decimal numbers first,
/// then numeric dates, then written dates.
///
/// The order matters: a merged decimal like `1,234.56` no longer looks like a
/// raw digit run, so the date mergers never re-examine it.
pub fn merge_all(tokens: Vec<Annotation>) -> Vec<Annotation> {
    merge_written_dates(merge_numeric_dates(merge_decimals(tokens)))
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::annotation::Annotation;
    use crate::geometry::Bounds;

    /// Build a row of tokens with adjacent left-to-right boxes.
    pub fn row(texts: &[&str]) -> Vec<Annotation> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let left = i as f64 * 20.0;
                Annotation::new(*t, Bounds::from_rect(left, 0.0, left + 18.0, 10.0))
            })
            .collect()
    }

    pub fn descriptions(tokens: &[Annotation]) -> Vec<String> {
        tokens.iter().map(|a| a.description.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{descriptions, row};
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pipeline_order_protects_merged_decimals() {
        // After the decimal pass, "1,234.56" is one token; the numeric date
        // pass must not re-split or re-merge it with the following date.
        let tokens = row(&["1", ",", "234", ".", "56", "3", "/", "15", "/", "2024"]);
        let merged = merge_all(tokens);
        assert_eq!(descriptions(&merged), vec!["1,234.56", "3/15/2024"]);
    }

    #[test]
    fn test_pipeline_is_character_preserving() {
        let texts = ["Due", ":", "3", "/", "15", "/", "2024", "x", "1", ",", "2"];
        let input = row(&texts);
        let merged = merge_all(input);
        let flat: String = descriptions(&merged).concat();
        assert_eq!(flat, texts.concat());
    }
}
