use once_cell::sync::Lazy;
use regex::Regex;

use super::model::{Dataset, Kind};

// ---------------------------------------------------------------------------
// Column type sampling
// ---------------------------------------------------------------------------

/// Data rows inspected per column when the caller gives no explicit sample
/// size.
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// A formatted number as it appears in the raw exports: optional padding and
/// quoting, optional sign, one to three leading digits, comma-grouped
/// thousands, optional decimals. `  "-382,372.17"  ` matches; `1234,5` does
/// not.
static NUMERIC_CELL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*"?-?\d{1,3}(?:,\d{3})*(?:\.\d+)?"?\s*$"#).unwrap()
});

/// Classify every column of `dataset` by inspecting at most `sample_size`
/// data rows.
///
/// The decision is single-match, not majority-vote: the first sampled cell
/// that looks like a formatted number marks the whole column [`Kind::Numeric`]
/// and later non-numeric cells do not revert it.
///
/// Empty cells carry no evidence. A column whose sampled cells are all empty,
/// or a dataset with no data rows at all, stays [`Kind::Text`].
pub fn classify(dataset: &Dataset, sample_size: usize) -> Vec<Kind> {
    let window = &dataset.records[..dataset.records.len().min(sample_size)];
    let mut kinds = vec![Kind::Text; dataset.column_count()];

    for (c, kind) in kinds.iter_mut().enumerate() {
        for record in window {
            let Some(value) = record.get(c) else { continue };
            if value.is_empty() {
                continue;
            }
            if NUMERIC_CELL.is_match(value) {
                *kind = Kind::Numeric;
                break;
            }
        }
    }

    kinds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(header: &[&str], rows: &[&[&str]]) -> Dataset {
        Dataset::new(
            header.iter().map(|s| s.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn empty_window_defaults_to_text() {
        let ds = dataset(&["A", "B"], &[&["", ""], &["", ""]]);
        assert_eq!(classify(&ds, 10), vec![Kind::Text, Kind::Text]);

        let no_rows = dataset(&["A", "B"], &[]);
        assert_eq!(classify(&no_rows, 10), vec![Kind::Text, Kind::Text]);
    }

    #[test]
    fn one_match_classifies_the_column_for_good() {
        // Row 3 is free text but rows 1 and 2 already matched.
        let ds = dataset(
            &["A"],
            &[&[" 1,000.00 "], &["2,000"], &["bad"]],
        );
        assert_eq!(classify(&ds, 10), vec![Kind::Numeric]);
    }

    #[test]
    fn quoted_negative_amounts_match() {
        let ds = dataset(&["A"], &[&["  \"-382,372.17\"  "]]);
        assert_eq!(classify(&ds, 10), vec![Kind::Numeric]);
    }

    #[test]
    fn free_text_stays_text() {
        let ds = dataset(
            &["A"],
            &[&["Planta Permanente"], &["12 de Octubre"], &["1234,5"]],
        );
        assert_eq!(classify(&ds, 10), vec![Kind::Text]);
    }

    #[test]
    fn rows_past_the_window_are_not_sampled() {
        let mut rows: Vec<Vec<String>> = vec![vec!["x".to_string()]; 10];
        rows.push(vec!["1,000".to_string()]);
        let ds = Dataset::new(vec!["A".to_string()], rows);
        assert_eq!(classify(&ds, 10), vec![Kind::Text]);
        assert_eq!(classify(&ds, 11), vec![Kind::Numeric]);
    }

    #[test]
    fn zero_sample_size_classifies_nothing() {
        let ds = dataset(&["A"], &[&["1,000"]]);
        assert_eq!(classify(&ds, 0), vec![Kind::Text]);
    }
}
