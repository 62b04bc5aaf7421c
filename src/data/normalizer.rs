use super::model::{CleaningSpec, Kind};

// ---------------------------------------------------------------------------
// Per-cell normalization
// ---------------------------------------------------------------------------

/// Rewrite one cell according to its column's classification and the
/// caller-supplied trim list.
///
/// Two independent transforms compose, in this order:
///
/// 1. **Named trim** – if the column's name is in `spec`, trailing
///    whitespace goes away. Leading whitespace is never touched:
///    left-padded codes must survive as-is.
/// 2. **Numeric denormalization** – if the column was classified
///    [`Kind::Numeric`], every quote and every thousands-separator comma is
///    removed, then surrounding whitespace is trimmed. The transform is
///    purely textual and never checks that the result parses as a number.
///
/// Cells outside both cases pass through byte-identical, internal whitespace
/// included. The function is idempotent: feeding its output back in changes
/// nothing.
pub fn normalize_cell(
    value: &str,
    index: usize,
    name: &str,
    kinds: &[Kind],
    spec: &CleaningSpec,
) -> String {
    let mut out = if spec.contains(name) {
        value.trim_end().to_string()
    } else {
        value.to_string()
    };

    if kinds.get(index) == Some(&Kind::Numeric) {
        out.retain(|ch| ch != '"' && ch != ',');
        out = out.trim().to_string();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_TRIM: &[&str] = &[];

    fn normalize(value: &str, kind: Kind, trim: &[&str]) -> String {
        let spec = CleaningSpec::new(trim.iter().copied());
        normalize_cell(value, 0, "COL", &[kind], &spec)
    }

    #[test]
    fn named_trim_keeps_leading_whitespace() {
        assert_eq!(normalize("  abc  ", Kind::Text, &["COL"]), "  abc");
    }

    #[test]
    fn named_trim_ignores_other_columns() {
        assert_eq!(normalize("  abc  ", Kind::Text, &["OTHER"]), "  abc  ");
    }

    #[test]
    fn numeric_denormalization() {
        assert_eq!(
            normalize("  \"-382,372.17\"  ", Kind::Numeric, NO_TRIM),
            "-382372.17"
        );
        assert_eq!(normalize(" 1,000.00 ", Kind::Numeric, NO_TRIM), "1000.00");
    }

    #[test]
    fn numeric_transform_does_not_validate() {
        // "bad" sits in a column classified Numeric; it passes through the
        // same textual transform and comes out unchanged.
        assert_eq!(normalize("bad", Kind::Numeric, NO_TRIM), "bad");
    }

    #[test]
    fn untouched_cells_pass_through_exactly() {
        assert_eq!(normalize(" a  b ", Kind::Text, NO_TRIM), " a  b ");
        assert_eq!(normalize("", Kind::Text, NO_TRIM), "");
    }

    #[test]
    fn both_transforms_compose() {
        // Trim list and Numeric classification on the same column.
        assert_eq!(
            normalize(" \"2,000\" ", Kind::Numeric, &["COL"]),
            "2000"
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        let cases = [
            ("  \"-382,372.17\"  ", Kind::Numeric),
            (" 1,000.00 ", Kind::Numeric),
            ("bad", Kind::Numeric),
            ("  abc  ", Kind::Text),
            ("", Kind::Text),
            ("", Kind::Numeric),
        ];
        for (value, kind) in cases {
            for trim in [NO_TRIM, &["COL"][..]] {
                let once = normalize(value, kind, trim);
                let twice = normalize(&once, kind, trim);
                assert_eq!(once, twice, "not idempotent for {value:?}");
            }
        }
    }
}
