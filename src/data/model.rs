use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Kind – inferred column type
// ---------------------------------------------------------------------------

/// The inferred type of a column, used to pick which normalization applies
/// to its cells. Inference is per-dataset: the same column name may come out
/// differently across input files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Kind {
    #[default]
    Text,
    Numeric,
}

// ---------------------------------------------------------------------------
// CleaningSpec – columns that need trailing-whitespace trimming
// ---------------------------------------------------------------------------

/// Column names whose cells get their trailing whitespace removed,
/// independent of the inferred [`Kind`].
///
/// Supplied by the caller, never inferred. Names must match the header
/// exactly (case- and accent-sensitive); a name that matches nothing is
/// simply ignored.
#[derive(Debug, Clone, Default)]
pub struct CleaningSpec {
    names: BTreeSet<String>,
}

impl CleaningSpec {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CleaningSpec {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

// ---------------------------------------------------------------------------
// Dataset – one parsed CSV file
// ---------------------------------------------------------------------------

/// An ordered header plus the data records below it.
///
/// Invariant: every record has exactly `header.len()` fields. The loader
/// rejects files where that does not hold, so downstream code can index
/// records by column position without checking.
///
/// Header names are not required to be unique; positional access is the
/// primary identity of a column, name lookup resolves to the first match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub header: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(header: Vec<String>, records: Vec<Vec<String>>) -> Self {
        Dataset { header, records }
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Number of data records (the header does not count).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no data records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve a column name to its position, first match wins.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_index_resolves_first_match() {
        let ds = Dataset::new(
            vec!["A".into(), "B".into(), "A".into()],
            vec![vec!["1".into(), "2".into(), "3".into()]],
        );
        assert_eq!(ds.column_index("A"), Some(0));
        assert_eq!(ds.column_index("B"), Some(1));
        assert_eq!(ds.column_index("C"), None);
    }

    #[test]
    fn cleaning_spec_is_exact_match() {
        let spec = CleaningSpec::new(["PLANTA", "NIVEL"]);
        assert!(spec.contains("PLANTA"));
        assert!(!spec.contains("planta"));
        assert!(!spec.contains("PLANTA "));
    }
}
