use std::path::{Path, PathBuf};

use log::{info, warn};

use super::model::{CleaningSpec, Dataset, Kind};
use super::{loader, normalizer, sampler};
use crate::error::Result;

// ---------------------------------------------------------------------------
// Dataset cleaning
// ---------------------------------------------------------------------------

/// Suffix appended to a file stem to mark its cleaned counterpart
/// (`datos.csv` → `datos_limpio.csv`).
pub const CLEAN_SUFFIX: &str = "_limpio";

/// Clean one parsed dataset: classify its columns once, then rewrite every
/// data cell.
///
/// The header row is a set of fixed labels, not data, and passes through
/// verbatim. A new dataset is returned; the parsed input is not modified.
pub fn clean(dataset: &Dataset, spec: &CleaningSpec, sample_size: usize) -> Dataset {
    let kinds = sampler::classify(dataset, sample_size);

    let numeric: Vec<usize> = kinds
        .iter()
        .enumerate()
        .filter(|(_, k)| **k == Kind::Numeric)
        .map(|(c, _)| c)
        .collect();
    info!("numeric columns detected: {numeric:?}");

    let records = dataset
        .records
        .iter()
        .map(|record| {
            record
                .iter()
                .enumerate()
                .map(|(c, value)| {
                    let name = dataset.header.get(c).map(String::as_str).unwrap_or_default();
                    normalizer::normalize_cell(value, c, name, &kinds, spec)
                })
                .collect()
        })
        .collect();

    Dataset::new(dataset.header.clone(), records)
}

/// File-to-file cleaning step: parse `input`, clean it, and write the result
/// next to it as `<stem>_limpio.<ext>`. Returns the path written.
///
/// A file with no rows at all is logged and skipped (`Ok(None)`) so one
/// empty export does not fail the whole batch. The input file is never
/// modified; re-running overwrites the cleaned output in place.
pub fn clean_file(input: &Path, spec: &CleaningSpec, sample_size: usize) -> Result<Option<PathBuf>> {
    info!("cleaning {}", input.display());

    let dataset = loader::read_csv(input)?;
    if dataset.header.is_empty() && dataset.is_empty() {
        warn!("{}: file is empty, nothing to clean", input.display());
        return Ok(None);
    }

    let cleaned = clean(&dataset, spec, sample_size);
    let output = cleaned_path(input);
    loader::write_csv(&output, &cleaned)?;

    info!(
        "cleaned {} record(s) into {}",
        cleaned.len(),
        output.display()
    );
    Ok(Some(output))
}

/// Derive the cleaned-output path for an input file.
pub fn cleaned_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let name = match input.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}{CLEAN_SUFFIX}.{ext}"),
        None => format!("{stem}{CLEAN_SUFFIX}"),
    };
    input.with_file_name(name)
}
