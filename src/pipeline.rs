use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::config::EtlConfig;
use crate::data::{cleaner, convert, loader, merger};
use crate::error::{EtlError, Result};

// ---------------------------------------------------------------------------
// Batch orchestration
// ---------------------------------------------------------------------------

/// How a run treated the downstream load step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Unified file produced for review only.
    Audit,
    /// Unified file handed over to the loader.
    Load,
}

/// What a completed run produced.
#[derive(Debug)]
pub struct EtlSummary {
    /// Cleaned files written by this run, in processing order.
    pub cleaned: Vec<PathBuf>,
    /// The unified output file.
    pub unified: PathBuf,
    /// Data rows in the unified output (header excluded).
    pub data_rows: usize,
    pub mode: RunMode,
}

/// Run the whole batch over an explicit, ordered list of workbook files.
///
/// Strictly sequential and fail-fast: each workbook is fully converted and
/// cleaned before the next one starts, and the first error aborts the run.
/// Cleaned files already written stay on disk as a byproduct, not a
/// checkpoint; a re-run processes everything again and overwrites them.
pub fn run(config: &EtlConfig, workbooks: &[PathBuf]) -> Result<EtlSummary> {
    if workbooks.is_empty() {
        return Err(EtlError::NoInputs);
    }

    info!("starting ETL batch over {} workbook(s)", workbooks.len());

    fs::create_dir_all(&config.csv_dir).map_err(|source| EtlError::Io {
        path: config.csv_dir.clone(),
        source,
    })?;
    fs::create_dir_all(&config.output_dir).map_err(|source| EtlError::Io {
        path: config.output_dir.clone(),
        source,
    })?;

    let spec = config.cleaning_spec();
    let mut cleaned = Vec::new();
    for workbook in workbooks {
        let raw_csv = convert::convert_workbook(workbook, &config.csv_dir)?;
        if let Some(path) = cleaner::clean_file(&raw_csv, &spec, config.sample_size)? {
            cleaned.push(path);
        }
    }

    // Merge every cleaned file in the conversion directory, not just this
    // run's output: inputs dropped there by earlier runs are part of the
    // batch until the operator removes them.
    let merge_inputs = discover_cleaned(&config.csv_dir)?;
    let unified = merger::merge_files(&merge_inputs)?;

    let output = config.output_dir.join(&config.unified_name);
    loader::write_csv(&output, &unified)?;
    info!("unified {} data row(s) into {}", unified.len(), output.display());

    let mode = if config.load_enabled {
        RunMode::Load
    } else {
        RunMode::Audit
    };

    Ok(EtlSummary {
        cleaned,
        unified: output,
        data_rows: unified.len(),
        mode,
    })
}

/// List the cleaned CSV files in `dir`, in directory order.
///
/// Directory order is whatever the OS returns, not contractually sorted.
/// Callers that need a specific merge order must sort the result.
pub fn discover_cleaned(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(|source| EtlError::Io {
        path: dir.to_path_buf(),
        source,
    })? {
        let entry = entry.map_err(|source| EtlError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        let is_cleaned = path
            .file_stem()
            .and_then(OsStr::to_str)
            .is_some_and(|stem| stem.ends_with(cleaner::CLEAN_SUFFIX));
        if is_cleaned && path.extension().and_then(OsStr::to_str) == Some("csv") {
            paths.push(path);
        }
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_workbook_list_is_fatal() {
        let config = EtlConfig::default();
        match run(&config, &[]) {
            Err(EtlError::NoInputs) => {}
            other => panic!("expected NoInputs, got {other:?}"),
        }
    }

    #[test]
    fn discovery_only_picks_cleaned_csvs() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "enero.csv",
            "enero_limpio.csv",
            "febrero_limpio.csv",
            "notas_limpio.txt",
            "resumen.xlsx",
        ] {
            fs::write(dir.path().join(name), "A\n1\n").unwrap();
        }

        let mut found: Vec<String> = discover_cleaned(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        found.sort();
        assert_eq!(found, vec!["enero_limpio.csv", "febrero_limpio.csv"]);
    }
}
