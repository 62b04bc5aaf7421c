use std::fs;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use super::model::Dataset;
use crate::error::{EtlError, Result};

// ---------------------------------------------------------------------------
// CSV reading
// ---------------------------------------------------------------------------

/// Parse a comma-delimited CSV file into a [`Dataset`].
///
/// The delimiter is fixed: the exports this pipeline ingests are always
/// comma-separated, values optionally wrapped in double quotes. A record
/// whose field count differs from the header is malformed input and fails
/// the parse; blank lines are skipped. A file with no content at all parses
/// to an empty dataset (the caller decides whether that is worth a warning).
pub fn read_csv(path: &Path) -> Result<Dataset> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => EtlError::FileNotFound(path.to_path_buf()),
        _ => EtlError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    if content.trim().is_empty() {
        return Ok(Dataset::default());
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(b',')
        .flexible(false)
        .from_reader(content.as_bytes());

    let header: Vec<String> = reader
        .headers()
        .map_err(|source| EtlError::Parse {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| EtlError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(record.iter().map(|v| v.to_string()).collect());
    }

    Ok(Dataset::new(header, records))
}

// ---------------------------------------------------------------------------
// CSV writing
// ---------------------------------------------------------------------------

/// Serialize a [`Dataset`] to `path`, header first, comma-delimited.
/// An existing file is overwritten.
pub fn write_csv(path: &Path, dataset: &Dataset) -> Result<()> {
    let write_err = |source: csv::Error| EtlError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = WriterBuilder::new()
        .delimiter(b',')
        .from_path(path)
        .map_err(write_err)?;

    writer.write_record(&dataset.header).map_err(write_err)?;
    for record in &dataset.records {
        writer.write_record(record).map_err(write_err)?;
    }
    writer.flush().map_err(|e| write_err(e.into()))
}
