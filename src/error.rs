use std::io;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// EtlError – everything that can abort a batch
// ---------------------------------------------------------------------------

/// Errors raised by the ETL core.
///
/// All of these are fatal: the batch loop stops at the first one and the
/// caller surfaces its message verbatim. Cleaned files written before the
/// failure stay on disk; a re-run overwrites them. An input with zero rows
/// is not in this list: it is logged and skipped.
#[derive(Debug, Error)]
pub enum EtlError {
    /// A required input path does not exist.
    #[error("input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Filesystem plumbing failed (reading a file, listing or creating a
    /// directory).
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed CSV content: unbalanced quotes, a record whose field count
    /// differs from the header, invalid UTF-8.
    #[error("{}: malformed CSV: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A spreadsheet could not be opened or read.
    #[error("{}: could not read workbook: {message}", .path.display())]
    Workbook { path: PathBuf, message: String },

    /// A merge input whose header differs from the first file's header.
    #[error("{}: header does not match the first merged file", .path.display())]
    SchemaMismatch {
        path: PathBuf,
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// No spreadsheet files were given to the batch.
    #[error("no spreadsheet files to process")]
    NoInputs,

    /// The merge step found nothing to merge.
    #[error("no cleaned files available to merge")]
    NoCleanFiles,

    /// An output file could not be written.
    #[error("{}: failed to write: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, EtlError>;
