use std::path::PathBuf;

use log::{info, warn};

use super::loader;
use super::model::Dataset;
use crate::error::{EtlError, Result};

// ---------------------------------------------------------------------------
// Multi-file merge
// ---------------------------------------------------------------------------

/// Concatenate previously cleaned files into one unified dataset.
///
/// The list is taken as-is: the orchestrator passes whatever the directory
/// scan produced, and that order is not contractually sorted. Callers that
/// need a specific row order must sort the paths themselves.
///
/// The first non-empty file's header becomes the unified header, and every
/// later file must carry exactly the same one; the first divergence aborts
/// the merge with [`EtlError::SchemaMismatch`]. Files that parse to nothing
/// are skipped with a warning. An empty input list, or a list where every
/// file is empty, fails with [`EtlError::NoCleanFiles`].
pub fn merge_files(paths: &[PathBuf]) -> Result<Dataset> {
    if paths.is_empty() {
        return Err(EtlError::NoCleanFiles);
    }

    info!("merging {} cleaned file(s)", paths.len());

    let mut unified: Option<Dataset> = None;
    for path in paths {
        let dataset = loader::read_csv(path)?;
        if dataset.header.is_empty() && dataset.is_empty() {
            warn!("{}: empty cleaned file, skipped", path.display());
            continue;
        }

        match unified.as_mut() {
            None => unified = Some(dataset),
            Some(u) => {
                if dataset.header != u.header {
                    return Err(EtlError::SchemaMismatch {
                        path: path.clone(),
                        expected: u.header.clone(),
                        found: dataset.header,
                    });
                }
                u.records.extend(dataset.records);
            }
        }
    }

    unified.ok_or(EtlError::NoCleanFiles)
}
