use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Reader};
use log::info;

use crate::error::{EtlError, Result};

// ---------------------------------------------------------------------------
// Spreadsheet → CSV conversion
// ---------------------------------------------------------------------------

/// Convert the first sheet of an Excel workbook to a comma-delimited CSV in
/// `output_dir`, returning the path of the file written.
///
/// This is a thin wrapper around the spreadsheet library: cells are rendered
/// with their default display formatting and written out as-is. All the
/// interesting work happens downstream, on the CSV.
pub fn convert_workbook(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    if !input.is_file() {
        return Err(EtlError::FileNotFound(input.to_path_buf()));
    }

    info!("converting {}", input.display());

    let workbook_err = |message: String| EtlError::Workbook {
        path: input.to_path_buf(),
        message,
    };

    let mut workbook = open_workbook_auto(input).map_err(|e| workbook_err(e.to_string()))?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| workbook_err("workbook has no sheets".to_string()))?;
    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| workbook_err(e.to_string()))?;

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let output = output_dir.join(format!("{stem}.csv"));

    let write_err = |source: csv::Error| EtlError::Write {
        path: output.clone(),
        source,
    };
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b',')
        .from_path(&output)
        .map_err(write_err)?;

    for row in range.rows() {
        let record: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
        writer.write_record(&record).map_err(write_err)?;
    }
    writer.flush().map_err(|e| write_err(e.into()))?;

    info!("wrote {}", output.display());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_workbook_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("nope.xlsx");
        match convert_workbook(&input, dir.path()) {
            Err(EtlError::FileNotFound(p)) => assert_eq!(p, input),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn garbage_workbook_is_a_workbook_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.xlsx");
        std::fs::write(&input, "not a zip archive").unwrap();
        match convert_workbook(&input, dir.path()) {
            Err(EtlError::Workbook { .. }) => {}
            other => panic!("expected Workbook error, got {other:?}"),
        }
    }
}
