mod config;
mod data;
mod error;
mod pipeline;

use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use config::EtlConfig;
use data::{filter, loader};
use pipeline::RunMode;

fn main() -> Result<()> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => EtlConfig::from_file(Path::new(&path))?,
        None => EtlConfig::default(),
    };

    let workbooks = discover_workbooks(&config.excel_dir)
        .with_context(|| format!("listing {}", config.excel_dir.display()))?;
    info!(
        "found {} workbook(s) in {}",
        workbooks.len(),
        config.excel_dir.display()
    );

    let summary = pipeline::run(&config, &workbooks)?;
    info!("cleaned {} file(s) this run", summary.cleaned.len());

    match summary.mode {
        RunMode::Load => info!(
            "run complete: {} data row(s) ready for load at {}",
            summary.data_rows,
            summary.unified.display()
        ),
        RunMode::Audit => {
            info!(
                "run complete in audit mode: review {} ({} data row(s))",
                summary.unified.display(),
                summary.data_rows
            );
            report_views(&summary.unified)?;
        }
    }

    Ok(())
}

/// Log how many rows each canonical settlement view would serve, so an
/// audit run can be checked against the source system without standing up
/// the serving layer.
fn report_views(unified: &Path) -> Result<()> {
    let dataset = loader::read_csv(unified)?;
    let views = [
        ("settled-period", filter::settled_period_view()),
        ("residents", filter::residents_view()),
        ("full-contribution", filter::full_contribution_view()),
    ];
    for (name, view) in views {
        let rows = filter::project(&dataset, &view, filter::SETTLEMENT_FIELDS);
        info!("view {name}: {} row(s)", rows.len());
    }
    Ok(())
}

/// Spreadsheet exports in `dir`, in directory order.
fn discover_workbooks(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let ext = path
            .extension()
            .and_then(OsStr::to_str)
            .map(|e| e.to_ascii_lowercase());
        if matches!(ext.as_deref(), Some("xlsx") | Some("xls")) {
            files.push(path);
        }
    }
    Ok(files)
}
