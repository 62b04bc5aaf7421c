use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::data::model::CleaningSpec;
use crate::data::sampler;

// ---------------------------------------------------------------------------
// Batch configuration
// ---------------------------------------------------------------------------

/// Text columns known to carry trailing padding in the source exports.
pub const DEFAULT_TRIM_COLUMNS: &[&str] = &[
    "NIVEL",
    "DESCAGENTE",
    "PLANTA",
    "ORGANISMO",
    "FUNCION",
    "AGRUPAMIENTO",
    "OB_ALTA",
    "OB_BAJA",
    "AREA",
    "SEXO",
    "TIT_EDUCATIVO",
    "AREA_TEMATICA",
    "DURACION",
    "ESTADO_LIQUIDACION",
];

/// Configuration for one ETL run.
///
/// The defaults mirror the directory layout the exports arrive in; a JSON
/// file can override any subset of fields:
///
/// ```json
/// { "excel_dir": "drops/2024", "load_enabled": true }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EtlConfig {
    /// Directory holding the raw spreadsheet exports.
    pub excel_dir: PathBuf,
    /// Directory receiving converted and cleaned CSV files.
    pub csv_dir: PathBuf,
    /// Directory receiving the unified output.
    pub output_dir: PathBuf,
    /// File name of the unified output.
    pub unified_name: String,
    /// Columns whose cells get their trailing whitespace trimmed.
    pub trim_columns: Vec<String>,
    /// Data rows inspected per column during type detection.
    pub sample_size: usize,
    /// Whether the downstream load step runs after unification. Off means
    /// audit mode: the unified file is produced for review only.
    pub load_enabled: bool,
}

impl Default for EtlConfig {
    fn default() -> Self {
        EtlConfig {
            excel_dir: PathBuf::from("excel-a-convertir"),
            csv_dir: PathBuf::from("csv-convertido"),
            output_dir: PathBuf::from("csv-unidos"),
            unified_name: "liquidaciones_unificadas.csv".to_string(),
            trim_columns: DEFAULT_TRIM_COLUMNS.iter().map(|s| s.to_string()).collect(),
            sample_size: sampler::DEFAULT_SAMPLE_SIZE,
            load_enabled: false,
        }
    }
}

impl EtlConfig {
    /// Load a configuration from a JSON file; absent fields keep their
    /// defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// The trim list as a [`CleaningSpec`].
    pub fn cleaning_spec(&self) -> CleaningSpec {
        CleaningSpec::new(self.trim_columns.iter().cloned())
    }
}
