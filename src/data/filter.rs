use serde_json::{Map, Value};

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Row predicates
// ---------------------------------------------------------------------------

/// A row filter over the unified dataset.
///
/// These back the read-only views consumers ask for; they run on already
/// cleaned data and never re-run inference or normalization. A column name
/// that does not resolve against the header behaves as an empty cell.
#[derive(Debug, Clone)]
pub enum RowPredicate {
    /// Both cells equal after trimming surrounding whitespace.
    ColumnsEqual { left: String, right: String },
    /// The cell parses as a number and is strictly positive.
    PositiveNumber { column: String },
    /// The cell equals one of the given constants, verbatim.
    OneOf { column: String, values: Vec<String> },
}

impl RowPredicate {
    pub fn matches(&self, dataset: &Dataset, record: &[String]) -> bool {
        match self {
            RowPredicate::ColumnsEqual { left, right } => {
                cell(dataset, record, left).trim() == cell(dataset, record, right).trim()
            }
            RowPredicate::PositiveNumber { column } => cell(dataset, record, column)
                .trim()
                .parse::<f64>()
                .is_ok_and(|v| v > 0.0),
            RowPredicate::OneOf { column, values } => {
                let value = cell(dataset, record, column);
                values.iter().any(|v| v == value)
            }
        }
    }
}

fn cell<'a>(dataset: &Dataset, record: &'a [String], column: &str) -> &'a str {
    dataset
        .column_index(column)
        .and_then(|i| record.get(i))
        .map(String::as_str)
        .unwrap_or("")
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Keep the records matching `predicate` and project each onto a fixed field
/// list, as JSON objects.
///
/// Every output object carries exactly `fields`; a field missing from the
/// header comes back as an empty string, so consumers always see the same
/// shape regardless of which export the rows came from.
pub fn project(dataset: &Dataset, predicate: &RowPredicate, fields: &[&str]) -> Vec<Value> {
    dataset
        .records
        .iter()
        .filter(|record| predicate.matches(dataset, record))
        .map(|record| {
            let mut row = Map::new();
            for field in fields {
                row.insert(
                    (*field).to_string(),
                    Value::String(cell(dataset, record, field).to_string()),
                );
            }
            Value::Object(row)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Canonical settlement views
// ---------------------------------------------------------------------------

/// The fields every settlement view projects, in presentation order.
pub const SETTLEMENT_FIELDS: &[&str] = &[
    "NIVEL",
    "DESCAGENTE",
    "NRO_DOCUMENTO",
    "HAB_C_AP",
    "HAB_S_AP",
    "ASIG_FAM",
    "TOT_HAB",
    "RETENCIONES",
    "DESCUENTOS",
    "LIQUIDO",
    "CARGA_PATRONAL",
    "BRUTO_LEY7991",
    "PENSION_229_92",
    "LIQUIDO_LEY7991",
    "COSTO_LABORAL_01",
    "COSTO_LABORAL_02",
    "SUELDO_MANO",
    "SUELDO",
    "MONTO_ANTIGUEDAD",
    "DIAS_INASIST",
    "D_TRAB",
    "ApJubPer",
    "PLANTA",
    "ORGANISMO",
    "FUNCION",
    "AGRUPAMIENTO",
    "PERIODO_IMPUTADO",
    "PERIODO_LIQUIDADO",
    "NUMERO_CARGO",
    "NRO_REC",
    "FECHA_NACIMIENTO",
    "ESTADO_LIQUIDACION",
];

/// Rows whose imputed and settled periods coincide: the settlement is final,
/// not a correction being carried across months.
pub fn settled_period_view() -> RowPredicate {
    RowPredicate::ColumnsEqual {
        left: "PERIODO_IMPUTADO".to_string(),
        right: "PERIODO_LIQUIDADO".to_string(),
    }
}

/// Rows for workers in the resident categories.
pub fn residents_view() -> RowPredicate {
    RowPredicate::OneOf {
        column: "PLANTA".to_string(),
        values: vec![
            "Residentes".to_string(),
            "Residentes Nacionales".to_string(),
        ],
    }
}

/// Rows carrying a positive 100% contribution amount.
pub fn full_contribution_view() -> RowPredicate {
    RowPredicate::PositiveNumber {
        column: "AP100_090_54".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(header: &[&str], rows: &[&[&str]]) -> Dataset {
        Dataset::new(
            header.iter().map(|s| s.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn columns_equal_trims_before_comparing() {
        let ds = dataset(
            &["PERIODO_IMPUTADO", "PERIODO_LIQUIDADO"],
            &[
                &["2024-01 ", "2024-01"],
                &["2024-01", "2024-02"],
                &["", ""],
            ],
        );
        let view = settled_period_view();
        assert!(view.matches(&ds, &ds.records[0]));
        assert!(!view.matches(&ds, &ds.records[1]));
        // Two absent periods still count as equal, like the source data does.
        assert!(view.matches(&ds, &ds.records[2]));
    }

    #[test]
    fn positive_number_rejects_text_and_non_positive() {
        let ds = dataset(
            &["AP100_090_54"],
            &[&["123.45"], &["0"], &["-5"], &[""], &["n/a"]],
        );
        let view = full_contribution_view();
        let matches: Vec<bool> = ds
            .records
            .iter()
            .map(|r| view.matches(&ds, r))
            .collect();
        assert_eq!(matches, vec![true, false, false, false, false]);
    }

    #[test]
    fn one_of_is_verbatim_membership() {
        let ds = dataset(
            &["PLANTA"],
            &[
                &["Residentes"],
                &["Residentes Nacionales"],
                &["Planta Permanente"],
                &["residentes"],
            ],
        );
        let view = residents_view();
        let matches: Vec<bool> = ds
            .records
            .iter()
            .map(|r| view.matches(&ds, r))
            .collect();
        assert_eq!(matches, vec![true, true, false, false]);
    }

    #[test]
    fn projection_has_a_fixed_shape() {
        let ds = dataset(
            &["PLANTA", "LIQUIDO"],
            &[&["Residentes", "1000.00"], &["Planta Permanente", "900.00"]],
        );

        let rows = project(&ds, &residents_view(), &["LIQUIDO", "SUELDO"]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["LIQUIDO"], "1000.00");
        // Field absent from the header still appears, empty.
        assert_eq!(rows[0]["SUELDO"], "");
        assert_eq!(rows[0].as_object().unwrap().len(), 2);
    }
}
