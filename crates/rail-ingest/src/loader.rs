//! CSV loading and normalization of the reference table.
//!
//! Normalization order matters for filtering correctness: headers first,
//! then string coercion of the selector columns, then the denomination
//! display string, then nullable-integer coercion of the dimensions.

use std::path::Path;

use tracing::{debug, info};

use rail_model::{Dataset, RailError, Record, Result, columns};

/// Trim whitespace and a BOM from a header, collapsing inner runs of
/// whitespace to single spaces.
fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// The denomination display string keeps the authored cell verbatim,
/// whitespace included. Only a BOM is stripped.
fn raw_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').to_string()
}

/// Coerce a dimension cell to a nullable integer. Empty means "unknown"
/// (never zero); integral floats are accepted the way spreadsheet sources
/// author them ("350.0" is 350); anything else is a schema error.
fn parse_dimension(raw: &str, column: &str, line: usize) -> Result<Option<i64>> {
    if raw.is_empty() {
        return Ok(None);
    }
    if let Ok(value) = raw.parse::<i64>() {
        return Ok(Some(value));
    }
    if let Ok(value) = raw.parse::<f64>()
        && value.is_finite()
        && value.fract() == 0.0
        && value.abs() < i64::MAX as f64
    {
        return Ok(Some(value as i64));
    }
    Err(RailError::Schema {
        details: format!("non-numeric value {raw:?} in column {column:?} (line {line})"),
    })
}

struct ColumnIndex {
    curr: usize,
    currency: Option<usize>,
    io_module: usize,
    denomination: usize,
    emission: usize,
    rail_width: usize,
    rail_height: usize,
    note_width: usize,
    note_height: usize,
    rail_width_large: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &[String]) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let mut missing: Vec<&str> = columns::REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|name| find(name).is_none())
            .collect();
        if !missing.is_empty() {
            missing.sort_unstable();
            return Err(RailError::Schema {
                details: format!("missing required columns: {}", missing.join(", ")),
            });
        }
        // Required positions are guaranteed present by the check above.
        let required = |name: &str| -> Result<usize> {
            find(name).ok_or_else(|| RailError::Schema {
                details: format!("missing required columns: {name}"),
            })
        };
        Ok(Self {
            curr: required(columns::CURR)?,
            currency: find(columns::CURRENCY),
            io_module: required(columns::IO_MODULE)?,
            denomination: required(columns::DENOMINATION)?,
            emission: required(columns::EMISSION)?,
            rail_width: required(columns::RAIL_WIDTH)?,
            rail_height: required(columns::RAIL_HEIGHT)?,
            note_width: required(columns::NOTE_WIDTH)?,
            note_height: required(columns::NOTE_HEIGHT)?,
            rail_width_large: find(columns::RAIL_WIDTH_LARGE),
        })
    }
}

/// Read and normalize the reference table.
///
/// Fails with [`RailError::Schema`] when a required column is absent after
/// header trimming or a required numeric field holds non-numeric data.
/// Fully blank rows are skipped; extra columns are ignored.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|error| RailError::Message(format!("read csv {}: {error}", path.display())))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| RailError::Message(format!("read headers {}: {error}", path.display())))?
        .iter()
        .map(normalize_header)
        .collect();
    let index = ColumnIndex::from_headers(&headers)?;

    let mut records = Vec::new();
    for (row, raw) in reader.records().enumerate() {
        let raw = raw
            .map_err(|error| RailError::Message(format!("read row {}: {error}", path.display())))?;
        let cells: Vec<String> = raw.iter().map(normalize_cell).collect();
        if cells.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        // Header is line 1; first data row is line 2.
        let line = row + 2;
        let cell = |column: usize| cells.get(column).map(String::as_str).unwrap_or("");
        let optional_cell = |column: Option<usize>| column.map_or("", |column| cell(column));

        let currency_name = match optional_cell(index.currency) {
            "" => None,
            name => Some(name.to_string()),
        };
        records.push(Record {
            currency_code: cell(index.curr).to_string(),
            currency_name,
            io_module: cell(index.io_module).to_string(),
            denomination: raw.get(index.denomination).map_or_else(String::new, raw_cell),
            emission: cell(index.emission).to_string(),
            rail_width: parse_dimension(cell(index.rail_width), columns::RAIL_WIDTH, line)?,
            rail_height: parse_dimension(cell(index.rail_height), columns::RAIL_HEIGHT, line)?,
            note_width: parse_dimension(cell(index.note_width), columns::NOTE_WIDTH, line)?,
            note_height: parse_dimension(cell(index.note_height), columns::NOTE_HEIGHT, line)?,
            rail_width_large: parse_dimension(
                optional_cell(index.rail_width_large),
                columns::RAIL_WIDTH_LARGE,
                line,
            )?,
        });
        debug!(line, "loaded record");
    }

    let dataset = Dataset {
        records,
        has_currency_name: index.currency.is_some(),
        has_rail_width_large: index.rail_width_large.is_some(),
    };
    info!(
        path = %path.display(),
        record_count = dataset.len(),
        "reference dataset loaded"
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("Rail.csv");
        let mut file = std::fs::File::create(&path).expect("create fixture");
        file.write_all(contents.as_bytes()).expect("write fixture");
        (dir, path)
    }

    const FULL_HEADER: &str =
        "Curr,Currency,IO-Modul,Denomination,Emission,Rail width,Rail height,Note width,Note height,Rail width large";

    #[test]
    fn loads_and_normalizes_records() {
        let (_dir, path) = write_fixture(&format!(
            "{FULL_HEADER}\n EUR ,Euro,A1,50,2019,120,70,140,77,150\n"
        ));
        let dataset = load_dataset(&path).expect("load");
        assert_eq!(dataset.len(), 1);
        assert!(dataset.has_currency_name);
        assert!(dataset.has_rail_width_large);
        let record = &dataset.records[0];
        assert_eq!(record.currency_code, "EUR");
        assert_eq!(record.currency_name.as_deref(), Some("Euro"));
        assert_eq!(record.rail_width, Some(120));
        assert_eq!(record.rail_width_large, Some(150));
    }

    #[test]
    fn headers_are_trimmed_before_matching() {
        let (_dir, path) = write_fixture(
            " Curr ,IO-Modul , Denomination,Emission,Rail width,Rail height,Note width,Note height\nEUR,A1,50,2019,120,70,140,77\n",
        );
        let dataset = load_dataset(&path).expect("load");
        assert_eq!(dataset.len(), 1);
        assert!(!dataset.has_currency_name);
        assert!(!dataset.has_rail_width_large);
    }

    #[test]
    fn missing_columns_are_reported_sorted() {
        let (_dir, path) = write_fixture("Curr,Denomination,Rail width\nEUR,50,120\n");
        let error = load_dataset(&path).expect_err("schema error");
        match error {
            RailError::Schema { details } => {
                assert_eq!(
                    details,
                    "missing required columns: Emission, IO-Modul, Note height, Note width, Rail height"
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_numeric_dimension_is_a_schema_error() {
        let (_dir, path) = write_fixture(&format!(
            "{FULL_HEADER}\nEUR,Euro,A1,50,2019,wide,70,140,77,\n"
        ));
        let error = load_dataset(&path).expect_err("schema error");
        match error {
            RailError::Schema { details } => {
                assert!(details.contains("Rail width"), "details: {details}");
                assert!(details.contains("line 2"), "details: {details}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn blank_dimension_is_unknown_not_zero() {
        let (_dir, path) = write_fixture(&format!(
            "{FULL_HEADER}\nEUR,Euro,A1,50,2019,,70,140,77,\n"
        ));
        let dataset = load_dataset(&path).expect("load");
        assert_eq!(dataset.records[0].rail_width, None);
        assert_eq!(dataset.records[0].rail_width_large, None);
    }

    #[test]
    fn integral_float_cells_coerce_to_integers() {
        let (_dir, path) = write_fixture(&format!(
            "{FULL_HEADER}\nEUR,Euro,A1,50,2019,120.0,70,140,77,\n"
        ));
        let dataset = load_dataset(&path).expect("load");
        assert_eq!(dataset.records[0].rail_width, Some(120));
    }

    #[test]
    fn denomination_formatting_is_preserved() {
        let (_dir, path) = write_fixture(&format!(
            "{FULL_HEADER}\nEUR,Euro,A1,50.00,2019,120,70,140,77,\n"
        ));
        let dataset = load_dataset(&path).expect("load");
        assert_eq!(dataset.records[0].denomination, "50.00");
    }

    #[test]
    fn denomination_whitespace_is_kept_verbatim() {
        let (_dir, path) = write_fixture(&format!(
            "{FULL_HEADER}\n EUR ,Euro, A1 , 50 , 2019 ,120,70,140,77,\n"
        ));
        let dataset = load_dataset(&path).expect("load");
        let record = &dataset.records[0];
        // Selector columns trim; the denomination cell does not.
        assert_eq!(record.currency_code, "EUR");
        assert_eq!(record.io_module, "A1");
        assert_eq!(record.emission, "2019");
        assert_eq!(record.denomination, " 50 ");
    }

    #[test]
    fn blank_rows_are_skipped() {
        let (_dir, path) = write_fixture(&format!(
            "{FULL_HEADER}\nEUR,Euro,A1,50,2019,120,70,140,77,\n,,,,,,,,,\nUSD,Dollar,B2,5,2013,110,66,156,66,\n"
        ));
        let dataset = load_dataset(&path).expect("load");
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records[1].currency_code, "USD");
    }
}
