//! Cell grid shared by the CSV writer, the XLSX writer, and the terminal
//! table: matching rows only, columns limited to those present in the
//! source, in the contract order, no index column.

use rail_model::{Dataset, Record, columns};

/// One typed output cell. Integers stay integers all the way to the file
/// so a width of 350 never becomes "350.0".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportCell {
    Text(String),
    Integer(i64),
    /// Unknown dimension; exported as an empty cell, displayed as "-".
    Empty,
}

impl ExportCell {
    pub fn to_field(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Integer(value) => value.to_string(),
            Self::Empty => String::new(),
        }
    }
}

fn dimension_cell(value: Option<i64>) -> ExportCell {
    value.map_or(ExportCell::Empty, ExportCell::Integer)
}

fn cell_for(record: &Record, column: &str) -> ExportCell {
    match column {
        columns::CURR => ExportCell::Text(record.currency_code.clone()),
        columns::CURRENCY => record
            .currency_name
            .clone()
            .map_or(ExportCell::Empty, ExportCell::Text),
        columns::IO_MODULE => ExportCell::Text(record.io_module.clone()),
        columns::DENOMINATION => ExportCell::Text(record.denomination.clone()),
        columns::EMISSION => ExportCell::Text(record.emission.clone()),
        columns::RAIL_WIDTH => dimension_cell(record.rail_width),
        columns::RAIL_HEIGHT => dimension_cell(record.rail_height),
        columns::NOTE_WIDTH => dimension_cell(record.note_width),
        columns::NOTE_HEIGHT => dimension_cell(record.note_height),
        _ => ExportCell::Empty,
    }
}

/// Build the export grid for the given match indices (original load
/// order). Indices out of range are skipped.
pub fn export_grid(
    dataset: &Dataset,
    matches: &[usize],
) -> (Vec<&'static str>, Vec<Vec<ExportCell>>) {
    let header = dataset.export_columns();
    let rows = matches
        .iter()
        .filter_map(|&index| dataset.records.get(index))
        .map(|record| {
            header
                .iter()
                .map(|&column| cell_for(record, column))
                .collect()
        })
        .collect();
    (header, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset {
            records: vec![Record {
                currency_code: "EUR".to_string(),
                currency_name: Some("Euro".to_string()),
                io_module: "A1".to_string(),
                denomination: "50".to_string(),
                emission: "2019".to_string(),
                rail_width: Some(350),
                rail_height: Some(70),
                note_width: None,
                note_height: Some(77),
                rail_width_large: Some(400),
            }],
            has_currency_name: true,
            has_rail_width_large: true,
        }
    }

    #[test]
    fn grid_follows_contract_column_order() {
        let dataset = dataset();
        let (header, rows) = export_grid(&dataset, &[0]);
        assert_eq!(
            header,
            vec![
                "Curr",
                "Currency",
                "IO-Modul",
                "Denomination",
                "Emission",
                "Rail width",
                "Rail height",
                "Note width",
                "Note height",
            ]
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], ExportCell::Text("EUR".to_string()));
        assert_eq!(rows[0][5], ExportCell::Integer(350));
        assert_eq!(rows[0][7], ExportCell::Empty);
    }

    #[test]
    fn integers_render_without_decimal_point() {
        assert_eq!(ExportCell::Integer(350).to_field(), "350");
        assert_eq!(ExportCell::Empty.to_field(), "");
    }

    #[test]
    fn out_of_range_indices_are_skipped() {
        let dataset = dataset();
        let (_, rows) = export_grid(&dataset, &[0, 7]);
        assert_eq!(rows.len(), 1);
    }
}
