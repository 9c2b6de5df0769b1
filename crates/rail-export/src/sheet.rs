//! Spreadsheet writers for the matching-rows table.

use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use tracing::info;

use rail_model::{Dataset, RailError, Result};

use crate::grid::{ExportCell, export_grid};

/// Write the matching rows as CSV to any writer.
pub fn write_csv<W: Write>(dataset: &Dataset, matches: &[usize], writer: W) -> Result<()> {
    let (header, rows) = export_grid(dataset, matches);
    let mut writer = csv::Writer::from_writer(writer);
    writer
        .write_record(&header)
        .map_err(|error| RailError::Message(format!("write csv header: {error}")))?;
    for row in rows {
        writer
            .write_record(row.iter().map(ExportCell::to_field))
            .map_err(|error| RailError::Message(format!("write csv row: {error}")))?;
    }
    writer
        .flush()
        .map_err(|error| RailError::Message(format!("flush csv: {error}")))?;
    Ok(())
}

/// Write the matching rows as a CSV file.
pub fn write_csv_file(dataset: &Dataset, matches: &[usize], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(dataset, matches, file)?;
    info!(path = %path.display(), row_count = matches.len(), "csv export written");
    Ok(())
}

/// Write the matching rows as a single-sheet XLSX workbook.
pub fn write_xlsx_file(dataset: &Dataset, matches: &[usize], path: &Path) -> Result<()> {
    let (header, rows) = export_grid(dataset, matches);
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Rail specs")
        .map_err(xlsx_error)?;
    for (column, name) in header.iter().enumerate() {
        worksheet
            .write_string_with_format(0, cast_column(column)?, *name, &bold)
            .map_err(xlsx_error)?;
    }
    for (row_index, row) in rows.iter().enumerate() {
        let sheet_row = cast_row(row_index + 1)?;
        for (column, cell) in row.iter().enumerate() {
            let sheet_column = cast_column(column)?;
            match cell {
                ExportCell::Text(value) => {
                    worksheet
                        .write_string(sheet_row, sheet_column, value)
                        .map_err(xlsx_error)?;
                }
                // Integer-valued; never written with a decimal format.
                ExportCell::Integer(value) => {
                    worksheet
                        .write_number(sheet_row, sheet_column, *value as f64)
                        .map_err(xlsx_error)?;
                }
                ExportCell::Empty => {}
            }
        }
    }
    workbook.save(path).map_err(xlsx_error)?;
    info!(path = %path.display(), row_count = matches.len(), "xlsx export written");
    Ok(())
}

fn cast_row(value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| RailError::Message(format!("row index overflow: {value}")))
}

fn cast_column(value: usize) -> Result<u16> {
    u16::try_from(value).map_err(|_| RailError::Message(format!("column index overflow: {value}")))
}

fn xlsx_error(error: XlsxError) -> RailError {
    RailError::Message(format!("xlsx write error: {error}"))
}
