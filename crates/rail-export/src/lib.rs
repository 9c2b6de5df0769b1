pub mod grid;
pub mod sheet;

pub use grid::{ExportCell, export_grid};
pub use sheet::{write_csv, write_csv_file, write_xlsx_file};
