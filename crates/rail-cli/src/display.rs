//! Terminal rendering of the specification panel, option lists, and the
//! matching-rows table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rail_export::{ExportCell, export_grid};
use rail_filter::Cascade;
use rail_model::{Dataset, Record};

/// Render the full panel: active selection, KPI specification of the first
/// match, and the matching rows.
pub fn print_panel(dataset: &Dataset, cascade: &Cascade) {
    print_chips(cascade);
    println!();
    match cascade.first_match(dataset) {
        None => println!("No matching data found. Try another Emission or Denomination."),
        Some(record) => print_specs(dataset, record),
    }
    println!();
    print_matches(dataset, cascade);
}

fn print_chips(cascade: &Cascade) {
    let resolved = &cascade.resolved;
    let chip = |value: &Option<String>| value.as_deref().unwrap_or("-").to_string();
    println!(
        "Currency: {} | IO: {} | Denom: {} | Emission: {}",
        chip(&resolved.currency),
        chip(&resolved.io_module),
        chip(&resolved.denomination),
        chip(&resolved.emission),
    );
}

fn print_specs(dataset: &Dataset, record: &Record) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rail width"),
        header_cell("Rail height"),
        header_cell("Note width"),
        header_cell("Note height"),
    ]);
    apply_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Center);
    }
    table.add_row(vec![
        kpi_cell(record.rail_width),
        kpi_cell(record.rail_height),
        kpi_cell(record.note_width),
        kpi_cell(record.note_height),
    ]);
    println!("Specifications");
    println!("{table}");
    if dataset.has_rail_width_large
        && let Some(value) = record.rail_width_large
    {
        println!("Rail width (large): {value}");
    }
}

fn print_matches(dataset: &Dataset, cascade: &Cascade) {
    println!("Matching row(s)");
    if cascade.has_no_match() {
        println!("No rows to display for the current selection.");
        return;
    }
    let (header, rows) = export_grid(dataset, &cascade.matches);
    let mut table = Table::new();
    table.set_header(header.iter().map(|name| header_cell(name)).collect::<Vec<_>>());
    apply_table_style(&mut table);
    for row in rows {
        table.add_row(row.iter().map(data_cell).collect::<Vec<_>>());
    }
    println!("{table}");
}

/// One row per cascade step: position, resolved value, valid options.
pub fn print_options(cascade: &Cascade) {
    let resolved = &cascade.resolved;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Step"),
        header_cell("Selected"),
        header_cell("Options"),
    ]);
    apply_table_style(&mut table);
    let steps = [
        ("1. Currency", &resolved.currency, &cascade.currency_options),
        ("2. IO Module", &resolved.io_module, &cascade.io_options),
        (
            "3. Denomination",
            &resolved.denomination,
            &cascade.denomination_options,
        ),
        ("4. Emission", &resolved.emission, &cascade.emission_options),
    ];
    for (step, selected, options) in steps {
        table.add_row(vec![
            Cell::new(step).fg(Color::Blue),
            match selected {
                Some(value) => Cell::new(value).add_attribute(Attribute::Bold),
                None => dim_cell("-"),
            },
            if options.is_empty() {
                dim_cell("(none)")
            } else {
                Cell::new(options.join(", "))
            },
        ]);
    }
    println!("{table}");
}

pub fn print_share_ref(reference: &str) {
    println!("Tip: share this reference to keep these selections.");
    println!("  {reference}");
}

fn data_cell(cell: &ExportCell) -> Cell {
    match cell {
        ExportCell::Text(value) => Cell::new(value),
        ExportCell::Integer(value) => Cell::new(value),
        ExportCell::Empty => dim_cell("-"),
    }
}

fn kpi_cell(value: Option<i64>) -> Cell {
    match value {
        Some(value) => Cell::new(value).add_attribute(Attribute::Bold),
        None => dim_cell("-"),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
