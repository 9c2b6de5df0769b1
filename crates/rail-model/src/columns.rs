//! Column names of the reference table, as authored in the source file.
//!
//! Header matching happens after whitespace trimming; extra columns in the
//! source are ignored.

/// Currency code (e.g. "EUR").
pub const CURR: &str = "Curr";
/// Optional display name of the currency.
pub const CURRENCY: &str = "Currency";
/// IO module identifier.
pub const IO_MODULE: &str = "IO-Modul";
/// Denomination label, kept verbatim for filtering and display.
pub const DENOMINATION: &str = "Denomination";
/// Emission (print series/year).
pub const EMISSION: &str = "Emission";
pub const RAIL_WIDTH: &str = "Rail width";
pub const RAIL_HEIGHT: &str = "Rail height";
pub const NOTE_WIDTH: &str = "Note width";
pub const NOTE_HEIGHT: &str = "Note height";
/// Optional supplementary rail width.
pub const RAIL_WIDTH_LARGE: &str = "Rail width large";

/// Columns that must exist after header normalization.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    CURR,
    IO_MODULE,
    DENOMINATION,
    EMISSION,
    RAIL_WIDTH,
    RAIL_HEIGHT,
    NOTE_WIDTH,
    NOTE_HEIGHT,
];

/// Export column order. Columns absent from the source are skipped, the
/// relative order of the rest is fixed.
pub const EXPORT_COLUMNS: [&str; 9] = [
    CURR,
    CURRENCY,
    IO_MODULE,
    DENOMINATION,
    EMISSION,
    RAIL_WIDTH,
    RAIL_HEIGHT,
    NOTE_WIDTH,
    NOTE_HEIGHT,
];
