use crate::columns;
use crate::record::Record;

/// The loaded reference table. Immutable after construction; shared
/// read-only (via `Arc`) across every filter invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    /// Records in original load order. Filtering never re-sorts them.
    pub records: Vec<Record>,
    /// Whether the source carried the optional `Currency` column.
    pub has_currency_name: bool,
    /// Whether the source carried the optional `Rail width large` column.
    pub has_rail_width_large: bool,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Export/display columns actually present in the source, in the
    /// contract order.
    pub fn export_columns(&self) -> Vec<&'static str> {
        columns::EXPORT_COLUMNS
            .iter()
            .copied()
            .filter(|&column| column != columns::CURRENCY || self.has_currency_name)
            .collect()
    }
}
