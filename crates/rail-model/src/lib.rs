pub mod columns;
pub mod dataset;
pub mod error;
pub mod record;
pub mod selection;

pub use columns::{EXPORT_COLUMNS, REQUIRED_COLUMNS};
pub use dataset::Dataset;
pub use error::{RailError, Result};
pub use record::Record;
pub use selection::{SelectionPatch, SelectionState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_state_serializes() {
        let state = SelectionState {
            currency: Some("EUR".to_string()),
            io_module: Some("A1".to_string()),
            denomination: Some("50".to_string()),
            emission: None,
        };
        let json = serde_json::to_string(&state).expect("serialize state");
        let round: SelectionState = serde_json::from_str(&json).expect("deserialize state");
        assert_eq!(round, state);
    }

    #[test]
    fn export_columns_start_with_currency_code() {
        assert_eq!(EXPORT_COLUMNS[0], columns::CURR);
        assert!(EXPORT_COLUMNS.contains(&columns::NOTE_HEIGHT));
    }
}
