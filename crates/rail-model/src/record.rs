/// One row of the reference table: a currency/module/denomination/emission
/// combination and its physical dimensions.
///
/// Selector string fields are trimmed at load time and never null, except
/// the denomination which keeps the authored cell verbatim; dimension
/// fields are `None` when the source cell is empty ("unknown"), never zero.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    pub currency_code: String,
    pub currency_name: Option<String>,
    pub io_module: String,
    /// Display string of the raw denomination cell, preserved verbatim
    /// (e.g. "50" and "50.00" stay distinct). Used for filtering.
    pub denomination: String,
    pub emission: String,
    pub rail_width: Option<i64>,
    pub rail_height: Option<i64>,
    pub note_width: Option<i64>,
    pub note_height: Option<i64>,
    pub rail_width_large: Option<i64>,
}
