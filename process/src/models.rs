use serde::Deserialize;

pub const SHEETS_ENDPOINT: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Values response of the sheets API. `values` is row-major and absent when
/// the range is empty.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    pub range: String,
    pub major_dimension: String,
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}
