/// Country data shapes: the raw API record and its display projection.
use serde_json::Value;

/// One object from the API response. The endpoint guarantees nothing about
/// its fields, so records stay raw JSON and every lookup is defaulted.
pub type CountryRecord = Value;

/// Sentinel shown for any field the record does not carry.
pub const MISSING: &str = "N/A";

/// Three-field projection of a [`CountryRecord`] for tabular display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub country_name: String,
    pub capital: String,
    pub flag_url: String,
}

impl DisplayRow {
    /// Extract the display fields from a record, defaulting each to
    /// [`MISSING`] when absent. A record with an empty `capital` array is
    /// treated the same as one without the key.
    pub fn from_record(record: &CountryRecord) -> Self {
        let country_name = record
            .get("name")
            .and_then(|name| name.get("common"))
            .and_then(|v| v.as_str())
            .unwrap_or(MISSING)
            .to_string();
        let capital = record
            .get("capital")
            .and_then(|capitals| capitals.get(0))
            .and_then(|v| v.as_str())
            .unwrap_or(MISSING)
            .to_string();
        let flag_url = record
            .get("flags")
            .and_then(|flags| flags.get("png"))
            .and_then(|v| v.as_str())
            .unwrap_or(MISSING)
            .to_string();
        Self {
            country_name,
            capital,
            flag_url,
        }
    }

    /// Table cells in display order.
    pub fn into_columns(self) -> Vec<String> {
        vec![self.country_name, self.capital, self.flag_url]
    }
}
