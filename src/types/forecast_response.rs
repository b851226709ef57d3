use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The Open-Meteo forecast document as returned by `/v1/forecast`.
///
/// Only the metadata fields are typed. The `hourly` block stays a raw JSON value
/// because its fields depend on which variables were requested; the loader turns
/// it into a [`polars::frame::DataFrame`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ForecastResponse {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub generationtime_ms: Option<f64>,
    #[serde(default)]
    pub utc_offset_seconds: Option<i64>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub timezone_abbreviation: Option<String>,
    #[serde(default)]
    pub elevation: Option<f64>,
    #[serde(default)]
    pub hourly_units: Option<Map<String, Value>>,
    #[serde(default)]
    pub hourly: Option<Value>,
}

impl ForecastResponse {
    /// The `hourly` block, if present and shaped as an object.
    pub fn hourly_fields(&self) -> Option<&Map<String, Value>> {
        self.hourly.as_ref().and_then(Value::as_object)
    }

    /// Unit string for an hourly variable, e.g. `"°C"` for `temperature_2m`.
    pub fn unit_of(&self, field: &str) -> Option<&str> {
        self.hourly_units
            .as_ref()
            .and_then(|units| units.get(field))
            .and_then(Value::as_str)
    }
}
