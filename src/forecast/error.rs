use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Response body from {0} is not valid forecast JSON")]
    JsonDecode(String, #[source] serde_json::Error),

    #[error("Forecast response has no 'hourly' object")]
    MissingHourly,

    #[error("Hourly field '{column}' cannot be loaded: {reason}")]
    UnsupportedColumn { column: String, reason: String },

    #[error("Hourly field '{column}' has {found} values, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("Failed building hourly DataFrame: {0}")]
    DataFrame(#[from] PolarsError),

    #[error("Required column '{0}' not found in DataFrame")]
    ColumnNotFound(String, #[source] PolarsError),

    #[error("Could not parse hourly timestamp '{value}'")]
    TimeParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
