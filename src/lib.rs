mod error;
mod forecast;
mod query;
mod types;

pub use error::MeteoSqlError;

pub use forecast::error::ForecastError;
pub use forecast::fetcher::ForecastFetcher;
pub use forecast::loader::{collect_readings, load_hourly, load_hourly_value};
pub use forecast::request::*;

pub use query::engine::QueryEngine;
pub use query::error::QueryError;
pub use query::reporter::*;
pub use query::reports::*;

pub use types::forecast_response::ForecastResponse;
pub use types::hourly_reading::{HourlyReading, HOURLY_TIME_FORMAT};
