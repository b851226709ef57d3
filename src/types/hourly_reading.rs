use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp layout used by Open-Meteo for hourly values (`iso8601` without seconds).
pub const HOURLY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// One timestamped temperature observation from the forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyReading {
    pub time: NaiveDateTime,
    pub temperature_2m: Option<f64>,
}

impl HourlyReading {
    pub fn parse(time: &str, temperature_2m: Option<f64>) -> Result<Self, chrono::ParseError> {
        let time = NaiveDateTime::parse_from_str(time, HOURLY_TIME_FORMAT)?;
        Ok(Self {
            time,
            temperature_2m,
        })
    }
}
