//! The fixed statements printed by the reporter.

use crate::error::MeteoSqlError;
use crate::forecast::fetcher::ForecastFetcher;
use crate::query::engine::QueryEngine;
use crate::query::error::QueryError;
use log::info;
use polars::prelude::*;
use std::fmt;
use std::io::Cursor;

/// Name of the view holding the loaded hourly table.
pub const VIEW_NAME: &str = "meteo_paris";

/// Name of the view holding the remote document in the separate engine used by [`remote_dump`].
pub const REMOTE_VIEW_NAME: &str = "remote_forecast";

/// First ten hours with a temperature, earliest first.
pub const TOP_READINGS_SQL: &str = r#"
    SELECT "time" AS heure, temperature_2m AS temperature
    FROM meteo_paris
    WHERE temperature_2m IS NOT NULL
    ORDER BY heure
    LIMIT 10
"#;

/// Mean of the non-null temperatures.
pub const AVERAGE_TEMPERATURE_SQL: &str = r#"
    SELECT AVG(temperature_2m) AS temperature_moyenne
    FROM meteo_paris
    WHERE temperature_2m IS NOT NULL
"#;

pub const REMOTE_DUMP_SQL: &str = "SELECT * FROM remote_forecast";

/// One printed result: a heading and the table below it.
#[derive(Debug, Clone)]
pub struct Report {
    pub title: String,
    pub frame: DataFrame,
}

impl Report {
    pub fn new(title: impl Into<String>, frame: DataFrame) -> Self {
        Self {
            title: title.into(),
            frame,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        write!(f, "{}", self.frame)
    }
}

pub fn top_readings(engine: &mut QueryEngine) -> Result<DataFrame, QueryError> {
    engine.execute(TOP_READINGS_SQL)
}

pub fn average_temperature(engine: &mut QueryEngine) -> Result<DataFrame, QueryError> {
    engine.execute(AVERAGE_TEMPERATURE_SQL)
}

/// Reads a whole JSON document as a one-row frame.
///
/// Top-level scalars become plain columns, nested objects become struct columns.
pub fn read_remote_json(bytes: Vec<u8>) -> Result<DataFrame, QueryError> {
    JsonReader::new(Cursor::new(bytes))
        .with_json_format(JsonFormat::Json)
        .finish()
        .map_err(QueryError::RemoteJson)
}

/// Downloads `url` again and selects every column of the document.
///
/// The loaded hourly view is not involved: the document gets its own engine.
pub async fn remote_dump(fetcher: &ForecastFetcher, url: &str) -> Result<DataFrame, MeteoSqlError> {
    let bytes = fetcher.fetch_bytes(url).await?;
    let document = read_remote_json(bytes)?;
    info!("Read remote JSON document with {} columns", document.width());

    let mut engine = QueryEngine::new();
    engine.register(REMOTE_VIEW_NAME, document);
    Ok(engine.execute(REMOTE_DUMP_SQL)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(frame: DataFrame) -> QueryEngine {
        let mut engine = QueryEngine::new();
        engine.register(VIEW_NAME, frame);
        engine
    }

    #[test]
    fn test_top_readings_skips_nulls_and_orders_by_time() -> Result<(), Box<dyn std::error::Error>> {
        let mut engine = engine_with(df!(
            "time" => ["2025-03-01T01:00", "2025-03-01T00:00", "2025-03-01T02:00"],
            "temperature_2m" => [Some(6.0), Some(5.0), None],
        )?);

        let res = top_readings(&mut engine)?;
        assert_eq!(res.get_column_names(), ["heure", "temperature"]);

        let times: Vec<Option<&str>> = res.column("heure")?.str()?.into_iter().collect();
        let temps: Vec<Option<f64>> = res.column("temperature")?.f64()?.into_iter().collect();
        assert_eq!(
            times,
            vec![Some("2025-03-01T00:00"), Some("2025-03-01T01:00")]
        );
        assert_eq!(temps, vec![Some(5.0), Some(6.0)]);
        Ok(())
    }

    #[test]
    fn test_top_readings_limits_to_ten() -> Result<(), Box<dyn std::error::Error>> {
        let times: Vec<String> = (0..24).map(|h| format!("2025-03-01T{h:02}:00")).collect();
        let temps: Vec<f64> = (0..24).map(f64::from).collect();
        let mut engine = engine_with(df!("time" => times, "temperature_2m" => temps)?);

        let res = top_readings(&mut engine)?;
        assert_eq!(res.height(), 10);
        assert_eq!(res.column("heure")?.str()?.get(9), Some("2025-03-01T09:00"));
        Ok(())
    }

    #[test]
    fn test_average_excludes_nulls() -> Result<(), Box<dyn std::error::Error>> {
        let mut engine = engine_with(df!(
            "time" => ["a", "b", "c"],
            "temperature_2m" => [Some(5.0), None, Some(15.0)],
        )?);

        let res = average_temperature(&mut engine)?;
        assert_eq!(res.shape(), (1, 1));
        assert_eq!(res.column("temperature_moyenne")?.f64()?.get(0), Some(10.0));
        Ok(())
    }

    #[test]
    fn test_read_remote_json_is_one_row() -> Result<(), Box<dyn std::error::Error>> {
        let body = br#"{
            "latitude": 48.86,
            "longitude": 2.35,
            "hourly": { "time": ["2025-03-01T00:00"], "temperature_2m": [5.0] }
        }"#;
        let df = read_remote_json(body.to_vec())?;
        assert_eq!(df.height(), 1);
        assert_eq!(df.width(), 3);
        assert_eq!(df.column("latitude")?.f64()?.get(0), Some(48.86));
        assert!(matches!(df.column("hourly")?.dtype(), DataType::Struct(_)));
        Ok(())
    }

    #[test]
    fn test_read_remote_json_rejects_garbage() {
        assert!(matches!(
            read_remote_json(b"<html>oops</html>".to_vec()),
            Err(QueryError::RemoteJson(_))
        ));
    }

    #[test]
    fn test_report_display_has_title_then_table() -> Result<(), PolarsError> {
        let report = Report::new("Average temperature", df!("temperature_moyenne" => [10.0])?);
        let rendered = report.to_string();
        assert!(rendered.starts_with("Average temperature\n"));
        assert!(rendered.contains("temperature_moyenne"));
        Ok(())
    }
}
