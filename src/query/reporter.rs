//! Runs the whole fetch, load and query sequence.

use crate::error::MeteoSqlError;
use crate::forecast::fetcher::ForecastFetcher;
use crate::forecast::loader::load_hourly;
use crate::forecast::request::ForecastRequest;
use crate::query::engine::QueryEngine;
use crate::query::reports::{average_temperature, remote_dump, top_readings, Report, VIEW_NAME};
use log::info;

pub const TOP_READINGS_TITLE: &str = "First 10 hourly temperatures";
pub const AVERAGE_TEMPERATURE_TITLE: &str = "Average temperature";
pub const REMOTE_DUMP_TITLE: &str = "Remote forecast document";

/// Produces the three reports for a forecast request.
///
/// Every call starts from a fresh engine, so two runs against the same
/// responses render identically.
///
/// # Examples
///
/// ```no_run
/// use open_meteo_sql::{ForecastRequest, MeteoSqlError, Reporter};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), MeteoSqlError> {
/// let reports = Reporter::new().run(&ForecastRequest::paris()).await?;
/// print!("{}", Reporter::render(&reports));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    fetcher: ForecastFetcher,
}

impl Reporter {
    pub fn new() -> Self {
        Self {
            fetcher: ForecastFetcher::new(),
        }
    }

    pub fn with_fetcher(fetcher: ForecastFetcher) -> Self {
        Self { fetcher }
    }

    /// Fetches, loads and queries, returning reports in print order:
    /// top readings, average, remote document.
    pub async fn run(&self, request: &ForecastRequest) -> Result<Vec<Report>, MeteoSqlError> {
        let response = self.fetcher.fetch_forecast(request).await?;
        let hourly = load_hourly(&response)?;

        let mut engine = QueryEngine::new();
        engine.register(VIEW_NAME, hourly);

        let top = top_readings(&mut engine)?;
        let average = average_temperature(&mut engine)?;
        let remote = remote_dump(&self.fetcher, &request.url()).await?;
        info!("All reports computed");

        Ok(vec![
            Report::new(TOP_READINGS_TITLE, top),
            Report::new(AVERAGE_TEMPERATURE_TITLE, average),
            Report::new(REMOTE_DUMP_TITLE, remote),
        ])
    }

    pub fn render(reports: &[Report]) -> String {
        reports
            .iter()
            .map(|report| format!("{report}\n"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
