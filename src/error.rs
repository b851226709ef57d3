use crate::forecast::error::ForecastError;
use crate::query::error::QueryError;
use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeteoSqlError {
    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Polars(#[from] PolarsError),
}
