use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("SQL statement failed: {sql}")]
    Sql {
        sql: String,
        #[source]
        source: PolarsError,
    },

    #[error("Failed reading remote JSON document")]
    RemoteJson(#[source] PolarsError),
}
