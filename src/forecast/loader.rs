//! Turns the `hourly` block of a forecast document into a Polars `DataFrame`.
//!
//! The block maps each variable name to an array, all arrays the same length.
//! Each variable becomes one column, in document order. Column types are inferred
//! from the values; nothing is coerced across JSON types.

use crate::forecast::error::ForecastError;
use crate::types::forecast_response::ForecastResponse;
use crate::types::hourly_reading::HourlyReading;
use log::{debug, info};
use polars::prelude::*;
use serde_json::{Map, Value};

/// Column values after type inference.
enum InferredColumn {
    Float(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
    Boolean(Vec<Option<bool>>),
}

impl InferredColumn {
    fn into_column(self, name: &str) -> Column {
        match self {
            InferredColumn::Float(values) => Column::new(name.into(), values),
            InferredColumn::Text(values) => Column::new(name.into(), values),
            InferredColumn::Boolean(values) => Column::new(name.into(), values),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum ValueKind {
    Number,
    Text,
    Boolean,
}

fn kind_of(value: &Value) -> Option<ValueKind> {
    match value {
        Value::Number(_) => Some(ValueKind::Number),
        Value::String(_) => Some(ValueKind::Text),
        Value::Bool(_) => Some(ValueKind::Boolean),
        _ => None,
    }
}

fn unsupported(column: &str, reason: impl Into<String>) -> ForecastError {
    ForecastError::UnsupportedColumn {
        column: column.to_string(),
        reason: reason.into(),
    }
}

fn infer_column(name: &str, values: &[Value]) -> Result<InferredColumn, ForecastError> {
    let mut kind: Option<ValueKind> = None;
    for (idx, value) in values.iter().enumerate() {
        if value.is_null() {
            continue;
        }
        let Some(found) = kind_of(value) else {
            return Err(unsupported(name, format!("nested value at index {idx}")));
        };
        match kind {
            None => kind = Some(found),
            Some(expected) if expected != found => {
                return Err(unsupported(
                    name,
                    format!("mixed {expected:?} and {found:?} values (index {idx})"),
                ));
            }
            Some(_) => {}
        }
    }

    // An all-null column loads as floats, the common case for a missing measurement.
    Ok(match kind.unwrap_or(ValueKind::Number) {
        ValueKind::Number => {
            InferredColumn::Float(values.iter().map(Value::as_f64).collect())
        }
        ValueKind::Text => InferredColumn::Text(
            values
                .iter()
                .map(|v| v.as_str().map(str::to_owned))
                .collect(),
        ),
        ValueKind::Boolean => InferredColumn::Boolean(values.iter().map(Value::as_bool).collect()),
    })
}

fn hourly_to_dataframe(hourly: &Map<String, Value>) -> Result<DataFrame, ForecastError> {
    if hourly.is_empty() {
        return Err(ForecastError::MissingHourly);
    }

    let mut expected_len: Option<usize> = None;
    let mut columns = Vec::with_capacity(hourly.len());

    for (name, field) in hourly {
        let Some(values) = field.as_array() else {
            return Err(unsupported(name, "value is not an array"));
        };

        match expected_len {
            None => expected_len = Some(values.len()),
            Some(expected) if expected != values.len() => {
                return Err(ForecastError::ColumnLengthMismatch {
                    column: name.clone(),
                    expected,
                    found: values.len(),
                });
            }
            Some(_) => {}
        }

        columns.push(infer_column(name, values)?.into_column(name));
    }

    let df = DataFrame::new(columns)?;
    debug!("Hourly DataFrame schema: {:?}", df.schema());
    Ok(df)
}

/// Loads the `hourly` block of a decoded forecast.
///
/// # Errors
///
/// [`ForecastError::MissingHourly`] when the document has no usable `hourly` object.
/// An absent block is always an error, never an empty table.
pub fn load_hourly(response: &ForecastResponse) -> Result<DataFrame, ForecastError> {
    let hourly = response
        .hourly_fields()
        .ok_or(ForecastError::MissingHourly)?;
    load_fields(hourly)
}

/// Same as [`load_hourly`] for an untyped JSON document.
pub fn load_hourly_value(document: &Value) -> Result<DataFrame, ForecastError> {
    let hourly = document
        .get("hourly")
        .and_then(Value::as_object)
        .ok_or(ForecastError::MissingHourly)?;
    load_fields(hourly)
}

fn load_fields(hourly: &Map<String, Value>) -> Result<DataFrame, ForecastError> {
    let df = hourly_to_dataframe(hourly)?;
    info!(
        "Loaded hourly table with {} rows and {} columns",
        df.height(),
        df.width()
    );
    Ok(df)
}

/// Collects the `time` and `temperature_2m` columns into typed readings, in row order.
pub fn collect_readings(df: &DataFrame) -> Result<Vec<HourlyReading>, ForecastError> {
    let time = df
        .column("time")
        .map_err(|e| ForecastError::ColumnNotFound("time".to_string(), e))?
        .str()?;
    let temperature = df
        .column("temperature_2m")
        .map_err(|e| ForecastError::ColumnNotFound("temperature_2m".to_string(), e))?
        .f64()?;

    time.into_iter()
        .zip(temperature.into_iter())
        .enumerate()
        .map(|(idx, (time, temperature_2m))| {
            let time = time.ok_or_else(|| unsupported("time", format!("null at index {idx}")))?;
            HourlyReading::parse(time, temperature_2m).map_err(|source| {
                ForecastError::TimeParse {
                    value: time.to_string(),
                    source,
                }
            })
        })
        .collect()
}
