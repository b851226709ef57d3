pub mod forecast_response;
pub mod hourly_reading;
