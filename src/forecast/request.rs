//! Describes which forecast to ask Open-Meteo for.

use bon::Builder;

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1";
pub const PARIS_LATITUDE: f64 = 48.8566;
pub const PARIS_LONGITUDE: f64 = 2.3522;
pub const DEFAULT_HOURLY_VARIABLE: &str = "temperature_2m";

/// Parameters of a single `/forecast` request.
///
/// Every field has a default, so `ForecastRequest::builder().build()` is the
/// hourly temperature forecast for central Paris.
///
/// # Examples
///
/// ```
/// use open_meteo_sql::ForecastRequest;
///
/// let paris = ForecastRequest::paris();
/// assert_eq!(
///     paris.url(),
///     "https://api.open-meteo.com/v1/forecast?latitude=48.8566&longitude=2.3522&hourly=temperature_2m"
/// );
///
/// let berlin = ForecastRequest::builder()
///     .latitude(52.52)
///     .longitude(13.405)
///     .hourly(vec!["temperature_2m".to_string(), "rain".to_string()])
///     .build();
/// assert!(berlin.url().ends_with("hourly=temperature_2m,rain"));
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct ForecastRequest {
    #[builder(into, default = DEFAULT_BASE_URL.to_string())]
    base_url: String,
    #[builder(default = PARIS_LATITUDE)]
    latitude: f64,
    #[builder(default = PARIS_LONGITUDE)]
    longitude: f64,
    #[builder(default = vec![DEFAULT_HOURLY_VARIABLE.to_string()])]
    hourly: Vec<String>,
}

impl ForecastRequest {
    pub fn paris() -> Self {
        Self::builder().build()
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn hourly_variables(&self) -> &[String] {
        &self.hourly
    }

    /// Full request URL, query string included.
    pub fn url(&self) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&hourly={}",
            self.base_url.trim_end_matches('/'),
            self.latitude,
            self.longitude,
            self.hourly.join(",")
        )
    }
}

impl Default for ForecastRequest {
    fn default() -> Self {
        Self::paris()
    }
}
