use crate::forecast::error::ForecastError;
use crate::forecast::request::ForecastRequest;
use crate::types::forecast_response::ForecastResponse;
use log::{debug, info, warn};
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

/// Issues the GET requests against the forecast API.
///
/// There is no retry and, unless [`ForecastFetcher::with_timeout`] is used, no timeout:
/// a request blocks its caller until the server answers or the connection fails.
#[derive(Debug, Clone, Default)]
pub struct ForecastFetcher {
    client: Client,
}

impl ForecastFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, ForecastError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ForecastError::NetworkRequest("<client builder>".to_string(), e))?;
        Ok(Self { client })
    }

    /// Downloads and decodes the forecast described by `request`.
    pub async fn fetch_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastResponse, ForecastError> {
        let url = request.url();
        let bytes = self.fetch_bytes(&url).await?;
        serde_json::from_slice(&bytes).map_err(|e| ForecastError::JsonDecode(url, e))
    }

    /// Downloads `url` and parses the body as untyped JSON.
    pub async fn fetch_json(&self, url: &str) -> Result<Value, ForecastError> {
        let bytes = self.fetch_bytes(url).await?;
        serde_json::from_slice(&bytes).map_err(|e| ForecastError::JsonDecode(url.to_string(), e))
    }

    /// Downloads `url` and returns the raw body.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ForecastError> {
        let response = self.send(url).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ForecastError::NetworkRequest(url.to_string(), e))?;
        debug!("Received {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }

    async fn send(&self, url: &str) -> Result<Response, ForecastError> {
        info!("Requesting forecast from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ForecastError::NetworkRequest(url.to_string(), e))?;

        match response.error_for_status() {
            Ok(resp) => Ok(resp),
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                Err(if let Some(status) = e.status() {
                    ForecastError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    ForecastError::NetworkRequest(url.to_string(), e)
                })
            }
        }
    }
}
