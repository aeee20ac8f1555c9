//! OpenWeatherMap HTTP client.

use anyhow::{Context, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Client,
};
use thiserror::Error;
use tracing::{error, info};

use super::model::WeatherResponse;
use crate::mention::LocationQuery;
use crate::Config;

/// Failures talking to the provider. A non-200 `cod` is not one of them.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("weather request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("weather response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the OpenWeatherMap current-weather endpoint.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    /// Create a client against `base_url`, e.g. `https://api.openweathermap.org/data/2.5`.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build weather HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Create a client from the application configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.openweather_base_url.clone(),
            config.openweather_api_key.clone().unwrap_or_default(),
        )
    }

    /// Fetch current weather in metric units.
    ///
    /// The body is decoded regardless of HTTP status; check
    /// [`WeatherResponse::is_ok`] for the provider's verdict.
    pub async fn get_weather(&self, query: &LocationQuery) -> Result<WeatherResponse, WeatherError> {
        let q = query.to_query();
        let url = format!("{}/weather", self.base_url);

        info!(q = %q, "weather_fetch_starting");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", q.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .inspect_err(|e| error!(q = %q, error = %e, "weather_fetch_request_error"))?;

        let status = res.status().as_u16();
        let body = res.text().await?;

        let parsed: WeatherResponse = serde_json::from_str(&body).inspect_err(|e| {
            error!(
                q = %q,
                status_code = status,
                body_length = body.len(),
                error = %e,
                "weather_fetch_decode_error"
            )
        })?;

        info!(
            q = %q,
            status_code = status,
            cod = parsed.cod,
            location = %parsed.name,
            "weather_fetch_complete"
        );

        Ok(parsed)
    }
}
