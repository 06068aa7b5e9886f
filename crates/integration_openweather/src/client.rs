//! OpenWeatherMap client
//!
//! HTTP client for the OpenWeatherMap `weather` and `forecast` endpoints.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{
    CityForecast, CurrentConditions, CurrentResponse, ForecastItem, ForecastResponse,
    ForecastSample, WeatherCondition, error_message, is_not_found,
};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The provider does not know the requested city
    #[error("City not found: {0}")]
    NotFound(String),

    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The API key was missing or rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// No API key configured
    #[error("No OpenWeatherMap API key configured")]
    MissingApiKey,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as `APPID` (sensitive - never serialized)
    #[serde(default = "default_api_key", skip_serializing)]
    pub api_key: SecretString,

    /// Unit system: `metric`, `imperial` or `standard` (default: metric)
    #[serde(default = "default_units")]
    pub units: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("units", &self.units)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_api_key() -> SecretString {
    SecretString::from("")
}

fn default_units() -> String {
    "metric".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: default_api_key(),
            units: default_units(),
            timeout_secs: default_timeout(),
        }
    }
}

impl WeatherConfig {
    /// Create a configuration with the given API key and defaults otherwise
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            ..Self::default()
        }
    }

    /// Whether an API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().trim().is_empty()
    }
}

/// Weather client trait for fetching weather data by city name
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current weather for a city
    async fn get_current(&self, city: &str) -> Result<CurrentConditions, WeatherError>;

    /// Get the 5-day / 3-hour forecast for a city
    async fn get_forecast(&self, city: &str) -> Result<CityForecast, WeatherError>;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured or the HTTP client
    /// cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        if !config.has_api_key() {
            return Err(WeatherError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Build the URL of an endpoint below the base URL
    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    /// Issue a GET for a city and return the JSON body
    ///
    /// Maps HTTP status codes and the `cod` sentinel to `WeatherError`.
    /// Error texts never include the request URL since it carries the API key.
    async fn fetch_json(&self, endpoint: &str, city: &str) -> Result<Value, WeatherError> {
        let url = self.endpoint_url(endpoint);
        debug!(url = %url, units = %self.config.units, "Requesting OpenWeatherMap");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("units", self.config.units.as_str()),
                ("APPID", self.config.api_key.expose_secret()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    WeatherError::ConnectionFailed(e.without_url().to_string())
                } else {
                    WeatherError::RequestFailed(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(WeatherError::NotFound(city.to_string()));
        }
        if status == StatusCode::UNAUTHORIZED {
            warn!("OpenWeatherMap rejected the configured API key");
            return Err(WeatherError::Unauthorized(format!("HTTP {status}")));
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.without_url().to_string()))?;

        if is_not_found(&body) {
            debug!(
                provider_message = error_message(&body).unwrap_or_default(),
                "Provider reported city not found"
            );
            return Err(WeatherError::NotFound(city.to_string()));
        }

        Ok(body)
    }

    /// Take the first condition block of a sample
    fn first_condition(
        conditions: Vec<WeatherCondition>,
    ) -> Result<WeatherCondition, WeatherError> {
        conditions.into_iter().next().ok_or_else(|| {
            WeatherError::ParseError("No weather condition in response".to_string())
        })
    }

    /// Parse current conditions from the `weather` reply
    fn parse_current(body: Value) -> Result<CurrentConditions, WeatherError> {
        let data: CurrentResponse =
            serde_json::from_value(body).map_err(|e| WeatherError::ParseError(e.to_string()))?;

        Ok(CurrentConditions {
            city_name: data.name,
            temperature: data.main.temp,
            condition: Self::first_condition(data.weather)?,
        })
    }

    /// Parse one forecast list item
    fn parse_sample(item: ForecastItem) -> Result<ForecastSample, WeatherError> {
        Ok(ForecastSample {
            timestamp: item.dt,
            temperature: item.main.temp,
            condition: Self::first_condition(item.weather)?,
        })
    }

    /// Parse the `forecast` reply
    fn parse_forecast(body: Value) -> Result<CityForecast, WeatherError> {
        let data: ForecastResponse =
            serde_json::from_value(body).map_err(|e| WeatherError::ParseError(e.to_string()))?;

        let samples = data
            .list
            .into_iter()
            .map(Self::parse_sample)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CityForecast {
            city_name: data.city.name,
            timezone_offset_secs: data.city.timezone,
            samples,
        })
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    #[instrument(skip(self))]
    async fn get_current(&self, city: &str) -> Result<CurrentConditions, WeatherError> {
        let body = self.fetch_json("weather", city).await?;
        Self::parse_current(body)
    }

    #[instrument(skip(self))]
    async fn get_forecast(&self, city: &str) -> Result<CityForecast, WeatherError> {
        let body = self.fetch_json("forecast", city).await?;
        let forecast = Self::parse_forecast(body)?;
        debug!(samples = forecast.samples.len(), "Parsed forecast");
        Ok(forecast)
    }
}
