//! Weather service port
//!
//! Defines the interface for weather data retrieval by city name.

use async_trait::async_trait;
use domain::{CityName, CurrentWeather, Forecast};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather service operations
///
/// `ApplicationError::CityNotFound` signals an unknown city; every other
/// error is a transport or decoding failure.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current weather for a city
    async fn fetch_current(&self, city: &CityName) -> Result<CurrentWeather, ApplicationError>;

    /// Get the multi-day 3-hour forecast for a city
    async fn fetch_forecast(&self, city: &CityName) -> Result<Forecast, ApplicationError>;
}
