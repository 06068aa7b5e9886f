//! OpenWeatherMap integration
//!
//! Client for the OpenWeatherMap 2.5 API (<https://openweathermap.org/api>).
//! Provides current conditions and the 5-day / 3-hour forecast for a city.

pub mod client;
mod models;

pub use client::{OpenWeatherClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{CityForecast, CurrentConditions, ForecastSample, WeatherCondition};
