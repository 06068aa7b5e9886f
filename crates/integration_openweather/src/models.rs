//! Weather data models
//!
//! Types for representing weather data from the OpenWeatherMap API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Condition block as reported for a sample (`weather[0]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherCondition {
    /// OpenWeatherMap condition id (e.g. 500 for light rain)
    #[serde(default)]
    pub id: u16,
    /// Short condition group (e.g. "Rain")
    pub main: String,
    /// Human-readable description (e.g. "light rain")
    pub description: String,
    /// Icon key (e.g. "10d")
    pub icon: String,
}

/// Current conditions for a city
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// City name as resolved by the provider
    pub city_name: String,
    /// Temperature in the requested units
    pub temperature: f64,
    /// Weather condition
    pub condition: WeatherCondition,
}

/// One 3-hour forecast sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Sample time in seconds since the Unix epoch
    pub timestamp: i64,
    /// Temperature in the requested units
    pub temperature: f64,
    /// Weather condition
    pub condition: WeatherCondition,
}

/// 5-day / 3-hour forecast for a city
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityForecast {
    /// City name as resolved by the provider
    pub city_name: String,
    /// UTC offset of the city in seconds
    pub timezone_offset_secs: i32,
    /// Samples in chronological order
    pub samples: Vec<ForecastSample>,
}

/// Raw `main` block
#[derive(Debug, Clone, Deserialize)]
pub struct MainData {
    pub temp: f64,
}

/// Raw reply of the `weather` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentResponse {
    pub name: String,
    pub main: MainData,
    pub weather: Vec<WeatherCondition>,
}

/// Raw forecast list item
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastItem {
    pub dt: i64,
    pub main: MainData,
    pub weather: Vec<WeatherCondition>,
}

/// Raw `city` block of the forecast reply
#[derive(Debug, Clone, Deserialize)]
pub struct CityData {
    pub name: String,
    #[serde(default)]
    pub timezone: i32,
}

/// Raw reply of the `forecast` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastItem>,
    pub city: CityData,
}

/// Whether a reply body carries the provider's not-found sentinel
///
/// The `cod` field is a string on some endpoints and a number on others.
pub fn is_not_found(body: &Value) -> bool {
    match body.get("cod") {
        Some(Value::String(code)) => code == "404",
        Some(Value::Number(code)) => code.as_u64() == Some(404),
        _ => false,
    }
}

/// Provider message accompanying an error reply, if any
pub fn error_message(body: &Value) -> Option<&str> {
    body.get("message").and_then(Value::as_str)
}
