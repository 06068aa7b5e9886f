//! Forecast reply and the combined search result

use serde::{Deserialize, Serialize};

use super::{CurrentWeather, DailySummary, ForecastEntry};

/// Multi-day forecast for a city, in the provider's 3-hour cadence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// City name as resolved by the provider
    pub city_name: String,
    /// UTC offset of the city in seconds
    pub timezone_offset_secs: i32,
    /// Samples in chronological order
    pub entries: Vec<ForecastEntry>,
}

/// Current conditions plus the per-day forecast summaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Current conditions
    pub current: CurrentWeather,
    /// One summary per forecast day
    pub daily: Vec<DailySummary>,
}
