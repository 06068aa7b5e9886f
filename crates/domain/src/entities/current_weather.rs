//! Current weather conditions

use serde::{Deserialize, Serialize};

use crate::value_objects::IconCode;

/// Current conditions for a city as reported by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// City name as resolved by the provider
    pub city_name: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Short condition category (e.g. "Clouds")
    pub condition_main: String,
    /// Human-readable condition description
    pub condition_description: String,
    /// Provider icon key
    pub icon_code: IconCode,
}
