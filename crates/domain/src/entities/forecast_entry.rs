//! A single forecast sample

use serde::{Deserialize, Serialize};

use crate::value_objects::IconCode;

/// One 3-hour-resolution forecast sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Sample time in seconds since the Unix epoch
    pub timestamp: i64,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Short condition category (e.g. "Rain")
    pub condition_main: String,
    /// Human-readable condition description
    pub condition_description: String,
    /// Provider icon key
    pub icon_code: IconCode,
}

impl ForecastEntry {
    /// Create a new forecast entry
    #[must_use]
    pub fn new(
        timestamp: i64,
        temperature: f64,
        condition_main: impl Into<String>,
        condition_description: impl Into<String>,
        icon_code: impl Into<IconCode>,
    ) -> Self {
        Self {
            timestamp,
            temperature,
            condition_main: condition_main.into(),
            condition_description: condition_description.into(),
            icon_code: icon_code.into(),
        }
    }
}
