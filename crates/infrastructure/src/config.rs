//! Application configuration
//!
//! Loaded in layers: built-in defaults, then an optional `weathercast.toml`
//! (or an explicit file), then `WEATHERCAST_`-prefixed environment variables
//! using `__` between section and key, e.g. `WEATHERCAST_OPENWEATHER__API_KEY`.

use std::collections::HashMap;
use std::path::Path;

use domain::{DateFormatter, DateZone, DayGrouping, ForecastAggregator};
use integration_openweather::WeatherConfig;
use serde::{Deserialize, Serialize};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "WEATHERCAST";

/// Default configuration file name (extension resolved by the loader)
pub const DEFAULT_CONFIG_NAME: &str = "weathercast";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// OpenWeatherMap client settings
    #[serde(default)]
    pub openweather: WeatherConfig,

    /// Forecast summarization settings
    #[serde(default)]
    pub forecast: ForecastConfig,

    /// Logging output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How forecast samples are turned into day summaries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Grouping strategy (`stride` or `calendar`)
    #[serde(default)]
    pub grouping: DayGrouping,

    /// Calendar used for dates (`local`, `utc`, `provider` or an IANA name)
    #[serde(default)]
    pub timezone: DateZone,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

impl AppConfig {
    /// Load configuration from `path` (or `weathercast.toml` if present) and the environment
    ///
    /// An explicit path must exist; the default file is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value fails to parse.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::build(path, None)
    }

    fn build(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let file = path.map_or_else(
            || config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
            |p| config::File::from(p).required(true),
        );

        let config = config::Config::builder()
            // Start with defaults
            .set_default("openweather.units", "metric")?
            .set_default("forecast.grouping", DayGrouping::default().to_string())?
            .set_default("forecast.timezone", DateZone::default().to_string())?
            .set_default("logging.format", "text")?
            .add_source(file)
            // Override with environment variables (e.g., WEATHERCAST_FORECAST__GROUPING)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Aggregator configured from the forecast section
    #[must_use]
    pub fn aggregator(&self) -> ForecastAggregator {
        ForecastAggregator::new(
            self.forecast.grouping,
            DateFormatter::new(self.forecast.timezone),
        )
    }
}
