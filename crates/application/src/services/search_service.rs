//! Weather search use case
//!
//! Fetches current conditions and the forecast for a city and reduces the
//! forecast to one summary per day.

use std::sync::Arc;

use domain::{CityName, ForecastAggregator, WeatherReport};
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::WeatherPort;

/// Runs a weather search against a `WeatherPort`
pub struct SearchService {
    weather: Arc<dyn WeatherPort>,
    aggregator: ForecastAggregator,
}

impl std::fmt::Debug for SearchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchService")
            .field("weather", &"<dyn WeatherPort>")
            .field("aggregator", &self.aggregator)
            .finish()
    }
}

impl SearchService {
    /// Create a service with the default (stride, local calendar) aggregator
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self {
            weather,
            aggregator: ForecastAggregator::default(),
        }
    }

    /// Use a custom forecast aggregator
    #[must_use]
    pub const fn with_aggregator(mut self, aggregator: ForecastAggregator) -> Self {
        self.aggregator = aggregator;
        self
    }

    /// Fetch current weather, then the forecast, and build a report
    ///
    /// The forecast request is only issued once current weather has arrived;
    /// a not-found reply on the current-weather endpoint ends the search
    /// without a forecast request.
    #[instrument(skip(self), fields(city = %city))]
    pub async fn search(&self, city: &CityName) -> Result<WeatherReport, ApplicationError> {
        let current = self.weather.fetch_current(city).await?;
        let forecast = self.weather.fetch_forecast(city).await?;

        let daily = self.aggregator.summarize_forecast(&forecast);
        debug!(
            entries = forecast.entries.len(),
            days = daily.len(),
            "Aggregated forecast"
        );

        Ok(WeatherReport { current, daily })
    }
}
