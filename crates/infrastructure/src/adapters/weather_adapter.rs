//! Weather adapter - Implements WeatherPort using integration_openweather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{CityName, CurrentWeather, Forecast, ForecastEntry, IconCode};
use integration_openweather::{
    CityForecast, CurrentConditions, ForecastSample, OpenWeatherClient, WeatherClient,
    WeatherConfig, WeatherError,
};
use tracing::{debug, instrument, warn};

/// Adapter for weather services using the OpenWeatherMap API
#[derive(Debug)]
pub struct OpenWeatherAdapter {
    client: OpenWeatherClient,
}

impl OpenWeatherAdapter {
    /// Create an adapter with the given client configuration
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if no API key is configured,
    /// or an internal error if the HTTP client fails to initialize.
    pub fn new(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::NotFound(city) => ApplicationError::CityNotFound(city),
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::ParseError(e) => ApplicationError::Internal(e),
            WeatherError::Unauthorized(e) => ApplicationError::NotAuthorized(e),
            WeatherError::MissingApiKey => {
                ApplicationError::Configuration("OpenWeatherMap API key is not set".into())
            },
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    /// Convert integration current conditions to domain current weather
    fn map_current(current: CurrentConditions) -> CurrentWeather {
        CurrentWeather {
            city_name: current.city_name,
            temperature: current.temperature,
            condition_main: current.condition.main,
            condition_description: current.condition.description,
            icon_code: IconCode::from(current.condition.icon),
        }
    }

    /// Convert an integration forecast sample to a domain forecast entry
    fn map_sample(sample: ForecastSample) -> ForecastEntry {
        ForecastEntry {
            timestamp: sample.timestamp,
            temperature: sample.temperature,
            condition_main: sample.condition.main,
            condition_description: sample.condition.description,
            icon_code: IconCode::from(sample.condition.icon),
        }
    }

    /// Convert an integration forecast to a domain forecast
    fn map_forecast(forecast: CityForecast) -> Forecast {
        Forecast {
            city_name: forecast.city_name,
            timezone_offset_secs: forecast.timezone_offset_secs,
            entries: forecast.samples.into_iter().map(Self::map_sample).collect(),
        }
    }

    fn log_failure(err: &ApplicationError, what: &str) {
        match err {
            ApplicationError::CityNotFound(_) => debug!(error = %err, "{what}: city not found"),
            ApplicationError::NotAuthorized(_) | ApplicationError::Configuration(_) => {
                warn!(error = %err, "{what}: check the OpenWeatherMap API key");
            },
            _ => debug!(error = %err, "{what} failed"),
        }
    }
}

#[async_trait]
impl WeatherPort for OpenWeatherAdapter {
    #[instrument(skip(self), fields(city = %city))]
    async fn fetch_current(&self, city: &CityName) -> Result<CurrentWeather, ApplicationError> {
        let result = self
            .client
            .get_current(city.as_str())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(current) => {
                debug!(
                    temperature = current.temperature,
                    condition = %current.condition.main,
                    "Retrieved current weather"
                );
            },
            Err(e) => Self::log_failure(e, "Current weather"),
        }

        result.map(Self::map_current)
    }

    #[instrument(skip(self), fields(city = %city))]
    async fn fetch_forecast(&self, city: &CityName) -> Result<Forecast, ApplicationError> {
        let result = self
            .client
            .get_forecast(city.as_str())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(forecast) => {
                debug!(samples = forecast.samples.len(), "Retrieved weather forecast");
            },
            Err(e) => Self::log_failure(e, "Forecast"),
        }

        result.map(Self::map_forecast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use integration_openweather::WeatherCondition;

    fn condition(main: &str, description: &str, icon: &str) -> WeatherCondition {
        WeatherCondition {
            id: 800,
            main: main.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        }
    }

    #[test]
    fn new_requires_api_key() {
        let result = OpenWeatherAdapter::new(WeatherConfig::default());
        assert!(matches!(result, Err(ApplicationError::Configuration(_))));
    }

    #[test]
    fn new_creates_adapter() {
        let adapter = OpenWeatherAdapter::new(WeatherConfig::with_api_key("key"));
        assert!(adapter.is_ok());
    }

    #[test]
    fn debug_impl_hides_key() {
        let adapter = OpenWeatherAdapter::new(WeatherConfig::with_api_key("hidden-key")).unwrap();
        let debug_str = format!("{adapter:?}");
        assert!(debug_str.contains("OpenWeatherAdapter"));
        assert!(!debug_str.contains("hidden-key"));
    }

    #[test]
    fn map_error_not_found() {
        let app_err = OpenWeatherAdapter::map_error(WeatherError::NotFound("Atlantis".into()));
        assert!(app_err.is_not_found());
    }

    #[test]
    fn map_error_transport() {
        let cases = [
            WeatherError::ConnectionFailed("timeout".into()),
            WeatherError::RequestFailed("HTTP 400".into()),
            WeatherError::ServiceUnavailable("HTTP 503".into()),
        ];
        for err in cases {
            let app_err = OpenWeatherAdapter::map_error(err);
            assert!(matches!(app_err, ApplicationError::ExternalService(_)));
        }
    }

    #[test]
    fn map_error_others() {
        assert!(matches!(
            OpenWeatherAdapter::map_error(WeatherError::ParseError("eof".into())),
            ApplicationError::Internal(_)
        ));
        assert!(matches!(
            OpenWeatherAdapter::map_error(WeatherError::Unauthorized("HTTP 401".into())),
            ApplicationError::NotAuthorized(_)
        ));
        assert!(matches!(
            OpenWeatherAdapter::map_error(WeatherError::RateLimitExceeded),
            ApplicationError::RateLimited
        ));
    }

    #[test]
    fn map_current_copies_fields() {
        let current = OpenWeatherAdapter::map_current(CurrentConditions {
            city_name: "Madrid".to_string(),
            temperature: 16.5,
            condition: condition("Clear", "clear sky", "01d"),
        });

        assert_eq!(current.city_name, "Madrid");
        assert!((current.temperature - 16.5).abs() < f64::EPSILON);
        assert_eq!(current.condition_main, "Clear");
        assert_eq!(current.condition_description, "clear sky");
        assert_eq!(current.icon_code.as_str(), "01d");
    }

    #[test]
    fn map_forecast_keeps_order_and_offset() {
        let forecast = OpenWeatherAdapter::map_forecast(CityForecast {
            city_name: "Madrid".to_string(),
            timezone_offset_secs: 3600,
            samples: vec![
                ForecastSample {
                    timestamp: 100,
                    temperature: 1.0,
                    condition: condition("Rain", "light rain", "10n"),
                },
                ForecastSample {
                    timestamp: 200,
                    temperature: 2.0,
                    condition: condition("Clouds", "few clouds", "02d"),
                },
            ],
        });

        assert_eq!(forecast.timezone_offset_secs, 3600);
        assert_eq!(forecast.entries.len(), 2);
        assert_eq!(forecast.entries[0].timestamp, 100);
        assert_eq!(forecast.entries[1].condition_description, "few clouds");
        assert_eq!(forecast.entries[1].icon_code.as_str(), "02d");
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OpenWeatherAdapter>();
    }
}
