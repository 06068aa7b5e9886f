//! Domain entities - Weather data as received from the provider and derived from it

mod current_weather;
mod daily_summary;
mod forecast;
mod forecast_entry;

pub use current_weather::CurrentWeather;
pub use daily_summary::DailySummary;
pub use forecast::{Forecast, WeatherReport};
pub use forecast_entry::ForecastEntry;
