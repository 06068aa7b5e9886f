//! Domain services - Pure computations over weather entities

mod date_formatter;
mod forecast_aggregator;

pub use date_formatter::{DATE_FORMAT, DateFormatter, format_date};
pub use forecast_aggregator::{
    DayGrouping, ForecastAggregator, SAMPLES_PER_DAY, summarize_by_day,
};
