//! Forecast aggregation
//!
//! Reduces the provider's 3-hour forecast samples to one summary per day.
//! The default strategy takes every eighth sample, relying on the provider's
//! cadence of eight samples per calendar day. The calendar strategy groups
//! samples by the date of their timestamp instead, which stays correct when
//! the forecast window starts mid-day.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::date_formatter::DateFormatter;
use crate::entities::{DailySummary, Forecast, ForecastEntry};
use crate::errors::DomainError;

/// Forecast samples per calendar day at a 3-hour cadence
pub const SAMPLES_PER_DAY: usize = 8;

/// How forecast samples are assigned to days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayGrouping {
    /// Every eighth sample starts a new day (indices 0, 8, 16, ...)
    #[default]
    Stride,
    /// First sample of each distinct calendar date
    CalendarDay,
}

impl fmt::Display for DayGrouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stride => write!(f, "stride"),
            Self::CalendarDay => write!(f, "calendar"),
        }
    }
}

impl FromStr for DayGrouping {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stride" => Ok(Self::Stride),
            "calendar" | "calendar_day" | "calendar-day" => Ok(Self::CalendarDay),
            _ => Err(DomainError::InvalidGrouping(s.to_string())),
        }
    }
}

impl TryFrom<String> for DayGrouping {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayGrouping> for String {
    fn from(grouping: DayGrouping) -> Self {
        grouping.to_string()
    }
}

/// Builds per-day summaries from forecast samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ForecastAggregator {
    grouping: DayGrouping,
    formatter: DateFormatter,
}

impl ForecastAggregator {
    /// Create an aggregator with the given grouping and date formatter
    #[must_use]
    pub const fn new(grouping: DayGrouping, formatter: DateFormatter) -> Self {
        Self {
            grouping,
            formatter,
        }
    }

    /// The configured grouping strategy
    #[must_use]
    pub const fn grouping(&self) -> DayGrouping {
        self.grouping
    }

    /// The configured date formatter
    #[must_use]
    pub const fn formatter(&self) -> DateFormatter {
        self.formatter
    }

    /// Summarize samples into one record per day
    ///
    /// Never fails: empty input yields an empty result and a trailing
    /// partial day is still summarized.
    #[must_use]
    pub fn summarize(&self, entries: &[ForecastEntry]) -> Vec<DailySummary> {
        match self.grouping {
            DayGrouping::Stride => entries
                .iter()
                .step_by(SAMPLES_PER_DAY)
                .map(|entry| self.to_summary(entry))
                .collect(),
            DayGrouping::CalendarDay => {
                let mut seen = HashSet::new();
                entries
                    .iter()
                    .filter(|entry| seen.insert(self.formatter.calendar_date(entry.timestamp)))
                    .map(|entry| self.to_summary(entry))
                    .collect()
            },
        }
    }

    /// Summarize a forecast reply, using its reported UTC offset for dates
    #[must_use]
    pub fn summarize_forecast(&self, forecast: &Forecast) -> Vec<DailySummary> {
        Self {
            grouping: self.grouping,
            formatter: self
                .formatter
                .with_provider_offset(forecast.timezone_offset_secs),
        }
        .summarize(&forecast.entries)
    }

    fn to_summary(&self, entry: &ForecastEntry) -> DailySummary {
        DailySummary {
            date: self.formatter.format(entry.timestamp),
            temperature: entry.temperature,
            description: entry.condition_description.clone(),
            icon_code: entry.icon_code.clone(),
        }
    }
}

/// Summarize samples by taking the first of every 8-sample block
///
/// Dates are formatted in the local calendar.
#[must_use]
pub fn summarize_by_day(entries: &[ForecastEntry]) -> Vec<DailySummary> {
    ForecastAggregator::default().summarize(entries)
}
