//! Terminal rendering of search outcomes

use std::fmt::Write;

use application::services::SearchState;
use domain::{CurrentWeather, DailySummary, WeatherReport};
use serde::Serialize;

/// Temperature unit label for the configured unit system
pub fn temperature_unit(units: &str) -> &'static str {
    match units {
        "imperial" => "°F",
        "standard" => "K",
        _ => "°C",
    }
}

/// Render the current conditions block
pub fn render_current(current: &CurrentWeather, unit: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", current.city_name);
    let _ = writeln!(out, "Temperature: {}{unit}", current.temperature);
    let _ = writeln!(out, "Condition: {}", current.condition_main);
    let _ = writeln!(out, "Description: {}", current.condition_description);
    let _ = writeln!(out, "Icon: {}", current.icon_code.url());
    out
}

/// Render one forecast card
pub fn render_day(day: &DailySummary, unit: &str) -> String {
    format!(
        "{}  {}  {}  {}{unit}",
        day.date,
        day.icon_code.url(),
        day.description,
        day.temperature
    )
}

/// Render a full report: current block followed by the day cards
pub fn render_report(report: &WeatherReport, unit: &str) -> String {
    let mut out = render_current(&report.current, unit);
    if !report.daily.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}-Day Forecast", report.daily.len());
        for day in &report.daily {
            let _ = writeln!(out, "{}", render_day(day, unit));
        }
    }
    out
}

/// Machine-readable search outcome
#[derive(Debug, Serialize)]
pub struct JsonOutcome<'a> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a WeatherReport>,
}

impl<'a> JsonOutcome<'a> {
    /// Describe a settled search state
    pub fn from_state(state: &'a SearchState) -> Self {
        let status = match state {
            SearchState::Idle => "idle",
            SearchState::Searching { .. } => "searching",
            SearchState::Success(_) => "success",
            SearchState::NotFound => "not_found",
            SearchState::Error(_) => "error",
        };
        Self {
            status,
            message: state.message(),
            report: state.report(),
        }
    }
}
