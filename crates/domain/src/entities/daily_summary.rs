//! Per-day forecast summary

use serde::{Deserialize, Serialize};

use crate::value_objects::IconCode;

/// One summary record per forecast day
///
/// All fields are copied from the first sample of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Calendar date formatted as `DD/MM/YYYY`
    pub date: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Human-readable condition description
    pub description: String,
    /// Provider icon key
    pub icon_code: IconCode,
}
