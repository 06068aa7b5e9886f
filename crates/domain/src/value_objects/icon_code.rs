//! Weather icon value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Base URL of the provider's icon set
const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Short key into the provider's icon set (e.g. `10d`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconCode(String);

impl IconCode {
    /// Create a new icon code
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the icon code
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL of the PNG rendering of this icon
    #[must_use]
    pub fn url(&self) -> String {
        format!("{ICON_BASE_URL}/{}.png", self.0)
    }
}

impl fmt::Display for IconCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for IconCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for IconCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}
