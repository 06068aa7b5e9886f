//! Date zone value object
//!
//! Selects the calendar in which forecast timestamps are turned into dates.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Calendar used when deriving a date from a Unix timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DateZone {
    /// Local calendar of the running environment
    #[default]
    Local,
    /// Coordinated Universal Time
    Utc,
    /// UTC offset reported by the provider for the searched city
    Provider,
    /// A named IANA timezone
    Named(Tz),
}

impl fmt::Display for DateZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Utc => write!(f, "utc"),
            Self::Provider => write!(f, "provider"),
            Self::Named(tz) => write!(f, "{}", tz.name()),
        }
    }
}

impl FromStr for DateZone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "utc" => Ok(Self::Utc),
            "provider" | "city" => Ok(Self::Provider),
            _ => s
                .trim()
                .parse::<Tz>()
                .map(Self::Named)
                .map_err(|_| DomainError::InvalidTimezone(s.to_string())),
        }
    }
}

impl TryFrom<String> for DateZone {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateZone> for String {
    fn from(zone: DateZone) -> Self {
        zone.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_local() {
        assert_eq!(DateZone::default(), DateZone::Local);
    }

    #[test]
    fn parses_keywords_case_insensitive() {
        assert_eq!("local".parse::<DateZone>().unwrap(), DateZone::Local);
        assert_eq!("UTC".parse::<DateZone>().unwrap(), DateZone::Utc);
        assert_eq!("Provider".parse::<DateZone>().unwrap(), DateZone::Provider);
        assert_eq!("city".parse::<DateZone>().unwrap(), DateZone::Provider);
    }

    #[test]
    fn parses_iana_names() {
        let zone = "Europe/Berlin".parse::<DateZone>().unwrap();
        assert_eq!(zone, DateZone::Named(chrono_tz::Europe::Berlin));
        assert_eq!(zone.to_string(), "Europe/Berlin");
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "Mars/Olympus".parse::<DateZone>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidTimezone(_)));
    }

    #[test]
    fn serde_uses_string_form() {
        let json = serde_json::to_string(&DateZone::Utc).unwrap();
        assert_eq!(json, "\"utc\"");

        let parsed: DateZone = serde_json::from_str("\"Asia/Tokyo\"").unwrap();
        assert_eq!(parsed, DateZone::Named(chrono_tz::Asia::Tokyo));
    }
}
