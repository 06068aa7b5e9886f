//! Calendar date formatting for forecast timestamps

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};

use crate::value_objects::DateZone;

/// Output pattern for forecast dates (`DD/MM/YYYY`)
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Turns Unix timestamps into calendar dates in a configured zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateFormatter {
    zone: DateZone,
    provider_offset: Option<FixedOffset>,
}

impl DateFormatter {
    /// Create a formatter for the given zone
    #[must_use]
    pub const fn new(zone: DateZone) -> Self {
        Self {
            zone,
            provider_offset: None,
        }
    }

    /// Formatter using the local calendar of the running environment
    #[must_use]
    pub const fn local() -> Self {
        Self::new(DateZone::Local)
    }

    /// Formatter using UTC
    #[must_use]
    pub const fn utc() -> Self {
        Self::new(DateZone::Utc)
    }

    /// Attach the provider-reported UTC offset of the searched city
    ///
    /// Only consulted for `DateZone::Provider`. Offsets outside ±24h are ignored.
    #[must_use]
    pub fn with_provider_offset(mut self, offset_secs: i32) -> Self {
        self.provider_offset = FixedOffset::east_opt(offset_secs);
        self
    }

    /// The configured zone
    #[must_use]
    pub const fn zone(&self) -> DateZone {
        self.zone
    }

    /// Calendar date of a timestamp in the configured zone
    ///
    /// Timestamps outside the representable range map to the Unix epoch.
    /// `DateZone::Provider` without a known offset falls back to UTC.
    #[must_use]
    pub fn calendar_date(&self, timestamp_secs: i64) -> NaiveDate {
        let instant = DateTime::<Utc>::from_timestamp(timestamp_secs, 0)
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

        match self.zone {
            DateZone::Local => instant.with_timezone(&Local).date_naive(),
            DateZone::Utc => instant.date_naive(),
            DateZone::Provider => self.provider_offset.map_or_else(
                || instant.date_naive(),
                |offset| instant.with_timezone(&offset).date_naive(),
            ),
            DateZone::Named(tz) => instant.with_timezone(&tz).date_naive(),
        }
    }

    /// Format a timestamp as `DD/MM/YYYY`
    #[must_use]
    pub fn format(&self, timestamp_secs: i64) -> String {
        self.calendar_date(timestamp_secs)
            .format(DATE_FORMAT)
            .to_string()
    }
}

/// Format a Unix timestamp as `DD/MM/YYYY` in the local calendar
#[must_use]
pub fn format_date(timestamp_secs: i64) -> String {
    DateFormatter::local().format(timestamp_secs)
}
