//! Search state machine
//!
//! A search moves `Idle -> Searching -> {Success, NotFound, Error}`. Every
//! `begin` issues a new ticket and only the holder of the latest ticket may
//! complete the search, so a slow reply to an older query never replaces the
//! result of a newer one.

use domain::{CityName, WeatherReport};
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::ApplicationError;

/// Message shown when the provider does not know the city
pub const CITY_NOT_FOUND_MESSAGE: &str = "City not found.";

/// User-facing search failures other than an unknown city
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The search was submitted without a city name
    #[error("Please enter a city name.")]
    EmptyQuery,

    /// Any transport, status or decoding failure
    #[error("Error fetching weather data.")]
    FetchFailed,
}

/// Displayed state of the weather search
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    /// No search has been submitted yet
    #[default]
    Idle,
    /// A search is in flight
    Searching {
        /// City being searched
        city: CityName,
    },
    /// Current conditions and forecast were retrieved
    Success(WeatherReport),
    /// Either endpoint reported the city as unknown
    NotFound,
    /// The search was rejected or failed
    Error(SearchError),
}

impl SearchState {
    /// Whether a request is in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Searching { .. })
    }

    /// The report to display, if the last search succeeded
    #[must_use]
    pub const fn report(&self) -> Option<&WeatherReport> {
        match self {
            Self::Success(report) => Some(report),
            _ => None,
        }
    }

    /// The error line to display, if any
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::NotFound => Some(CITY_NOT_FOUND_MESSAGE.to_string()),
            Self::Error(err) => Some(err.to_string()),
            Self::Idle | Self::Searching { .. } | Self::Success(_) => None,
        }
    }
}

/// Identifies one submitted search
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

/// Owner of the search state; the only place it is mutated
#[derive(Debug, Default)]
pub struct SearchSession {
    state: SearchState,
    latest: u64,
}

impl SearchSession {
    /// Create an idle session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state
    #[must_use]
    pub const fn state(&self) -> &SearchState {
        &self.state
    }

    /// Start a new search for the given query
    ///
    /// Any search still in flight becomes stale. An empty query moves straight
    /// to `Error(EmptyQuery)` and no request must be made.
    pub fn begin(&mut self, query: &str) -> Result<(SearchTicket, CityName), SearchError> {
        self.latest += 1;

        let Ok(city) = CityName::new(query) else {
            debug!("Rejected empty search query");
            self.state = SearchState::Error(SearchError::EmptyQuery);
            return Err(SearchError::EmptyQuery);
        };

        self.state = SearchState::Searching { city: city.clone() };
        Ok((SearchTicket(self.latest), city))
    }

    /// Record the outcome of a search
    ///
    /// Returns `false` and leaves the state untouched if the ticket is stale.
    pub fn complete(
        &mut self,
        ticket: SearchTicket,
        result: Result<WeatherReport, ApplicationError>,
    ) -> bool {
        if ticket.0 != self.latest {
            debug!(
                ticket = ticket.0,
                latest = self.latest,
                "Ignoring result of superseded search"
            );
            return false;
        }

        self.state = match result {
            Ok(report) => SearchState::Success(report),
            Err(err) if err.is_not_found() => SearchState::NotFound,
            Err(err) => {
                warn!(error = %err, "Weather search failed");
                SearchState::Error(SearchError::FetchFailed)
            },
        };
        true
    }
}
