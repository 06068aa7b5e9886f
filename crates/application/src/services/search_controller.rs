//! Search controller
//!
//! Drives a `SearchSession` with a `SearchService`. The session lock is held
//! only to begin and complete a search, never across the network calls, so
//! searches may overlap and the newest one always determines the state.

use parking_lot::Mutex;
use tracing::{info, instrument};

use super::search_service::SearchService;
use super::search_state::{SearchSession, SearchState};

/// Entry point for submitting weather searches
#[derive(Debug)]
pub struct SearchController {
    service: SearchService,
    session: Mutex<SearchSession>,
}

impl SearchController {
    /// Create a controller with an idle session
    pub fn new(service: SearchService) -> Self {
        Self {
            service,
            session: Mutex::new(SearchSession::new()),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SearchState {
        self.session.lock().state().clone()
    }

    /// Submit a search and return the state after it completes
    ///
    /// An empty query never reaches the weather service. If a newer search
    /// was submitted while this one was in flight, the returned state is the
    /// newer search's state.
    #[instrument(skip(self))]
    pub async fn submit(&self, query: &str) -> SearchState {
        let begun = self.session.lock().begin(query);
        let Ok((ticket, city)) = begun else {
            return self.state();
        };

        info!(city = %city, "Searching weather");
        let result = self.service.search(&city).await;

        let mut session = self.session.lock();
        session.complete(ticket, result);
        session.state().clone()
    }
}
