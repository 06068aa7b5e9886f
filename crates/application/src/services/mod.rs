//! Application services - Use case implementations

mod search_controller;
mod search_service;
mod search_state;

pub use search_controller::SearchController;
pub use search_service::SearchService;
pub use search_state::{
    CITY_NOT_FOUND_MESSAGE, SearchError, SearchSession, SearchState, SearchTicket,
};
