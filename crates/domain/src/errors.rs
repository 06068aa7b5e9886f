//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A search was attempted without a city name
    #[error("City name must not be empty")]
    EmptyCityName,

    /// Unknown timezone or date policy
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Unknown day grouping strategy
    #[error("Invalid day grouping: {0}")]
    InvalidGrouping(String),
}
