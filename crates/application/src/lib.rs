//! Application layer - Use cases and orchestration
//!
//! Contains the weather search use case, its state machine, and the port
//! through which weather data is fetched. Infrastructure adapters implement
//! the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
