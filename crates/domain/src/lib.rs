//! Domain layer for Weathercast
//!
//! Contains the weather entities, value objects, the forecast aggregator and
//! date formatting. This layer performs no I/O and defines the ubiquitous
//! language shared by the outer crates.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use services::*;
pub use value_objects::*;
