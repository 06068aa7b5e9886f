//! Value Objects - Immutable, identity-less domain primitives

mod city_name;
mod date_zone;
mod icon_code;

pub use city_name::CityName;
pub use date_zone::DateZone;
pub use icon_code::IconCode;
