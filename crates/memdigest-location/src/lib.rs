#![warn(clippy::pedantic)]

pub mod error;
pub mod location;

pub use error::LocationError;
pub use location::{split_location, LocationFormat, LOCATION_SCHEME, LOCATION_SUFFIX};
