//! Network layer: the two TfL endpoints behind a [`VehicleDataSource`].

pub mod source;
pub use source::VehicleDataSource;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::{TflClient, TflError};
