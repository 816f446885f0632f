//! Location adapters for the [`LocationProvider`] port
//!
//! [`LocationProvider`]: persona_application::LocationProvider

mod fixed;
mod ip;

pub use fixed::{DisabledLocation, FixedLocation};
pub use ip::IpGeolocation;
