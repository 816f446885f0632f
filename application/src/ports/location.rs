//! Location port
//!
//! Where the device is, for the café search.

use async_trait::async_trait;
use persona_domain::Coordinates;
use thiserror::Error;

/// Errors a location source can report
#[derive(Error, Debug)]
pub enum LocationError {
    #[error("Location is disabled")]
    Disabled,

    #[error("Location permission denied")]
    Denied,

    #[error("Location lookup failed: {0}")]
    Failed(String),
}

/// One-shot position source
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}
