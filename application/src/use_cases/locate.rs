//! Location service
//!
//! Bounded, non-failing wrapper around a [`LocationProvider`].

use crate::ports::location::LocationProvider;
use persona_domain::Coordinates;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub struct LocationService {
    provider: Arc<dyn LocationProvider>,
    timeout: Duration,
}

impl LocationService {
    pub fn new(provider: Arc<dyn LocationProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Current position, or `None` when unavailable, denied or too slow.
    pub async fn locate(&self) -> Option<Coordinates> {
        match tokio::time::timeout(self.timeout, self.provider.current_position()).await {
            Ok(Ok(at)) => {
                debug!(%at, "Position acquired");
                Some(at)
            }
            Ok(Err(e)) => {
                debug!("Position unavailable: {}", e);
                None
            }
            Err(_) => {
                debug!("Position lookup timed out after {:?}", self.timeout);
                None
            }
        }
    }
}
