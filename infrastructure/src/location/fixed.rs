use async_trait::async_trait;
use persona_application::{LocationError, LocationProvider};
use persona_domain::Coordinates;

/// Always reports the configured coordinates
pub struct FixedLocation {
    at: Coordinates,
}

impl FixedLocation {
    pub fn new(at: Coordinates) -> Self {
        Self { at }
    }
}

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Ok(self.at)
    }
}

/// Location turned off by the user
pub struct DisabledLocation;

#[async_trait]
impl LocationProvider for DisabledLocation {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Err(LocationError::Disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_and_disabled() {
        let at = Coordinates::try_new(35.68, 139.76).unwrap();
        assert_eq!(FixedLocation::new(at).current_position().await.unwrap(), at);
        assert!(matches!(
            DisabledLocation.current_position().await,
            Err(LocationError::Disabled)
        ));
    }
}
