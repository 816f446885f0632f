//! Approximate position from an IP geolocation service

use async_trait::async_trait;
use persona_application::{LocationError, LocationProvider};
use persona_domain::Coordinates;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Body returned by `ip-api.com/json/?fields=status,message,lat,lon`
#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    status: String,
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

impl IpLookupResponse {
    fn into_coordinates(self) -> Result<Coordinates, LocationError> {
        if self.status != "success" {
            return Err(LocationError::Failed(
                self.message.unwrap_or_else(|| self.status.clone()),
            ));
        }
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Coordinates::try_new(lat, lon).ok_or_else(|| {
                LocationError::Failed(format!("coordinates out of range: {lat},{lon}"))
            }),
            _ => Err(LocationError::Failed("response has no coordinates".to_string())),
        }
    }
}

/// Looks up the public IP's approximate position
pub struct IpGeolocation {
    client: Client,
    lookup_url: String,
}

impl IpGeolocation {
    pub fn new(lookup_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            lookup_url: lookup_url.into(),
        }
    }
}

#[async_trait]
impl LocationProvider for IpGeolocation {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        debug!("Looking up position from {}", self.lookup_url);

        let response = self
            .client
            .get(&self.lookup_url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| LocationError::Failed(e.to_string()))?;

        let body: IpLookupResponse = response
            .json()
            .await
            .map_err(|e| LocationError::Failed(e.to_string()))?;

        body.into_coordinates()
    }
}
