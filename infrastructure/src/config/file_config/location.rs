//! Location settings from TOML (`[location]` section)

use persona_domain::Coordinates;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

/// How the device position is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationMode {
    /// Approximate position from the public IP address
    #[default]
    Ip,
    /// Coordinates from `latitude` / `longitude`
    Fixed,
    /// No position; café search is skipped
    Off,
}

impl LocationMode {
    pub const VALID: [&'static str; 3] = ["ip", "fixed", "off"];
}

impl FromStr for LocationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ip" => Ok(LocationMode::Ip),
            "fixed" => Ok(LocationMode::Fixed),
            "off" | "none" | "disabled" => Ok(LocationMode::Off),
            other => Err(format!("unknown location mode '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLocationConfig {
    /// "ip", "fixed" or "off" (default: "ip").
    pub mode: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Give up on the position after this long (default: 5000).
    pub timeout_ms: u64,
    /// IP geolocation endpoint.
    pub lookup_url: String,
}

impl Default for FileLocationConfig {
    fn default() -> Self {
        Self {
            mode: "ip".to_string(),
            latitude: None,
            longitude: None,
            timeout_ms: 5000,
            lookup_url: "http://ip-api.com/json/?fields=status,message,lat,lon".to_string(),
        }
    }
}

impl FileLocationConfig {
    /// Parsed mode; unknown values fall back to the default.
    pub fn parse_mode(&self) -> LocationMode {
        self.mode.parse().unwrap_or_default()
    }

    /// The configured fixed position, if both halves are present and in range.
    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::try_new(self.latitude?, self.longitude?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!("IP".parse::<LocationMode>(), Ok(LocationMode::Ip));
        assert_eq!("fixed".parse::<LocationMode>(), Ok(LocationMode::Fixed));
        assert_eq!("disabled".parse::<LocationMode>(), Ok(LocationMode::Off));
        assert!("gps".parse::<LocationMode>().is_err());
    }

    #[test]
    fn test_unknown_mode_defaults_to_ip() {
        let config = FileLocationConfig {
            mode: "gps".to_string(),
            ..Default::default()
        };
        assert_eq!(config.parse_mode(), LocationMode::Ip);
    }

    #[test]
    fn test_coordinates_need_both_halves() {
        let mut config = FileLocationConfig {
            latitude: Some(37.5),
            ..Default::default()
        };
        assert!(config.coordinates().is_none());

        config.longitude = Some(127.0);
        assert_eq!(config.coordinates(), Coordinates::try_new(37.5, 127.0));

        config.latitude = Some(123.0);
        assert!(config.coordinates().is_none());
    }
}
