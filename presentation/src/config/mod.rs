//! Presentation-level configuration
//!
//! Settings for the links rendered on the result screen.

use serde::{Deserialize, Serialize};

/// Character image link settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Text-to-image endpoint
    pub endpoint: String,
    /// Square image size in pixels
    pub size: u32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://image.pollinations.ai".to_string(),
            size: 1024,
        }
    }
}

impl ImageConfig {
    pub fn new(endpoint: impl Into<String>, size: u32) -> Self {
        Self {
            endpoint: endpoint.into(),
            size,
        }
    }
}
