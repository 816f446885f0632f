//! Persona pipeline parameters.
//!
//! These are application-layer concerns resolved from the config file and
//! CLI flags by the binary, then handed to the use cases.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Runtime parameters for the recommendation pipeline and sharing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaConfig {
    /// Language for every generated field except the image prompt.
    pub language: String,
    /// Maximum number of cafés to request and keep.
    pub cafe_count: usize,
    /// How long to wait for a position before giving up on cafés.
    pub location_timeout: Duration,
    /// Link copied or shared from the result screen.
    pub share_url: String,
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            language: "Korean".to_string(),
            cafe_count: 3,
            location_timeout: Duration::from_millis(5000),
            share_url: "https://github.com/music-brain88/coffee-persona".to_string(),
        }
    }
}

impl PersonaConfig {
    // ==================== Builder Methods ====================

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_cafe_count(mut self, count: usize) -> Self {
        self.cafe_count = count;
        self
    }

    pub fn with_location_timeout(mut self, timeout: Duration) -> Self {
        self.location_timeout = timeout;
        self
    }

    pub fn with_share_url(mut self, url: impl Into<String>) -> Self {
        self.share_url = url.into();
        self
    }
}
