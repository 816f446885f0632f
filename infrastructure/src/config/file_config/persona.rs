//! Persona settings from TOML (`[persona]` section)

use persona_application::PersonaConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePersonaConfig {
    /// Language of the generated persona (default: "Korean").
    pub language: String,
    /// Number of nearby cafés to suggest (default: 3).
    pub cafe_count: usize,
    /// Link copied or shared from the result screen.
    pub share_url: String,
}

impl Default for FilePersonaConfig {
    fn default() -> Self {
        let defaults = PersonaConfig::default();
        Self {
            language: defaults.language,
            cafe_count: defaults.cafe_count,
            share_url: defaults.share_url,
        }
    }
}

impl FilePersonaConfig {
    /// Build the runtime parameters, taking the location timeout from `[location]`.
    pub fn to_persona_config(&self, location_timeout: Duration) -> PersonaConfig {
        PersonaConfig::default()
            .with_language(self.language.clone())
            .with_cafe_count(self.cafe_count)
            .with_share_url(self.share_url.clone())
            .with_location_timeout(location_timeout)
    }
}
