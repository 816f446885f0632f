//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod gemini;
mod image;
mod location;
mod persona;

pub use gemini::FileGeminiConfig;
pub use image::FileImageConfig;
pub use location::{FileLocationConfig, LocationMode};
pub use persona::FilePersonaConfig;

use persona_application::PersonaConfig;
use serde::{Deserialize, Serialize};

/// How serious a configuration issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The configuration cannot work at all.
    Error,
    /// The configuration works but may not behave as expected.
    Warning,
}

/// A problem found by [`FileConfig::validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted key the issue refers to, e.g. `location.mode`
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn warning(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.to_string(),
            message: message.into(),
        }
    }

    fn error(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gemini API settings
    pub gemini: FileGeminiConfig,
    /// Persona generation and sharing
    pub persona: FilePersonaConfig,
    /// Device position for the café search
    pub location: FileLocationConfig,
    /// Character image links
    pub image: FileImageConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.gemini.model.trim().is_empty() {
            issues.push(ConfigIssue::error("gemini.model", "gemini.model is empty"));
        }

        if self.persona.language.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                "persona.language",
                "persona.language is empty, the model will pick a language",
            ));
        }

        if self.persona.cafe_count == 0 {
            issues.push(ConfigIssue::warning(
                "persona.cafe_count",
                "persona.cafe_count is 0, no cafés will be shown",
            ));
        }

        match self.location.mode.parse::<LocationMode>() {
            Err(_) => issues.push(ConfigIssue::warning(
                "location.mode",
                format!(
                    "location.mode: unknown value '{}', falling back to 'ip' (valid: {})",
                    self.location.mode,
                    LocationMode::VALID.join(", ")
                ),
            )),
            Ok(LocationMode::Fixed) if self.location.coordinates().is_none() => {
                issues.push(ConfigIssue::warning(
                    "location.latitude",
                    "location.mode is 'fixed' but latitude/longitude are missing or out of range",
                ))
            }
            Ok(_) => {}
        }

        if self.location.timeout_ms == 0 {
            issues.push(ConfigIssue::warning(
                "location.timeout_ms",
                "location.timeout_ms is 0, the position will never be available",
            ));
        }

        if self.image.size == 0 {
            issues.push(ConfigIssue::warning("image.size", "image.size is 0"));
        }

        issues
    }

    /// Runtime parameters for the pipeline and share actions
    pub fn persona_config(&self) -> PersonaConfig {
        self.persona.to_persona_config(self.location.timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[gemini]
api_key_env = "MY_GEMINI_KEY"
model = "gemini-2.5-pro"

[persona]
language = "English"
cafe_count = 5

[location]
mode = "fixed"
latitude = 37.5665
longitude = 126.978
timeout_ms = 2000

[image]
size = 512
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.api_key_env, "MY_GEMINI_KEY");
        assert_eq!(config.gemini.model, "gemini-2.5-pro");
        assert_eq!(config.persona.language, "English");
        assert_eq!(config.persona.cafe_count, 5);
        assert_eq!(config.location.parse_mode(), LocationMode::Fixed);
        assert_eq!(config.image.size, 512);
        assert_eq!(config.image.endpoint, "https://image.pollinations.ai");
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config_keeps_defaults() {
        let config: FileConfig = toml::from_str("[persona]\nlanguage = \"Japanese\"\n").unwrap();
        assert_eq!(config.persona.language, "Japanese");
        assert_eq!(config.persona.cafe_count, 3);
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert_eq!(config.location.timeout_ms, 5000);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_unknown_mode() {
        let mut config = FileConfig::default();
        config.location.mode = "gps".to_string();

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "location.mode");
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_validate_fixed_without_coordinates() {
        let mut config = FileConfig::default();
        config.location.mode = "fixed".to_string();

        let issues = config.validate();
        assert!(issues.iter().any(|i| i.field == "location.latitude"));
    }

    #[test]
    fn test_validate_zero_timeout_and_empty_model() {
        let mut config = FileConfig::default();
        config.location.timeout_ms = 0;
        config.gemini.model = String::new();

        let issues = config.validate();
        assert!(issues.iter().any(|i| i.field == "location.timeout_ms"));
        assert!(
            issues
                .iter()
                .any(|i| i.field == "gemini.model" && i.severity == Severity::Error)
        );
    }

    #[test]
    fn test_persona_config_takes_location_timeout() {
        let mut config = FileConfig::default();
        config.location.timeout_ms = 1500;
        config.persona.cafe_count = 2;

        let runtime = config.persona_config();
        assert_eq!(runtime.location_timeout, std::time::Duration::from_millis(1500));
        assert_eq!(runtime.cafe_count, 2);
    }
}
