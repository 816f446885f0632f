//! Configuration file loading for coffee-persona
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `COFFEE_PERSONA_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./coffee-persona.toml` or `./.coffee-persona.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/coffee-persona/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileGeminiConfig, FileImageConfig, FileLocationConfig,
    FilePersonaConfig, LocationMode, Severity,
};
pub use loader::{ConfigError, ConfigLoader};
