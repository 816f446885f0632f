//! Infrastructure layer for coffee-persona
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod location;
pub mod share;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigIssue, ConfigLoader, FileConfig, FileGeminiConfig, FileImageConfig,
    FileLocationConfig, FilePersonaConfig, LocationMode, Severity,
};
pub use gemini::{DEFAULT_GEMINI_MODEL, GeminiModel};
pub use location::{DisabledLocation, FixedLocation, IpGeolocation};
pub use share::TerminalClipboard;
