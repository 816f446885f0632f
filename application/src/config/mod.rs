//! Application-level configuration.
//!
//! - [`PersonaConfig`] — language, café count, location timeout and share link
//!   used by the pipeline and share use cases

pub mod persona_config;

pub use persona_config::PersonaConfig;
