//! Presentation layer for coffee-persona
//!
//! This crate contains CLI definitions, the terminal UI, output formatters,
//! progress reporters, and result link builders.

pub mod cli;
pub mod config;
pub mod headless;
pub mod links;
pub mod output;
pub mod progress;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::ImageConfig;
pub use headless::{AnswersError, selection_from_answers};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use tui::TuiApp;
