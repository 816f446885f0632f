//! TUI (Text User Interface) module for coffee-persona
//!
//! Five screens (landing, quiz, loading, result, error) on a single
//! ratatui event loop; the recommendation pipeline runs on a spawned task.

mod app;
mod event;
mod keys;
mod state;
mod widgets;

pub use app::TuiApp;
pub use event::{ChannelProgress, PipelineEvent};
pub use keys::{Action, KeyHandler};
pub use state::{FLASH_DURATION, StageStatus, TuiState};
