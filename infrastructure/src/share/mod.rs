//! Share adapters for the [`ShareTarget`] port
//!
//! [`ShareTarget`]: persona_application::ShareTarget

mod osc52;

pub use osc52::TerminalClipboard;
