//! Share port
//!
//! Clipboard and native share-sheet capabilities of the host platform.

use thiserror::Error;

/// Why a share or clipboard write did not happen
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    #[error("Not supported on this platform")]
    Unsupported,

    #[error("Share cancelled")]
    Cancelled,

    #[error("Share failed: {0}")]
    Failed(String),
}

/// Content handed to a share sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// Fire-and-forget platform share capabilities
pub trait ShareTarget: Send + Sync {
    /// Write text to the clipboard
    fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError>;

    /// Open the platform share sheet
    fn share(&self, payload: &SharePayload) -> Result<(), ShareError>;
}
