//! Clipboard writes through the OSC 52 terminal escape sequence
//!
//! Works over SSH and inside tmux (with `set-clipboard on`) since the
//! terminal emulator, not the host, owns the clipboard.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use persona_application::{ShareError, SharePayload, ShareTarget};
use std::io::{self, Write};
use std::sync::Mutex;
use tracing::debug;

/// Clipboard via the controlling terminal; there is no share sheet.
pub struct TerminalClipboard<W: Write + Send = io::Stdout> {
    out: Mutex<W>,
}

impl TerminalClipboard {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalClipboard<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

impl<W: Write + Send> ShareTarget for TerminalClipboard<W> {
    fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| ShareError::Failed("terminal writer poisoned".to_string()))?;
        out.write_all(osc52_sequence(text).as_bytes())
            .and_then(|()| out.flush())
            .map_err(|e| ShareError::Failed(e.to_string()))?;
        debug!("Copied {} bytes via OSC 52", text.len());
        Ok(())
    }

    fn share(&self, _payload: &SharePayload) -> Result<(), ShareError> {
        Err(ShareError::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_writes_escape_sequence() {
        let clipboard = TerminalClipboard::new(Vec::new());
        clipboard.copy_to_clipboard("hi").unwrap();

        let written = String::from_utf8(clipboard.into_inner()).unwrap();
        assert_eq!(written, "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn test_share_sheet_is_unsupported() {
        let clipboard = TerminalClipboard::new(Vec::new());
        let payload = SharePayload {
            title: "t".to_string(),
            text: "x".to_string(),
            url: "u".to_string(),
        };
        assert_eq!(clipboard.share(&payload), Err(ShareError::Unsupported));
    }
}
