//! Character image settings from TOML (`[image]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileImageConfig {
    /// Text-to-image endpoint; the prompt is appended as `/prompt/<text>`.
    pub endpoint: String,
    /// Square image size in pixels (default: 1024).
    pub size: u32,
}

impl Default for FileImageConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://image.pollinations.ai".to_string(),
            size: 1024,
        }
    }
}
