//! Response parsing for persona, café and video lookups.
//!
//! These functions turn free-form model output into domain values. They are
//! pure domain logic — no I/O, just text and JSON handling.
//!
//! | Function | Input shape |
//! |----------|-------------|
//! | [`parse_recommendation`] | JSON object, possibly wrapped in a code fence |
//! | [`parse_cafe_list`] | JSON array somewhere in free text |
//! | [`extract_video_id`] | Text containing a YouTube URL |

use super::cafe::Cafe;
use super::recommendation::Recommendation;
use super::video::VideoId;
use crate::core::error::ParseError;
use regex::Regex;
use std::sync::LazyLock;

static JSON_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```json\n(.*?)\n```").expect("valid regex"));

static ANY_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").expect("valid regex"));

static YOUTUBE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#,
    )
    .expect("valid regex")
});

/// Strip a surrounding markdown code fence (```` ```json ```` or ```` ``` ````).
///
/// Text without a fence is returned trimmed.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let without_close = without_open.trim_end().strip_suffix("```").unwrap_or(without_open);
    without_close.trim()
}

/// Parse the structured persona response.
pub fn parse_recommendation(text: &str) -> Result<Recommendation, ParseError> {
    let body = strip_code_fence(text);
    if body.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(serde_json::from_str(body)?)
}

/// Locate the JSON array inside a free-text café response.
///
/// 1. A ```` ```json ```` fenced block, else any fenced block, else the whole text
/// 2. Narrowed to the first `[` through the last `]`
fn locate_json_array(text: &str) -> &str {
    let candidate = JSON_FENCE
        .captures(text)
        .or_else(|| ANY_FENCE.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .unwrap_or_else(|| text.trim());

    match (candidate.find('['), candidate.rfind(']')) {
        (Some(start), Some(end)) if start < end => &candidate[start..=end],
        _ => candidate,
    }
}

/// Parse the café array from a free-text response.
///
/// Entries that are not café objects (e.g. missing a name) are skipped;
/// the order of the remaining entries is preserved.
pub fn parse_cafe_list(text: &str) -> Result<Vec<Cafe>, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let value: serde_json::Value = serde_json::from_str(locate_json_array(text))?;
    let items = value.as_array().ok_or(ParseError::NotAnArray)?;

    Ok(items
        .iter()
        .filter_map(|item| serde_json::from_value::<Cafe>(item.clone()).ok())
        .filter(|cafe| !cafe.name.trim().is_empty())
        .collect())
}

/// Extract the video id from common YouTube URL shapes
/// (`watch?v=`, `youtu.be/`, `embed/`, `v/`).
///
/// The first URL carrying a well-formed id wins.
pub fn extract_video_id(text: &str) -> Option<VideoId> {
    YOUTUBE_ID
        .captures_iter(text)
        .find_map(|caps| VideoId::try_new(&caps[1]))
}
