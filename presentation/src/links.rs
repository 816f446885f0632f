//! Result links: character image, music video and the map

use crate::config::ImageConfig;
use persona_domain::{Recommendation, VideoId};

/// Appended to the model's visual prompt before it is sent to the image endpoint
pub const IMAGE_STYLE_SUFFIX: &str = ", 3d render, cute character design, pixar style, soft lighting, 8k resolution, white background, single character, centered --no text";

/// Character image URL with an explicit seed
pub fn character_image_url(recommendation: &Recommendation, config: &ImageConfig, seed: u64) -> String {
    let prompt = format!("{}{}", recommendation.visual_prompt, IMAGE_STYLE_SUFFIX);
    format!(
        "{}/prompt/{}?width={size}&height={size}&nologo=true&seed={seed}",
        config.endpoint.trim_end_matches('/'),
        urlencoding::encode(&prompt),
        size = config.size,
        seed = seed,
    )
}

/// Character image URL with a fresh random seed
pub fn random_character_image_url(recommendation: &Recommendation, config: &ImageConfig) -> String {
    character_image_url(recommendation, config, rand::random())
}

/// Autoplaying, muted embed player
pub fn video_embed_url(id: &VideoId) -> String {
    format!(
        "https://www.youtube.com/embed/{}?autoplay=1&mute=1&controls=1",
        id
    )
}

pub fn video_watch_url(id: &VideoId) -> String {
    format!("https://www.youtube.com/watch?v={}", id)
}
