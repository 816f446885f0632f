//! PersonaResult — everything shown on the result screen

use super::cafe::Cafe;
use super::recommendation::Recommendation;
use super::video::VideoId;
use serde::Serialize;

/// The outcome of one completed pipeline run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonaResult {
    pub recommendation: Recommendation,
    pub cafes: Vec<Cafe>,
    pub video_id: Option<VideoId>,
}

impl PersonaResult {
    pub fn new(recommendation: Recommendation, cafes: Vec<Cafe>, video_id: Option<VideoId>) -> Self {
        Self {
            recommendation,
            cafes,
            video_id,
        }
    }
}
