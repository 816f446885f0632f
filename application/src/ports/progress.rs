//! Progress notification port
//!
//! Defines the interface for reporting progress while the pipeline runs.

/// A step of the recommendation pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    /// Generating the persona
    Persona,
    /// Locating the device and finding the music video, concurrently
    LocationAndMusic,
    /// Searching for nearby cafés
    Cafes,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Persona => "persona",
            PipelineStage::LocationAndMusic => "location & music",
            PipelineStage::Cafes => "cafes",
        }
    }
}

/// Callback for progress updates during a pipeline run
///
/// Implementations live in the presentation layer (TUI loading screen,
/// console spinner).
pub trait PipelineProgress: Send + Sync {
    /// Called when a stage starts
    fn on_stage_start(&self, stage: PipelineStage);

    /// Called when a stage finishes; `fell_back` is true when a default was substituted
    fn on_stage_complete(&self, _stage: PipelineStage, _fell_back: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl PipelineProgress for NoProgress {
    fn on_stage_start(&self, _stage: PipelineStage) {}
}
