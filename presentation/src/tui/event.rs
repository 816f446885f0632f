//! TUI event types
//!
//! Events coming back from the pipeline task, and the progress bridge that
//! produces them.

use persona_application::{PipelineError, PipelineOutput, PipelineProgress, PipelineStage};
use tokio::sync::mpsc;

/// Events emitted by the pipeline task for rendering
#[derive(Debug)]
pub enum PipelineEvent {
    StageStarted(PipelineStage),
    StageFinished {
        stage: PipelineStage,
        fell_back: bool,
    },
    Finished(Result<PipelineOutput, PipelineError>),
}

/// Bridge from [`PipelineProgress`] callbacks to the event channel
pub struct ChannelProgress {
    tx: mpsc::UnboundedSender<PipelineEvent>,
}

impl ChannelProgress {
    pub fn new(tx: mpsc::UnboundedSender<PipelineEvent>) -> Self {
        Self { tx }
    }

    fn emit(&self, event: PipelineEvent) {
        let _ = self.tx.send(event);
    }
}

impl PipelineProgress for ChannelProgress {
    fn on_stage_start(&self, stage: PipelineStage) {
        self.emit(PipelineEvent::StageStarted(stage));
    }

    fn on_stage_complete(&self, stage: PipelineStage, fell_back: bool) {
        self.emit(PipelineEvent::StageFinished { stage, fell_back });
    }
}
