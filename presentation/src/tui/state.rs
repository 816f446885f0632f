//! TUI state — everything the widgets render

use super::event::PipelineEvent;
use crate::config::ImageConfig;
use crate::links::random_character_image_url;
use persona_application::{PipelineError, PipelineOutput, PipelineStage};
use persona_domain::{AnswerOutcome, DomainError, ScreenController, ScreenState, Selection};
use std::time::{Duration, Instant};

/// How long a toast stays in the status bar
pub const FLASH_DURATION: Duration = Duration::from_secs(3);

/// Loading-screen status of one pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Running,
    Done,
    FellBack,
}

pub struct TuiState {
    pub controller: ScreenController,
    /// Highlighted option on the quiz screen
    pub cursor: usize,
    /// Toast text and when it was shown
    pub flash_message: Option<(String, Instant)>,
    pub stages: Vec<(PipelineStage, StageStatus)>,
    /// Stages that substituted a default in the last run
    pub fell_back: Vec<PipelineStage>,
    /// Character image link, seeded once per result
    pub image_url: Option<String>,
    /// Whether the last run had a position to search cafés around
    pub located: bool,
    pub error_message: Option<String>,
    pub scroll: u16,
    /// Advances on every tick, drives the loading spinner
    pub tick: usize,
    pub should_quit: bool,
    image: ImageConfig,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            controller: ScreenController::new(),
            cursor: 0,
            flash_message: None,
            stages: Vec::new(),
            fell_back: Vec::new(),
            image_url: None,
            located: false,
            error_message: None,
            scroll: 0,
            tick: 0,
            should_quit: false,
            image: ImageConfig::default(),
        }
    }

    pub fn with_image_config(mut self, image: ImageConfig) -> Self {
        self.image = image;
        self
    }

    pub fn screen(&self) -> ScreenState {
        self.controller.screen()
    }

    // ==================== Quiz ====================

    pub fn start(&mut self) -> Result<(), DomainError> {
        self.controller.start()?;
        self.reset_attempt();
        Ok(())
    }

    pub fn retake(&mut self) -> Result<(), DomainError> {
        self.controller.retake()?;
        self.reset_attempt();
        Ok(())
    }

    fn reset_attempt(&mut self) {
        self.cursor = 0;
        self.scroll = 0;
        self.stages.clear();
        self.fell_back.clear();
        self.image_url = None;
        self.located = false;
        self.error_message = None;
    }

    pub fn move_cursor(&mut self, down: bool) {
        let Some(question) = self.controller.current_question() else {
            return;
        };
        let last = question.options.len().saturating_sub(1);
        self.cursor = if down {
            (self.cursor + 1).min(last)
        } else {
            self.cursor.saturating_sub(1)
        };
    }

    /// Answer the current question; returns the selection once the quiz is complete
    pub fn choose(&mut self, option_index: usize) -> Result<Option<Selection>, DomainError> {
        match self.controller.answer(option_index)? {
            AnswerOutcome::Next(_) => {
                self.cursor = 0;
                Ok(None)
            }
            AnswerOutcome::Submit(selection) => {
                self.stages.clear();
                Ok(Some(selection))
            }
        }
    }

    // ==================== Pipeline ====================

    pub fn apply_pipeline_event(&mut self, event: PipelineEvent) {
        match event {
            PipelineEvent::StageStarted(stage) => {
                self.stages.push((stage, StageStatus::Running));
            }
            PipelineEvent::StageFinished { stage, fell_back } => {
                let status = if fell_back {
                    StageStatus::FellBack
                } else {
                    StageStatus::Done
                };
                if let Some(entry) = self.stages.iter_mut().find(|(s, _)| *s == stage) {
                    entry.1 = status;
                }
            }
            PipelineEvent::Finished(outcome) => self.finish(outcome),
        }
    }

    fn finish(&mut self, outcome: Result<PipelineOutput, PipelineError>) {
        let applied = match outcome {
            Ok(output) => {
                self.fell_back = output.fell_back();
                self.located = output.located;
                let result = output.into_result();
                self.image_url = Some(random_character_image_url(&result.recommendation, &self.image));
                self.controller.complete(result)
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
                self.controller.fail()
            }
        };
        if let Err(e) = applied {
            tracing::warn!("Ignoring pipeline result: {}", e);
        }
    }

    // ==================== Flash ====================

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() >= max_age
        {
            self.flash_message = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use persona_domain::{Category, Generated, QUESTION_COUNT, Recommendation, VideoId};

    fn answered_state() -> (TuiState, Selection) {
        let mut state = TuiState::new();
        state.start().unwrap();
        for _ in 0..QUESTION_COUNT - 1 {
            assert_eq!(state.choose(0).unwrap(), None);
        }
        let selection = state.choose(0).unwrap().unwrap();
        (state, selection)
    }

    fn output() -> PipelineOutput {
        PipelineOutput {
            recommendation: Generated::Fresh(Recommendation::fallback()),
            cafes: Generated::Fallback(Vec::new()),
            video_id: VideoId::try_new("dQw4w9WgXcQ"),
            located: true,
        }
    }

    #[test]
    fn test_twelve_answers_submit_complete_selection() {
        let (state, selection) = answered_state();
        assert_eq!(state.screen(), ScreenState::Loading);
        assert!(selection.is_complete());
        assert!(!selection.get(Category::Vibe).is_empty());
    }

    #[test]
    fn test_cursor_is_clamped_to_options() {
        let mut state = TuiState::new();
        state.start().unwrap();
        for _ in 0..10 {
            state.move_cursor(true);
        }
        assert_eq!(state.cursor, 3);
        state.move_cursor(false);
        assert_eq!(state.cursor, 2);

        state.choose(state.cursor).unwrap();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_invalid_choice_keeps_question() {
        let mut state = TuiState::new();
        state.start().unwrap();
        assert!(state.choose(8).is_err());
        assert_eq!(state.controller.question_index(), 0);
    }

    #[test]
    fn test_stage_events_update_loading_list() {
        let (mut state, _) = answered_state();
        state.apply_pipeline_event(PipelineEvent::StageStarted(PipelineStage::Persona));
        state.apply_pipeline_event(PipelineEvent::StageFinished {
            stage: PipelineStage::Persona,
            fell_back: true,
        });
        state.apply_pipeline_event(PipelineEvent::StageStarted(PipelineStage::LocationAndMusic));

        assert_eq!(
            state.stages,
            vec![
                (PipelineStage::Persona, StageStatus::FellBack),
                (PipelineStage::LocationAndMusic, StageStatus::Running),
            ]
        );
    }

    #[test]
    fn test_finished_shows_result() {
        let (mut state, _) = answered_state();
        state.apply_pipeline_event(PipelineEvent::Finished(Ok(output())));

        assert_eq!(state.screen(), ScreenState::Result);
        assert_eq!(state.fell_back, vec![PipelineStage::Cafes]);
        assert!(state.located);
        assert!(state.image_url.as_deref().unwrap().contains("seed="));
        let result = state.controller.result().unwrap();
        assert_eq!(result.recommendation, Recommendation::fallback());
    }

    #[test]
    fn test_failure_shows_error_and_retake_resets() {
        let (mut state, _) = answered_state();
        state.apply_pipeline_event(PipelineEvent::Finished(Err(PipelineError::Aborted(
            "task panicked".to_string(),
        ))));
        assert_eq!(state.screen(), ScreenState::Error);
        assert!(state.error_message.as_deref().unwrap().contains("task panicked"));

        state.retake().unwrap();
        assert_eq!(state.screen(), ScreenState::Quiz);
        assert!(state.error_message.is_none());
        assert!(state.controller.selection().missing().len() == QUESTION_COUNT);
    }

    #[test]
    fn test_retake_after_result_clears_everything() {
        let (mut state, _) = answered_state();
        state.apply_pipeline_event(PipelineEvent::Finished(Ok(output())));
        state.scroll = 5;

        state.retake().unwrap();
        assert!(state.controller.result().is_none());
        assert!(state.image_url.is_none());
        assert!(state.fell_back.is_empty());
        assert!(!state.located);
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn test_flash_message() {
        let mut state = TuiState::new();
        state.set_flash("copied");
        assert!(state.flash_message.is_some());

        state.expire_flash(FLASH_DURATION);
        assert!(state.flash_message.is_some());

        state.expire_flash(Duration::ZERO);
        assert!(state.flash_message.is_none());
    }
}
