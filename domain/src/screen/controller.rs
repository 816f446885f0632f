//! Screen controller — the quiz state machine
//!
//! ```text
//!            start                 12th answer           pipeline ok
//! Landing ─────────> Quiz ──(answer)──> Loading ──────────────> Result
//!                     ^  └─┘ (1..11)       │                      │
//!                     │                    └──── pipeline err ──> Error
//!                     └──────────────── retake ───────────────────┘
//! ```
//!
//! The controller exclusively owns the [`Selection`] and the last
//! [`PersonaResult`]; both are replaced wholesale when a new attempt starts.

use crate::core::error::DomainError;
use crate::persona::result::PersonaResult;
use crate::quiz::catalog::{self, QUESTION_COUNT};
use crate::quiz::question::Question;
use crate::quiz::selection::Selection;
use crate::screen::state::ScreenState;

/// What happened after an answer was recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Moved on to the question at this 0-based index
    Next(usize),
    /// That was the last question; submit this complete selection
    Submit(Selection),
}

/// Drives which screen is shown and what state belongs to the attempt
#[derive(Debug, Clone, Default)]
pub struct ScreenController {
    screen: ScreenState,
    question_index: usize,
    selection: Selection,
    result: Option<PersonaResult>,
}

impl ScreenController {
    /// A controller on the landing screen
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> ScreenState {
        self.screen
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn result(&self) -> Option<&PersonaResult> {
        self.result.as_ref()
    }

    /// The question being asked, while on the quiz screen
    pub fn current_question(&self) -> Option<&'static Question> {
        if self.screen == ScreenState::Quiz {
            catalog::question_at(self.question_index)
        } else {
            None
        }
    }

    /// `(answered, total)` for the progress bar
    pub fn progress(&self) -> (usize, usize) {
        (self.question_index, QUESTION_COUNT)
    }

    /// Landing → Quiz
    pub fn start(&mut self) -> Result<(), DomainError> {
        self.expect(ScreenState::Landing, "start")?;
        self.begin_attempt();
        Ok(())
    }

    /// Result/Error → Quiz, with the same reset as [`start`](Self::start)
    pub fn retake(&mut self) -> Result<(), DomainError> {
        if !self.screen.can_retake() {
            return Err(DomainError::InvalidTransition {
                from: self.screen,
                action: "retake",
            });
        }
        self.begin_attempt();
        Ok(())
    }

    /// Record the option at `option_index` for the current question.
    ///
    /// Advances to the next question, or moves to Loading after the last one
    /// and hands back the complete selection.
    pub fn answer(&mut self, option_index: usize) -> Result<AnswerOutcome, DomainError> {
        self.expect(ScreenState::Quiz, "answer")?;

        let question = catalog::question_at(self.question_index).ok_or(
            DomainError::InvalidTransition {
                from: self.screen,
                action: "answer",
            },
        )?;
        let option = question
            .option(option_index)
            .ok_or(DomainError::InvalidAnswer {
                question: question.id,
                index: option_index,
            })?;

        self.selection.set(question.category, option.value);

        if self.question_index < QUESTION_COUNT - 1 {
            self.question_index += 1;
            return Ok(AnswerOutcome::Next(self.question_index));
        }

        if !self.selection.is_complete() {
            return Err(DomainError::IncompleteSelection(
                self.selection.missing().len(),
            ));
        }

        self.screen = ScreenState::Loading;
        Ok(AnswerOutcome::Submit(self.selection.clone()))
    }

    /// Loading → Result
    pub fn complete(&mut self, result: PersonaResult) -> Result<(), DomainError> {
        self.expect(ScreenState::Loading, "show a result")?;
        self.result = Some(result);
        self.screen = ScreenState::Result;
        Ok(())
    }

    /// Loading → Error
    pub fn fail(&mut self) -> Result<(), DomainError> {
        self.expect(ScreenState::Loading, "show an error")?;
        self.screen = ScreenState::Error;
        Ok(())
    }

    fn begin_attempt(&mut self) {
        self.screen = ScreenState::Quiz;
        self.question_index = 0;
        self.selection = Selection::new();
        self.result = None;
    }

    fn expect(&self, screen: ScreenState, action: &'static str) -> Result<(), DomainError> {
        if self.screen == screen {
            Ok(())
        } else {
            Err(DomainError::InvalidTransition {
                from: self.screen,
                action,
            })
        }
    }
}
