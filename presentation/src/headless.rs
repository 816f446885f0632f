//! Non-interactive quiz answering for `--answers`

use persona_domain::{AnswerOutcome, DomainError, QUESTION_COUNT, ScreenController, Selection};
use thiserror::Error;

/// Errors in the `--answers` list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnswersError {
    #[error("expected {expected} answers, got {0}", expected = QUESTION_COUNT)]
    WrongCount(usize),

    /// An option number that is zero or past the end of its question
    #[error(transparent)]
    Invalid(DomainError),
}

/// Drive the quiz with 1-based option numbers and return the submitted selection
pub fn selection_from_answers(answers: &[usize]) -> Result<Selection, AnswersError> {
    if answers.len() != QUESTION_COUNT {
        return Err(AnswersError::WrongCount(answers.len()));
    }

    let mut controller = ScreenController::new();
    controller.start().map_err(AnswersError::Invalid)?;

    for (i, &number) in answers.iter().enumerate() {
        let index = number.checked_sub(1).ok_or(AnswersError::Invalid(
            DomainError::InvalidAnswer {
                question: (i + 1) as u8,
                index: 0,
            },
        ))?;
        if let AnswerOutcome::Submit(selection) =
            controller.answer(index).map_err(AnswersError::Invalid)?
        {
            return Ok(selection);
        }
    }

    Err(AnswersError::WrongCount(answers.len()))
}
