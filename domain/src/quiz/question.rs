//! Question value object

use super::category::Category;
use serde::Serialize;

/// One selectable answer: what the user sees and what gets recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub label: &'static str,
    pub value: &'static str,
}

impl AnswerOption {
    pub const fn new(label: &'static str, value: &'static str) -> Self {
        Self { label, value }
    }
}

/// A quiz question (Value Object)
///
/// Questions are static data; each one fills exactly one [`Category`]
/// of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u8,
    pub text: &'static str,
    pub category: Category,
    pub options: &'static [AnswerOption],
}

impl Question {
    /// Look up an option by its 0-based position
    pub fn option(&self, index: usize) -> Option<&AnswerOption> {
        self.options.get(index)
    }

    /// Find the option whose recorded value is `value`
    pub fn option_by_value(&self, value: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.value == value)
    }
}
