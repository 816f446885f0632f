//! ScreenState value object

use serde::{Deserialize, Serialize};

/// Which view is active. Exactly one at a time; the app starts on `Landing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScreenState {
    #[default]
    Landing,
    Quiz,
    Loading,
    Result,
    Error,
}

impl ScreenState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenState::Landing => "Landing",
            ScreenState::Quiz => "Quiz",
            ScreenState::Loading => "Loading",
            ScreenState::Result => "Result",
            ScreenState::Error => "Error",
        }
    }

    /// Screens from which a new attempt can be started with "retake"
    pub fn can_retake(&self) -> bool {
        matches!(self, ScreenState::Result | ScreenState::Error)
    }
}

impl std::fmt::Display for ScreenState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
