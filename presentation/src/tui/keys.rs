//! Key bindings — maps key events to actions based on the current screen

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use persona_application::ShareAction;
use persona_domain::ScreenState;

/// Action resulting from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Landing → Quiz
    Start,
    /// Move the option cursor up
    CursorUp,
    /// Move the option cursor down
    CursorDown,
    /// Choose the option under the cursor
    ChooseCursor,
    /// Choose an option by its 0-based index
    Choose(usize),
    /// Scroll the result card
    ScrollUp,
    ScrollDown,
    /// Run a share button
    Share(ShareAction),
    /// Result/Error → Quiz
    Retake,
    /// No action
    None,
}

/// Key event handler
pub struct KeyHandler;

impl KeyHandler {
    /// Handle key event on the given screen
    pub fn handle(screen: ScreenState, key: KeyEvent) -> Action {
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            return Action::Quit;
        }

        match screen {
            ScreenState::Landing => Self::handle_landing(key),
            ScreenState::Quiz => Self::handle_quiz(key),
            ScreenState::Loading => Action::None,
            ScreenState::Result => Self::handle_result(key),
            ScreenState::Error => Self::handle_error(key),
        }
    }

    fn handle_landing(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('s') => Action::Start,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    fn handle_quiz(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('k') | KeyCode::Up => Action::CursorUp,
            KeyCode::Char('j') | KeyCode::Down => Action::CursorDown,
            KeyCode::Enter | KeyCode::Char(' ') => Action::ChooseCursor,
            KeyCode::Char(c @ '1'..='9') => Action::Choose(c as usize - '1' as usize),
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    fn handle_result(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('c') => Action::Share(ShareAction::CopyLink),
            KeyCode::Char('s') => Action::Share(ShareAction::NativeShare),
            KeyCode::Char('i') => Action::Share(ShareAction::StoryLink),
            KeyCode::Char('r') => Action::Retake,
            KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
            KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    fn handle_error(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('r') | KeyCode::Enter => Action::Retake,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    /// Key hints for the status bar
    pub fn hints(screen: ScreenState) -> &'static str {
        match screen {
            ScreenState::Landing => "Enter:start  q:quit",
            ScreenState::Quiz => "j/k:move  Enter:choose  1-4:pick  Esc:quit",
            ScreenState::Loading => "Ctrl+C:quit",
            ScreenState::Result => "c:copy link  s:share  i:story  r:retake  j/k:scroll  q:quit",
            ScreenState::Error => "r:retake  q:quit",
        }
    }
}
