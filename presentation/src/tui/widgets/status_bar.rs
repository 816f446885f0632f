//! Status bar widget — key hints, or the current toast

use crate::tui::keys::KeyHandler;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);

        let line = match &self.state.flash_message {
            Some((flash, _)) => Line::from(Span::styled(
                format!(" {} ", flash),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            None => Line::from(Span::styled(
                format!("{} ", KeyHandler::hints(self.state.screen())),
                bg_style,
            )),
        };

        Paragraph::new(line)
            .alignment(Alignment::Right)
            .style(bg_style)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::render_to_string;

    #[test]
    fn test_hints_without_flash() {
        let state = TuiState::new();
        let out = render_to_string(StatusBarWidget::new(&state), 60, 1);
        assert!(out.contains("Enter:start"));
    }

    #[test]
    fn test_flash_replaces_hints() {
        let mut state = TuiState::new();
        state.set_flash("copied ok");
        let out = render_to_string(StatusBarWidget::new(&state), 60, 1);
        assert!(out.contains("copied ok"));
        assert!(!out.contains("Enter:start"));
    }
}
