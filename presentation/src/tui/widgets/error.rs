//! Error screen

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::MainLayout;

pub struct ErrorWidget<'a> {
    state: &'a TuiState,
}

impl<'a> ErrorWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for ErrorWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled(
                "앗, 커피를 내리다 문제가 생겼어요.",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        if let Some(message) = &self.state.error_message {
            lines.push(Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            "Press r to try again",
            Style::default().fg(Color::Cyan),
        )));

        let card = MainLayout::centered(70, 50, area);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" Error "))
            .render(card, buf);
    }
}
