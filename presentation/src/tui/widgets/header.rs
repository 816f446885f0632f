//! Header widget — app title, current screen and quiz progress

use crate::tui::state::TuiState;
use persona_domain::ScreenState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let screen = self.state.screen();
        let screen_color = match screen {
            ScreenState::Error => Color::Red,
            ScreenState::Result => Color::Green,
            _ => Color::Yellow,
        };

        let mut spans = vec![
            Span::styled("☕ ", Style::default().fg(Color::Yellow)),
            Span::styled(
                screen.as_str(),
                Style::default().fg(screen_color).add_modifier(Modifier::BOLD),
            ),
        ];

        if screen == ScreenState::Quiz {
            let (step, total) = self.state.controller.progress();
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("Q{}/{}", step + 1, total),
                Style::default().fg(Color::White),
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Coffee Persona ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}
