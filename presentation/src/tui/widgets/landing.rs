//! Landing screen

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::MainLayout;

pub struct LandingWidget;

impl Widget for LandingWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "오늘의 커피",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("12가지 질문에 답하고"),
            Line::from("오늘 나에게 딱 맞는 커피를 찾아보세요."),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to start",
                Style::default().fg(Color::Cyan),
            )),
        ];

        let card = MainLayout::centered(60, 60, area);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL))
            .render(card, buf);
    }
}
