//! Quiz screen — progress bar, question and options

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget, Wrap},
};

pub struct QuizWidget<'a> {
    state: &'a TuiState,
}

impl<'a> QuizWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for QuizWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(question) = self.state.controller.current_question() else {
            return;
        };
        let (answered, total) = self.state.controller.progress();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(area);

        Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" Progress "))
            .gauge_style(Style::default().fg(Color::Yellow))
            .ratio(answered as f64 / total as f64)
            .label(format!("{} / {}", answered + 1, total))
            .render(chunks[0], buf);

        let mut lines = vec![
            Line::from(Span::styled(
                question.text,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (i, option) in question.options.iter().enumerate() {
            let selected = i == self.state.cursor;
            let marker = if selected { "▶" } else { " " };
            let style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", marker), Style::default().fg(Color::Yellow)),
                Span::styled(format!(" {}. {} ", i + 1, option.label), style),
            ]));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Question {} ", question.id)),
            )
            .render(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::render_to_string;

    #[test]
    fn test_renders_progress_and_numbered_options() {
        let mut state = TuiState::new();
        state.start().unwrap();
        state.choose(0).unwrap();

        let out = render_to_string(QuizWidget::new(&state), 80, 14);
        assert!(out.contains("2 / 12"));
        assert!(out.contains("Question 2"));
        assert!(out.contains("1."));
        assert!(out.contains("▶"));
    }

    #[test]
    fn test_renders_nothing_off_quiz() {
        let state = TuiState::new();
        let out = render_to_string(QuizWidget::new(&state), 40, 6);
        assert!(out.trim().is_empty());
    }
}
