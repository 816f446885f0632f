//! Loading screen — spinner and pipeline stage list

use crate::progress::reporter::ProgressReporter;
use crate::tui::state::{StageStatus, TuiState};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::MainLayout;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct LoadingWidget<'a> {
    state: &'a TuiState,
}

impl<'a> LoadingWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for LoadingWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spinner = SPINNER[self.state.tick % SPINNER.len()];

        let mut lines = vec![
            Line::from(Span::styled(
                "당신만을 위한 커피를 내리는 중...",
                Style::default().fg(Color::Yellow),
            )),
            Line::from(""),
        ];

        for (stage, status) in &self.state.stages {
            let (icon, color) = match status {
                StageStatus::Running => (spinner, Color::Yellow),
                StageStatus::Done => ("✓", Color::Green),
                StageStatus::FellBack => ("!", Color::Red),
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", icon), Style::default().fg(color)),
                Span::raw(ProgressReporter::stage_display_name(*stage)),
            ]));
        }

        let card = MainLayout::centered(60, 50, area);
        Paragraph::new(lines)
            .alignment(Alignment::Left)
            .block(Block::default().borders(Borders::ALL).title(" Loading "))
            .render(card, buf);
    }
}
