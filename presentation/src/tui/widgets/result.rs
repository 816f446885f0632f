//! Result screen — persona card, pairings, links and nearby cafés

use crate::links::video_embed_url;
use crate::tui::state::TuiState;
use persona_domain::Cafe;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct ResultWidget<'a> {
    state: &'a TuiState,
}

impl<'a> ResultWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn section(title: &'a str) -> Line<'a> {
        Line::from(Span::styled(
            title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
    }

    fn cafe_lines(cafe: &'a Cafe) -> Vec<Line<'a>> {
        let mut title = vec![Span::styled(
            cafe.name.as_str(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )];
        if let Some(rating) = &cafe.rating {
            title.push(Span::styled(
                format!("  ★ {}", rating),
                Style::default().fg(Color::Yellow),
            ));
        }

        let mut lines = vec![Line::from(title)];
        if !cafe.address.is_empty() {
            lines.push(Line::from(format!("  {}", cafe.address)));
        }
        if let Some(status) = &cafe.open_status {
            lines.push(Line::from(Span::styled(
                format!("  {}", status),
                Style::default().fg(Color::DarkGray),
            )));
        }
        if !cafe.maps_url.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  {}", cafe.maps_url),
                Style::default().fg(Color::Blue),
            )));
        }
        lines
    }
}

impl<'a> Widget for ResultWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(result) = self.state.controller.result() else {
            return;
        };
        let persona = &result.recommendation;
        let label = Style::default().add_modifier(Modifier::BOLD);

        let tags = persona
            .traits
            .iter()
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join(" ");

        let mut lines = vec![
            Line::from(Span::styled(
                persona.coffee_name.as_str(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::from(Span::styled(
                format!("\"{}\"", persona.tagline),
                Style::default().add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center),
            Line::from(Span::styled(tags, Style::default().fg(Color::Cyan)))
                .alignment(Alignment::Center),
            Line::from(""),
            Line::from(persona.description.as_str()),
            Line::from(""),
            Self::section("Today's advice"),
            Line::from(format!("  {}", persona.brewing_style)),
            Line::from(""),
            Self::section("Pairings"),
            Line::from(vec![
                Span::styled("  Snack: ", label),
                Span::raw(persona.snack_pairing.as_str()),
            ]),
            Line::from(vec![
                Span::styled("  Music: ", label),
                Span::raw(persona.music_pairing.as_str()),
            ]),
        ];

        if let Some(id) = &result.video_id {
            lines.push(Line::from(vec![
                Span::styled("  Video: ", label),
                Span::styled(video_embed_url(id), Style::default().fg(Color::Blue)),
            ]));
        }
        if let Some(url) = &self.state.image_url {
            lines.push(Line::from(vec![
                Span::styled("  Character: ", label),
                Span::styled(url.as_str(), Style::default().fg(Color::Blue)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Self::section("Nearby cafés"));
        if result.cafes.is_empty() {
            let note = if self.state.located {
                "  No cafés found nearby"
            } else {
                "  Location unavailable, café search skipped"
            };
            lines.push(Line::from(Span::styled(
                note,
                Style::default().fg(Color::DarkGray),
            )));
        }
        for cafe in &result.cafes {
            lines.extend(Self::cafe_lines(cafe));
        }

        if !self.state.fell_back.is_empty() {
            let names: Vec<_> = self.state.fell_back.iter().map(|s| s.as_str()).collect();
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Defaults were used for: {}", names.join(", ")),
                Style::default().fg(Color::DarkGray),
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.state.scroll, 0))
            .block(Block::default().borders(Borders::ALL).title(" 오늘의 커피 "))
            .render(area, buf);
    }
}
