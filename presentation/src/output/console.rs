//! Console output formatter for persona results

use crate::config::ImageConfig;
use crate::links::{random_character_image_url, video_watch_url};
use colored::Colorize;
use persona_domain::{Cafe, PersonaResult, Recommendation, VideoId};
use serde::Serialize;

/// JSON shape of a headless result
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResultDocument<'a> {
    persona: &'a Recommendation,
    cafes: &'a [Cafe],
    video_id: Option<&'a VideoId>,
    video_url: Option<String>,
    image_url: String,
    fell_back: &'a [&'a str],
}

/// Formats persona results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete result as a colored persona card
    pub fn format(result: &PersonaResult, image: &ImageConfig) -> String {
        let persona = &result.recommendation;
        let mut output = String::new();

        output.push_str(&Self::header("오늘의 커피"));
        output.push('\n');

        output.push_str(&format!("\n{}\n", persona.coffee_name.yellow().bold()));
        output.push_str(&format!("\"{}\"\n\n", persona.tagline.italic()));

        let tags: Vec<String> = persona.traits.iter().map(|t| format!("#{}", t)).collect();
        output.push_str(&format!("{}\n\n", tags.join(" ").cyan()));

        output.push_str(&format!("{}\n", Self::indent(&persona.description, "  ")));

        output.push_str(&Self::section_header("Today's advice"));
        output.push_str(&format!("  {}\n", persona.brewing_style));

        output.push_str(&Self::section_header("Pairings"));
        output.push_str(&format!("  {} {}\n", "Snack:".bold(), persona.snack_pairing));
        output.push_str(&format!("  {} {}\n", "Music:".bold(), persona.music_pairing));
        if let Some(id) = &result.video_id {
            output.push_str(&format!("  {} {}\n", "Video:".bold(), video_watch_url(id).blue()));
        }

        output.push_str(&Self::section_header("Nearby cafés"));
        if result.cafes.is_empty() {
            output.push_str(&format!("  {}\n", "No cafés found nearby".dimmed()));
        }
        for cafe in &result.cafes {
            output.push_str(&Self::format_cafe(cafe));
        }

        output.push_str(&Self::section_header("Character"));
        output.push_str(&format!(
            "  {}\n",
            random_character_image_url(persona, image).blue()
        ));

        output.push_str(&Self::footer());
        output
    }

    fn format_cafe(cafe: &Cafe) -> String {
        let mut line = format!("  {}", cafe.name.green().bold());
        if let Some(rating) = &cafe.rating {
            line.push_str(&format!(" {}", format!("★ {}", rating).yellow()));
        }
        line.push('\n');
        if !cafe.address.is_empty() {
            line.push_str(&format!("    {}\n", cafe.address));
        }
        if let Some(status) = &cafe.open_status {
            line.push_str(&format!("    {}\n", status.dimmed()));
        }
        if !cafe.maps_url.is_empty() {
            line.push_str(&format!("    {}\n", cafe.maps_url.blue()));
        }
        line
    }

    /// Format as JSON
    pub fn format_json(result: &PersonaResult, image: &ImageConfig, fell_back: &[&str]) -> String {
        let document = ResultDocument {
            persona: &result.recommendation,
            cafes: &result.cafes,
            video_id: result.video_id.as_ref(),
            video_url: result.video_id.as_ref().map(video_watch_url),
            image_url: random_character_image_url(&result.recommendation, image),
            fell_back,
        };
        serde_json::to_string_pretty(&document).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PersonaResult {
        PersonaResult::new(
            Recommendation::fallback(),
            vec![
                Cafe::new("Cafe A", "1 Main St", "https://maps.example/a")
                    .with_rating("4.5")
                    .with_open_status("Open"),
                Cafe::new("Cafe B", "2 Main St", "https://maps.example/b"),
            ],
            VideoId::try_new("dQw4w9WgXcQ"),
        )
    }

    #[test]
    fn test_format_contains_persona_and_cafes() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format(&sample(), &ImageConfig::default());

        assert!(text.contains("오늘의 믹스커피"));
        assert!(text.contains("#익숙함 #달달함 #편안함"));
        assert!(text.contains("Cafe A ★ 4.5"));
        assert!(text.contains("    Open"));
        assert!(text.contains("Cafe B\n"));
        assert!(text.contains("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
    }

    #[test]
    fn test_format_without_cafes() {
        colored::control::set_override(false);
        let result = PersonaResult::new(Recommendation::fallback(), Vec::new(), None);
        let text = ConsoleFormatter::format(&result, &ImageConfig::default());
        assert!(text.contains("No cafés found nearby"));
        assert!(!text.contains("Video:"));
    }

    #[test]
    fn test_format_json_shape() {
        let json = ConsoleFormatter::format_json(&sample(), &ImageConfig::default(), &["cafes"]);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["persona"]["coffeeName"], "오늘의 믹스커피");
        assert_eq!(value["cafes"][0]["rating"], "4.5");
        assert_eq!(value["cafes"][1]["openStatus"], serde_json::Value::Null);
        assert_eq!(value["videoId"], "dQw4w9WgXcQ");
        assert_eq!(value["fellBack"][0], "cafes");
        assert!(value["imageUrl"].as_str().unwrap().contains("seed="));
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
