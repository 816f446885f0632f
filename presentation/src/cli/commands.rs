//! CLI command definitions

use clap::{Parser, ValueEnum};
use persona_domain::Coordinates;
use std::path::PathBuf;

/// Output format for headless results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored persona card
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for coffee-persona
#[derive(Parser, Debug)]
#[command(name = "coffee-persona")]
#[command(author, version, about = "Answer twelve questions, get today's coffee persona")]
#[command(long_about = r#"
Coffee Persona asks twelve quick questions about your mood, the weather and
your taste, then has Gemini describe the coffee that suits you today, finds
cafés nearby that serve it and a song to go with it.

Without --answers an interactive terminal UI starts. With --answers the quiz
is answered from the command line and the result is printed.

Configuration files are loaded from (in priority order):
1. COFFEE_PERSONA_* environment variables
2. --config <path>             Explicit config file
3. ./coffee-persona.toml        Project-level config
4. ~/.config/coffee-persona/config.toml   Global config

The Gemini API key is read from $GEMINI_API_KEY unless configured otherwise.

Example:
  coffee-persona
  coffee-persona --answers 1,2,1,3,1,2,3,1,2,1,3,4 --output json
  coffee-persona --location 37.5665,126.9780 --language English
"#)]
pub struct Cli {
    /// Answer the quiz non-interactively: twelve 1-based option numbers
    #[arg(short, long, value_name = "N,N,...", value_delimiter = ',', num_args = 1..)]
    pub answers: Option<Vec<usize>>,

    /// Output format for --answers
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Gemini model to use
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Language of the generated persona
    #[arg(short, long, value_name = "LANGUAGE")]
    pub language: Option<String>,

    /// Use these coordinates for the café search
    #[arg(long, value_name = "LAT,LNG", conflicts_with = "no_location")]
    pub location: Option<Coordinates>,

    /// Skip the café search
    #[arg(long)]
    pub no_location: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Whether to run without the terminal UI
    pub fn is_headless(&self) -> bool {
        self.answers.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["coffee-persona"]);
        assert!(!cli.is_headless());
        assert_eq!(cli.output, OutputFormat::Text);
        assert_eq!(cli.verbose, 0);
        assert!(cli.location.is_none());
    }

    #[test]
    fn test_answers_are_comma_separated() {
        let cli = Cli::parse_from([
            "coffee-persona",
            "--answers",
            "1,2,3,4,1,2,3,1,2,3,1,2",
            "-o",
            "json",
        ]);
        assert_eq!(cli.answers.as_ref().map(Vec::len), Some(12));
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(cli.is_headless());
    }

    #[test]
    fn test_location_is_parsed() {
        let cli = Cli::parse_from(["coffee-persona", "--location", "37.5665,126.978", "-vv"]);
        assert_eq!(cli.location, Coordinates::try_new(37.5665, 126.978));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_bad_location_is_rejected() {
        assert!(Cli::try_parse_from(["coffee-persona", "--location", "north"]).is_err());
    }

    #[test]
    fn test_location_conflicts_with_no_location() {
        assert!(
            Cli::try_parse_from(["coffee-persona", "--location", "1,2", "--no-location"]).is_err()
        );
    }
}
