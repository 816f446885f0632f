//! CLI entrypoint for Coffee Persona
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use persona_application::{
    LocationProvider, NoProgress, PipelineProgress, RunPipelineUseCase, ShareResultUseCase,
};
use persona_infrastructure::{
    ConfigError, ConfigLoader, DisabledLocation, FileConfig, FixedLocation, GeminiModel,
    IpGeolocation, LocationMode, Severity, TerminalClipboard,
};
use persona_presentation::{
    Cli, ConsoleFormatter, ImageConfig, OutputFormat, ProgressReporter, SimpleProgress, TuiApp,
    selection_from_answers,
};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let _log_guard = init_logging(&cli);

    info!("Starting Coffee Persona");

    // Load configuration
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    apply_cli_overrides(&mut config, &cli);

    for issue in config.validate() {
        match issue.severity {
            Severity::Error => bail!("Invalid configuration: {}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }

    // === Dependency Injection ===
    let api_key = config
        .gemini
        .resolve_api_key()
        .ok_or_else(|| ConfigError::MissingApiKey {
            env: config.gemini.api_key_env.clone(),
        })?;
    let model = Arc::new(
        GeminiModel::new(api_key, &config.gemini.model, &config.gemini.base_url)
            .context("Failed to create Gemini client")?,
    );
    let location = location_provider(&config);
    let persona_config = config.persona_config();
    let pipeline = Arc::new(RunPipelineUseCase::new(model, location, &persona_config));
    let image = ImageConfig::new(&config.image.endpoint, config.image.size);

    // Headless mode
    if let Some(answers) = &cli.answers {
        let selection = selection_from_answers(answers)?;

        let progress: Box<dyn PipelineProgress> = if cli.quiet {
            Box::new(NoProgress)
        } else if std::io::stderr().is_terminal() {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(SimpleProgress)
        };

        let output = pipeline
            .execute_with_progress(&selection, progress.as_ref())
            .await?;

        let fell_back: Vec<&str> = output.fell_back().iter().map(|s| s.as_str()).collect();
        let result = output.into_result();

        let rendered = match cli.output {
            OutputFormat::Text => ConsoleFormatter::format(&result, &image),
            OutputFormat::Json => ConsoleFormatter::format_json(&result, &image, &fell_back),
        };
        println!("{}", rendered);
        return Ok(());
    }

    // Interactive mode
    let share = ShareResultUseCase::new(
        Arc::new(TerminalClipboard::stdout()),
        persona_config.share_url.clone(),
    );
    let mut app = TuiApp::new(pipeline, share).with_image_config(image);
    app.run().await?;

    Ok(())
}

/// Logs go to stderr in headless mode and to a daily file while the TUI owns the terminal.
fn init_logging(cli: &Cli) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    if cli.is_headless() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return None;
    }

    let log_dir = ConfigLoader::log_dir()?;
    if std::fs::create_dir_all(&log_dir).is_err() {
        return None;
    }

    let appender = tracing_appender::rolling::daily(log_dir, "coffee-persona.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Some(guard)
}

fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(model) = &cli.model {
        config.gemini.model = model.clone();
    }
    if let Some(language) = &cli.language {
        config.persona.language = language.clone();
    }
    if let Some(at) = cli.location {
        config.location.mode = "fixed".to_string();
        config.location.latitude = Some(at.latitude);
        config.location.longitude = Some(at.longitude);
    }
    if cli.no_location {
        config.location.mode = "off".to_string();
    }
}

fn location_provider(config: &FileConfig) -> Arc<dyn LocationProvider> {
    match config.location.parse_mode() {
        LocationMode::Fixed => match config.location.coordinates() {
            Some(at) => Arc::new(FixedLocation::new(at)),
            None => {
                warn!("location.mode is \"fixed\" but coordinates are missing; location disabled");
                Arc::new(DisabledLocation)
            }
        },
        LocationMode::Ip => Arc::new(IpGeolocation::new(&config.location.lookup_url)),
        LocationMode::Off => Arc::new(DisabledLocation),
    }
}
