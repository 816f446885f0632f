//! Progress reporting for pipeline execution

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use persona_application::{PipelineProgress, PipelineStage};
use std::sync::Mutex;
use std::time::Duration;

/// Reports pipeline progress with a spinner on stderr
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub(crate) fn stage_display_name(stage: PipelineStage) -> &'static str {
        match stage {
            PipelineStage::Persona => "Brewing your persona",
            PipelineStage::LocationAndMusic => "Finding you and your song",
            PipelineStage::Cafes => "Looking for cafés nearby",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineProgress for ProgressReporter {
    fn on_stage_start(&self, stage: PipelineStage) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(Self::stage_display_name(stage));
        pb.set_message("...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_stage_complete(&self, _stage: PipelineStage, fell_back: bool) {
        let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) else {
            return;
        };
        if fell_back {
            pb.finish_with_message(format!("{}", "used a default".yellow()));
        } else {
            pb.finish_with_message(format!("{}", "done".green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl PipelineProgress for SimpleProgress {
    fn on_stage_start(&self, stage: PipelineStage) {
        eprintln!(
            "{} {}",
            "->".cyan(),
            ProgressReporter::stage_display_name(stage).bold()
        );
    }

    fn on_stage_complete(&self, _stage: PipelineStage, fell_back: bool) {
        if fell_back {
            eprintln!("  {} used a default", "!".yellow());
        } else {
            eprintln!("  {} done", "v".green());
        }
    }
}
