//! TUI application — main loop
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                 pipeline task (tokio::spawn)
//!   ├─ crossterm EventStream              ├─ RunPipelineUseCase::execute_with_progress
//!   ├─ event_rx (PipelineEvent)   <───────┴─ ChannelProgress / Finished
//!   └─ tick_interval
//! ```

use super::event::{ChannelProgress, PipelineEvent};
use super::keys::{Action, KeyHandler};
use super::state::{FLASH_DURATION, TuiState};
use super::widgets::{
    MainLayout, error::ErrorWidget, header::HeaderWidget, landing::LandingWidget,
    loading::LoadingWidget, quiz::QuizWidget, result::ResultWidget, status_bar::StatusBarWidget,
};
use crate::config::ImageConfig;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use persona_application::{GenerativeModel, PipelineError, RunPipelineUseCase, ShareResultUseCase};
use persona_domain::{DomainError, ScreenState, Selection};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

/// Main TUI application
pub struct TuiApp<G: GenerativeModel + ?Sized + 'static> {
    pipeline: Arc<RunPipelineUseCase<G>>,
    share: ShareResultUseCase,
    image: ImageConfig,
    event_tx: mpsc::UnboundedSender<PipelineEvent>,
    event_rx: mpsc::UnboundedReceiver<PipelineEvent>,
}

impl<G: GenerativeModel + ?Sized + 'static> TuiApp<G> {
    pub fn new(pipeline: Arc<RunPipelineUseCase<G>>, share: ShareResultUseCase) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            pipeline,
            share,
            image: ImageConfig::default(),
            event_tx,
            event_rx,
        }
    }

    pub fn with_image_config(mut self, image: ImageConfig) -> Self {
        self.image = image;
        self
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut state = TuiState::new().with_image_config(self.image.clone());
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        loop {
            terminal.draw(|frame| Self::render(frame, &state))?;

            if state.should_quit {
                break;
            }

            tokio::select! {
                // Terminal events (keyboard, resize)
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(&mut state, term_event);
                }

                // Progress and results from the pipeline task
                Some(event) = self.event_rx.recv() => {
                    state.apply_pipeline_event(event);
                }

                // Tick for flash expiry and the loading spinner
                _ = tick.tick() => {
                    state.tick = state.tick.wrapping_add(1);
                    state.expire_flash(FLASH_DURATION);
                }
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Render all widgets
    fn render(frame: &mut ratatui::Frame, state: &TuiState) {
        let layout = MainLayout::compute(frame.area());

        frame.render_widget(HeaderWidget::new(state), layout.header);
        match state.screen() {
            ScreenState::Landing => frame.render_widget(LandingWidget, layout.body),
            ScreenState::Quiz => frame.render_widget(QuizWidget::new(state), layout.body),
            ScreenState::Loading => frame.render_widget(LoadingWidget::new(state), layout.body),
            ScreenState::Result => frame.render_widget(ResultWidget::new(state), layout.body),
            ScreenState::Error => frame.render_widget(ErrorWidget::new(state), layout.body),
        }
        frame.render_widget(StatusBarWidget::new(state), layout.status_bar);
    }

    fn handle_terminal_event(&self, state: &mut TuiState, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        let action = KeyHandler::handle(state.screen(), key);
        self.handle_action(state, action);
    }

    fn handle_action(&self, state: &mut TuiState, action: Action) {
        let outcome = match action {
            Action::Quit => {
                state.should_quit = true;
                Ok(())
            }
            Action::Start => state.start(),
            Action::Retake => state.retake(),
            Action::CursorUp => {
                state.move_cursor(false);
                Ok(())
            }
            Action::CursorDown => {
                state.move_cursor(true);
                Ok(())
            }
            Action::ChooseCursor => {
                let cursor = state.cursor;
                self.choose(state, cursor)
            }
            Action::Choose(index) => self.choose(state, index),
            Action::ScrollUp => {
                state.scroll = state.scroll.saturating_sub(1);
                Ok(())
            }
            Action::ScrollDown => {
                state.scroll = state.scroll.saturating_add(1);
                Ok(())
            }
            Action::Share(share_action) => {
                let toast = state
                    .controller
                    .result()
                    .and_then(|result| self.share.execute(share_action, &result.recommendation));
                if let Some(toast) = toast {
                    state.set_flash(toast);
                }
                Ok(())
            }
            Action::None => Ok(()),
        };

        if let Err(e) = outcome {
            debug!("Rejected action {:?}: {}", action, e);
            state.set_flash(e.to_string());
        }
    }

    fn choose(&self, state: &mut TuiState, index: usize) -> Result<(), DomainError> {
        if let Some(selection) = state.choose(index)? {
            self.spawn_pipeline(selection);
        }
        Ok(())
    }

    /// Run the pipeline on its own task; a panic there becomes an Error screen
    fn spawn_pipeline(&self, selection: Selection) {
        info!("Quiz complete, starting pipeline");
        let pipeline = self.pipeline.clone();
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let progress_tx = tx.clone();
            let worker = tokio::spawn(async move {
                let progress = ChannelProgress::new(progress_tx);
                pipeline.execute_with_progress(&selection, &progress).await
            });

            let outcome = match worker.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!("Pipeline task failed: {}", e);
                    Err(PipelineError::Aborted(e.to_string()))
                }
            };
            let _ = tx.send(PipelineEvent::Finished(outcome));
        });
    }
}
