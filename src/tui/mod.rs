//! Terminal User Interface for the portfolio.
//!
//! Provides the main TUI application loop using ratatui and crossterm.

pub mod app;
mod events;
pub mod gui;
pub mod headless;
pub mod rain;
pub mod transition;
pub mod typing;
mod ui;
pub mod widgets;

pub use app::{App, SelectorOption, View};
pub use events::Event;

use crate::config::Config;
use crate::error::{PortfolioError, Result};
use crate::loader::Loader;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use transition::AsyncMessage;

/// The main TUI application runner.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    /// Creates a new TUI instance, initializing the terminal.
    pub fn new() -> Result<Self> {
        let terminal = Self::setup_terminal()?;
        Ok(Self { terminal })
    }

    /// Sets up the terminal for TUI rendering.
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()
            .map_err(|e| PortfolioError::terminal(format!("Failed to enable raw mode: {e}")))?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|e| {
            PortfolioError::terminal(format!("Failed to enter alternate screen: {e}"))
        })?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)
            .map_err(|e| PortfolioError::terminal(format!("Failed to create terminal: {e}")))?;

        Ok(terminal)
    }

    /// Restores the terminal to its original state.
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()
            .map_err(|e| PortfolioError::terminal(format!("Failed to disable raw mode: {e}")))?;

        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .map_err(|e| PortfolioError::terminal(format!("Failed to leave alternate screen: {e}")))?;

        self.terminal
            .show_cursor()
            .map_err(|e| PortfolioError::terminal(format!("Failed to show cursor: {e}")))?;

        Ok(())
    }

    /// Runs the application until the user quits.
    pub async fn run(&mut self, config: &Config, loader: Loader) -> Result<()> {
        // Set up panic hook to restore terminal on panic
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        let mut app_state = App::new(config);

        // Channel for loader progress and completion
        let (tx, mut rx) = mpsc::channel::<AsyncMessage>(32);

        let result = self
            .run_event_loop(&mut app_state, config, &loader, tx, &mut rx)
            .await;

        // Restore panic hook
        let _ = panic::take_hook();

        result
    }

    /// The main event loop, separated for cleaner error handling.
    async fn run_event_loop(
        &mut self,
        app_state: &mut App,
        config: &Config,
        loader: &Loader,
        tx: mpsc::Sender<AsyncMessage>,
        rx: &mut mpsc::Receiver<AsyncMessage>,
    ) -> Result<()> {
        let tick_rate = config.ui.tick_rate();
        // Kept across iterations: a loader message must not drop a key the
        // blocking poll already read.
        let mut poll_task: Option<JoinHandle<Result<Event>>> = None;

        loop {
            self.terminal
                .draw(|frame| ui::render(frame, app_state))
                .map_err(|e| PortfolioError::terminal(format!("Failed to draw: {e}")))?;

            if !app_state.running {
                break;
            }

            let task = poll_task.get_or_insert_with(|| {
                tokio::task::spawn_blocking(move || events::poll(tick_rate))
            });

            let polled = tokio::select! {
                // Handle terminal events
                event_result = task => Some(event_result),

                // Handle messages from the loader task
                Some(msg) = rx.recv() => {
                    handle_async_message(msg, app_state);
                    None
                }
            };

            if let Some(event_result) = polled {
                poll_task = None;
                match event_result {
                    Ok(Ok(event)) => app_state.handle_event(event),
                    Ok(Err(e)) => return Err(e),
                    Err(e) => {
                        return Err(PortfolioError::internal(format!(
                            "Event polling task failed: {e}"
                        )))
                    }
                }
            }

            if let Some(to) = app_state.take_transition_request() {
                debug!(?to, "Spawning loader");
                transition::spawn(loader.clone(), to, tx.clone());
            }
        }

        info!("Exiting");
        Ok(())
    }
}

/// Applies a message from the loader task.
pub fn handle_async_message(msg: AsyncMessage, app_state: &mut App) {
    match msg {
        AsyncMessage::LoaderProgress(percent) => app_state.set_loader_progress(percent),
        AsyncMessage::TransitionComplete(to) => {
            if app_state.is_transitioning() {
                app_state.complete_transition(to, Instant::now());
            } else {
                warn!(?to, "Transition completed with no loader running");
            }
        }
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}

/// Runs the interactive TUI.
pub async fn run_async(config: &Config, loader: Loader) -> Result<()> {
    info!(start_view = ?config.ui.start_view, "Starting TUI");
    let mut tui = Tui::new()?;
    tui.run(config, loader).await
}
