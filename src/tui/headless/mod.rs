//! Headless mode for scripted testing and automation.
//!
//! Runs the TUI against an in-memory terminal, executing scripted events and
//! capturing output for verification. View switches go through the same
//! loader task as the interactive UI.

mod events;
mod output;

pub use events::{Assertion, Event, EventParser};
pub use output::{render_report, screen_text, OutputFormat};

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{PortfolioError, Result};
use crate::loader::Loader;
use crate::shell::Entry;
use crate::tui::app::{App, SelectorOption, View};
use crate::tui::transition::{self, AsyncMessage};
use crate::tui::{handle_async_message, ui};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::debug;

/// Configuration for headless mode execution.
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    /// Screen width in columns.
    pub width: u16,
    /// Screen height in rows.
    pub height: u16,
    /// Output format.
    pub output_format: OutputFormat,
    /// Whether to stop on first assertion failure.
    pub fail_fast: bool,
    /// Path to write output (None = stdout).
    pub output_file: Option<std::path::PathBuf>,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
            output_format: OutputFormat::Text,
            fail_fast: false,
            output_file: None,
        }
    }
}

impl HeadlessConfig {
    /// Creates a HeadlessConfig from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let (width, height) = cli.parse_screen_size().map_err(PortfolioError::config)?;
        let output_format = cli.parse_output_format().map_err(PortfolioError::config)?;

        Ok(Self {
            width,
            height,
            output_format,
            fail_fast: cli.fail_fast,
            output_file: cli.output_file.clone(),
        })
    }
}

/// Result of headless execution.
#[derive(Debug)]
pub struct HeadlessResult {
    /// Final screen content as text.
    pub screen: String,
    /// Screen lines for JSON output.
    pub screen_lines: Vec<String>,
    /// Number of events executed.
    pub events_executed: usize,
    /// Total execution duration.
    pub duration: Duration,
    /// Number of assertions passed.
    pub assertions_passed: usize,
    /// Number of assertions failed.
    pub assertions_failed: usize,
    /// Application state snapshot.
    pub state: HeadlessState,
    /// Every block the shell printed, banner first.
    pub scrollback: Vec<Entry>,
    /// Frame captures (for frames output mode).
    pub frames: Vec<Frame>,
}

fn view_name(view: View) -> &'static str {
    match view {
        View::Selector => "selector",
        View::Terminal => "terminal",
        View::Gui => "gui",
    }
}

/// Snapshot of application state for JSON output and `state:` assertions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct HeadlessState {
    /// Visible view: selector, terminal or gui.
    pub view: String,
    /// Highlighted selector option: terminal or gui.
    pub selector: String,
    /// Current prompt text.
    pub input_text: String,
    /// Whether the shell is waiting on a view switch it started.
    pub busy: bool,
    /// Whether the loader is running.
    pub transitioning: bool,
    /// Loader percentage, if running.
    pub loader_progress: Option<u8>,
    /// Number of scrollback entries, banner included.
    pub scrollback_len: usize,
    /// Number of remembered commands.
    pub history_len: usize,
    /// History cursor position.
    pub history_cursor: usize,
    /// Whether the app is still running.
    pub running: bool,
    /// Section highlighted in the GUI navigation bar.
    pub gui_section: String,
    /// First visible GUI page row.
    pub gui_scroll: usize,
}

impl HeadlessState {
    pub fn from_app(app: &App) -> Self {
        let selector = match app.selector {
            SelectorOption::Terminal => "terminal",
            SelectorOption::Gui => "gui",
        };
        Self {
            view: view_name(app.view).to_string(),
            selector: selector.to_string(),
            input_text: app.interpreter.prompt().text().to_string(),
            busy: app.interpreter.is_busy(),
            transitioning: app.is_transitioning(),
            loader_progress: app.loader_progress,
            scrollback_len: app.interpreter.scrollback().len(),
            history_len: app.interpreter.history().len(),
            history_cursor: app.interpreter.history().cursor(),
            running: app.running,
            gui_section: app.gui.current_section().title().to_lowercase(),
            gui_scroll: app.gui.scroll(),
        }
    }

    /// Looks up a field by name for `state:` assertions.
    pub fn field(&self, name: &str) -> Option<String> {
        let value = match name {
            "view" => self.view.clone(),
            "selector" => self.selector.clone(),
            "input_text" => self.input_text.clone(),
            "busy" => self.busy.to_string(),
            "transitioning" => self.transitioning.to_string(),
            "loader_progress" => self
                .loader_progress
                .map_or_else(|| "none".to_string(), |p| p.to_string()),
            "scrollback_len" => self.scrollback_len.to_string(),
            "history_len" => self.history_len.to_string(),
            "history_cursor" => self.history_cursor.to_string(),
            "running" => self.running.to_string(),
            "gui_section" => self.gui_section.clone(),
            "gui_scroll" => self.gui_scroll.to_string(),
            _ => return None,
        };
        Some(value)
    }
}

/// A captured frame (screen state after an event).
#[derive(Debug, Clone)]
pub struct Frame {
    /// Frame number (0 = initial state).
    pub number: usize,
    /// Event that produced this frame (None for initial).
    pub event: Option<String>,
    /// Screen content.
    pub screen: String,
    /// View on screen when the frame was taken.
    pub view: &'static str,
    /// Loader percentage while a switch was running.
    pub loader_progress: Option<u8>,
}

/// Runs the TUI in headless mode.
pub struct HeadlessRunner {
    config: HeadlessConfig,
    terminal: Terminal<TestBackend>,
    app: App,
    loader: Loader,
    tx: mpsc::Sender<AsyncMessage>,
    rx: mpsc::Receiver<AsyncMessage>,
    events: Vec<Event>,
    frames: Vec<Frame>,
    start_time: Instant,
    assertions_passed: usize,
    assertions_failed: usize,
}

impl HeadlessRunner {
    /// Creates a new headless runner.
    pub fn new(config: HeadlessConfig, app_config: &Config, loader: Loader) -> Result<Self> {
        let backend = TestBackend::new(config.width, config.height);
        let terminal = Terminal::new(backend).map_err(|e| {
            PortfolioError::internal(format!("Failed to create test terminal: {e}"))
        })?;
        let (tx, rx) = mpsc::channel(32);

        Ok(Self {
            config,
            terminal,
            app: App::new(app_config),
            loader,
            tx,
            rx,
            events: Vec::new(),
            frames: Vec::new(),
            start_time: Instant::now(),
            assertions_passed: 0,
            assertions_failed: 0,
        })
    }

    /// Loads events from a string (comma-separated or newline-separated).
    pub fn load_events(&mut self, input: &str) -> Result<()> {
        self.events = EventParser::new().parse_all(input)?;
        Ok(())
    }

    /// Loads events from a script file.
    pub fn load_script(&mut self, path: &str) -> Result<()> {
        let content = if path == "-" {
            use std::io::Read;
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| PortfolioError::script(format!("Failed to read stdin: {e}")))?;
            buffer
        } else {
            std::fs::read_to_string(path).map_err(|e| {
                PortfolioError::script(format!("Failed to read script file {path}: {e}"))
            })?
        };

        self.load_events(&content)
    }

    /// Runs the headless execution and returns the result.
    pub async fn run(mut self) -> Result<HeadlessResult> {
        self.start_time = Instant::now();

        // Capture initial frame
        self.capture_frame(None)?;

        let events = std::mem::take(&mut self.events);
        let mut events_executed = 0;

        for event in events {
            let event_str = event.to_string();

            match &event {
                Event::Key(key_event) => {
                    self.app.handle_event(crate::tui::Event::Key(*key_event));
                }
                Event::Type(text) => {
                    for c in text.chars() {
                        let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
                        self.app.handle_event(crate::tui::Event::Key(key));
                        self.after_input().await;
                    }
                }
                Event::Click { column, row } => {
                    self.app.handle_event(crate::tui::Event::Click {
                        column: *column,
                        row: *row,
                    });
                }
                Event::Scroll { up } => {
                    let event = if *up {
                        crate::tui::Event::ScrollUp
                    } else {
                        crate::tui::Event::ScrollDown
                    };
                    self.app.handle_event(event);
                }
                Event::Wait(duration) => {
                    tokio::time::sleep(*duration).await;
                    self.drain_messages();
                    self.app.on_tick(Instant::now());
                }
                Event::Resize(w, h) => {
                    self.terminal
                        .resize(Rect::new(0, 0, *w, *h))
                        .map_err(|e| PortfolioError::terminal(format!("Resize failed: {e}")))?;
                    self.app.handle_event(crate::tui::Event::Resize(*w, *h));
                }
                Event::Snapshot(_name) => {
                    // Snapshots are captured as frames
                }
                Event::Assert(assertion) => {
                    self.draw()?;
                    let screen = self.render_screen();
                    let state = HeadlessState::from_app(&self.app);
                    if assertion.check(&screen, &state) {
                        self.assertions_passed += 1;
                    } else {
                        debug!(assertion = %event_str, "Assertion failed");
                        self.assertions_failed += 1;
                        if self.config.fail_fast {
                            events_executed += 1;
                            break;
                        }
                    }
                }
            }

            self.after_input().await;
            events_executed += 1;

            self.draw()?;

            if self.config.output_format == OutputFormat::Frames {
                self.capture_frame(Some(event_str))?;
            }

            if !self.app.running {
                break;
            }
        }

        // A switch still in flight finishes before the final screen
        self.settle().await;
        self.draw()?;

        let screen = self.render_screen();
        let screen_lines = screen.lines().map(String::from).collect();

        Ok(HeadlessResult {
            screen,
            screen_lines,
            events_executed,
            duration: self.start_time.elapsed(),
            assertions_passed: self.assertions_passed,
            assertions_failed: self.assertions_failed,
            state: HeadlessState::from_app(&self.app),
            scrollback: self.app.interpreter.scrollback().entries().to_vec(),
            frames: self.frames,
        })
    }

    /// Hands a requested view switch to a loader task. With a zero-length
    /// loader the switch is finished before the next event.
    async fn after_input(&mut self) {
        if let Some(to) = self.app.take_transition_request() {
            debug!(?to, "Spawning loader");
            transition::spawn(self.loader.clone(), to, self.tx.clone());
        }
        if self.loader.total_duration().is_zero() {
            self.settle().await;
        }
    }

    /// Applies every loader message already delivered.
    fn drain_messages(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            handle_async_message(msg, &mut self.app);
        }
    }

    /// Waits for a running loader to finish.
    async fn settle(&mut self) {
        self.drain_messages();
        while self.app.is_transitioning() {
            match self.rx.recv().await {
                Some(msg) => handle_async_message(msg, &mut self.app),
                None => break,
            }
        }
    }

    fn draw(&mut self) -> Result<()> {
        self.terminal
            .draw(|frame| ui::render(frame, &mut self.app))
            .map_err(|e| PortfolioError::terminal(format!("Failed to render: {e}")))?;
        Ok(())
    }

    /// Renders the current screen to a string.
    fn render_screen(&self) -> String {
        screen_text(self.terminal.backend().buffer())
    }

    /// Captures the current frame.
    fn capture_frame(&mut self, event: Option<String>) -> Result<()> {
        self.draw()?;

        let screen = self.render_screen();
        let number = self.frames.len();

        self.frames.push(Frame {
            number,
            event,
            screen,
            view: view_name(self.app.view),
            loader_progress: self.app.loader_progress,
        });

        Ok(())
    }
}

/// Runs headless mode from CLI arguments.
pub async fn run_headless(cli: &Cli, app_config: &Config, loader: Loader) -> Result<i32> {
    cli.validate_headless().map_err(PortfolioError::config)?;

    let config = HeadlessConfig::from_cli(cli)?;
    let mut runner = HeadlessRunner::new(config.clone(), app_config, loader)?;

    if let Some(ref events_str) = cli.events {
        runner.load_events(events_str)?;
    } else if let Some(ref script_path) = cli.script {
        runner.load_script(script_path)?;
    }

    let result = runner.run().await?;

    let output_str = render_report(config.output_format, &result);

    if let Some(ref path) = config.output_file {
        std::fs::write(path, &output_str)
            .map_err(|e| PortfolioError::internal(format!("Failed to write output file: {e}")))?;
    } else {
        print!("{output_str}");
    }

    // Exit code reflects assertions
    if result.assertions_failed > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}
