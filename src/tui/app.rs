//! Application state for the TUI.
//!
//! Contains the main App struct: which view is visible, the shell behind the
//! terminal view, the GUI page state and the loader overlay.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use tracing::{debug, info};

use super::events::Event;
use super::gui::{GuiState, Section};
use super::rain::MatrixRain;
use super::typing::TypingClock;
use crate::commands::Transition;
use crate::config::{Config, StartView};
use crate::portfolio::ROLES;
use crate::shell::{Interpreter, WindowControl};

/// Which view is visible. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Selector,
    Terminal,
    Gui,
}

impl From<StartView> for View {
    fn from(view: StartView) -> Self {
        match view {
            StartView::Selector => Self::Selector,
            StartView::Terminal => Self::Terminal,
            StartView::Gui => Self::Gui,
        }
    }
}

impl From<Transition> for View {
    fn from(transition: Transition) -> Self {
        match transition {
            Transition::Gui => Self::Gui,
            Transition::Selector => Self::Selector,
        }
    }
}

/// The two choices on the selector screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorOption {
    #[default]
    Terminal,
    Gui,
}

impl SelectorOption {
    pub fn other(self) -> Self {
        match self {
            Self::Terminal => Self::Gui,
            Self::Gui => Self::Terminal,
        }
    }

    pub fn view(self) -> View {
        match self {
            Self::Terminal => View::Terminal,
            Self::Gui => View::Gui,
        }
    }
}

/// Clickable regions recorded by the last render.
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    pub controls: Vec<(WindowControl, Rect)>,
    pub options: Vec<(SelectorOption, Rect)>,
    pub sections: Vec<(Section, Rect)>,
}

fn contains(rect: &Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

fn find_hit<T: Copy>(areas: &[(T, Rect)], column: u16, row: u16) -> Option<T> {
    areas
        .iter()
        .find(|(_, rect)| contains(rect, column, row))
        .map(|(item, _)| *item)
}

/// Main application state.
pub struct App {
    /// Whether the application is still running.
    pub running: bool,
    /// Visible view.
    pub view: View,
    /// Highlighted option on the selector screen.
    pub selector: SelectorOption,
    /// The shell behind the terminal view. Lives for the whole session.
    pub interpreter: Interpreter,
    /// Scroll state of the GUI page.
    pub gui: GuiState,
    /// Typewriter line on the GUI home section.
    pub typing: TypingClock,
    /// Backdrop behind the selector cards.
    pub rain: MatrixRain,
    /// Loader progress while a transition is in flight.
    pub loader_progress: Option<u8>,
    /// Scrollback offset in rows from the bottom.
    pub terminal_scroll: usize,
    /// Regions for mouse hit-testing, refreshed on every render.
    pub hit_areas: HitAreas,
    pending_transition: Option<View>,
}

impl App {
    /// Creates a new App instance.
    pub fn new(config: &Config) -> Self {
        let view = View::from(config.ui.start_view);
        Self {
            running: true,
            view,
            selector: SelectorOption::default(),
            interpreter: Interpreter::new(config.profile.clone()),
            gui: GuiState::new(),
            typing: TypingClock::start(ROLES, Instant::now()),
            rain: MatrixRain::default(),
            loader_progress: None,
            terminal_scroll: 0,
            hit_areas: HitAreas::default(),
            pending_transition: None,
        }
    }

    /// True while the loader runs.
    pub fn is_transitioning(&self) -> bool {
        self.loader_progress.is_some()
    }

    /// Starts a view switch. Ignored if one is already in flight.
    pub fn request_transition(&mut self, to: View) -> bool {
        if self.is_transitioning() {
            debug!(?to, "Transition already in flight");
            return false;
        }
        info!(from = ?self.view, ?to, "Starting transition");
        self.loader_progress = Some(0);
        self.pending_transition = Some(to);
        true
    }

    /// Hands the requested transition to whoever runs the loader.
    pub fn take_transition_request(&mut self) -> Option<View> {
        self.pending_transition.take()
    }

    pub fn set_loader_progress(&mut self, percent: u8) {
        if self.is_transitioning() {
            self.loader_progress = Some(percent);
        }
    }

    /// Called once the loader has settled: switch views and release the
    /// shell's busy flag.
    pub fn complete_transition(&mut self, to: View, now: Instant) {
        info!(?to, "Transition complete");
        self.loader_progress = None;
        self.view = to;
        self.interpreter.end_transition();

        match to {
            View::Gui => {
                self.gui.scroll_to_top();
                self.typing = TypingClock::start(ROLES, now);
            }
            View::Terminal => self.terminal_scroll = 0,
            View::Selector => {}
        }
    }

    /// Advances time-driven state.
    pub fn on_tick(&mut self, now: Instant) {
        match self.view {
            View::Gui => self.typing.advance(now),
            View::Selector => self.rain.advance(now),
            View::Terminal => {}
        }
    }

    /// Handles an event and updates application state.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Click { column, row } => self.handle_click(column, row),
            Event::ScrollUp => self.scroll(true),
            Event::ScrollDown => self.scroll(false),
            Event::Resize(_, _) => {
                // Layout is recomputed on the next render
            }
            Event::Tick => self.on_tick(Instant::now()),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            self.running = false;
            return;
        }

        match self.view {
            View::Selector => self.handle_selector_key(key),
            View::Terminal => self.handle_terminal_key(key),
            View::Gui => self.handle_gui_key(key),
        }
    }

    fn handle_selector_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
                self.selector = self.selector.other();
            }
            KeyCode::Enter => self.choose(self.selector),
            KeyCode::Char('t') => self.choose(SelectorOption::Terminal),
            KeyCode::Char('g') => self.choose(SelectorOption::Gui),
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            _ => {}
        }
    }

    fn choose(&mut self, option: SelectorOption) {
        if self.request_transition(option.view()) {
            self.selector = option;
        }
    }

    fn handle_terminal_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Enter => {
                self.terminal_scroll = 0;
                if let Some(transition) = self.interpreter.submit() {
                    self.request_transition(transition.into());
                }
            }
            KeyCode::Tab => self.interpreter.autocomplete(),
            KeyCode::Up => self.interpreter.history_up(),
            KeyCode::Down => self.interpreter.history_down(),
            KeyCode::PageUp => self.terminal_scroll = self.terminal_scroll.saturating_add(10),
            KeyCode::PageDown => self.terminal_scroll = self.terminal_scroll.saturating_sub(10),
            KeyCode::F(2) => self.press_window_control(WindowControl::Close),
            KeyCode::F(3) => self.press_window_control(WindowControl::Minimize),
            KeyCode::F(4) => self.press_window_control(WindowControl::Maximize),
            KeyCode::Char('w') if ctrl => self.interpreter.prompt_mut().delete_word_backward(),
            KeyCode::Char('u') if ctrl => self.interpreter.prompt_mut().delete_to_start(),
            KeyCode::Char('d') if alt => self.interpreter.prompt_mut().delete_word_forward(),
            KeyCode::Char('a') if ctrl => self.interpreter.prompt_mut().move_home(),
            KeyCode::Char('e') if ctrl => self.interpreter.prompt_mut().move_end(),
            KeyCode::Char(_) if ctrl || alt => {}
            KeyCode::Char(c) => self.interpreter.prompt_mut().insert(c),
            KeyCode::Backspace => self.interpreter.prompt_mut().backspace(),
            KeyCode::Delete => self.interpreter.prompt_mut().delete(),
            KeyCode::Left => self.interpreter.prompt_mut().move_left(),
            KeyCode::Right => self.interpreter.prompt_mut().move_right(),
            KeyCode::Home => self.interpreter.prompt_mut().move_home(),
            KeyCode::End => self.interpreter.prompt_mut().move_end(),
            _ => {}
        }
    }

    fn press_window_control(&mut self, control: WindowControl) {
        self.terminal_scroll = 0;
        if let Some(transition) = self.interpreter.window_control(control) {
            self.request_transition(transition.into());
        }
    }

    fn handle_gui_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(section) = Section::from_digit(c) {
                    self.gui.jump_to(section);
                }
            }
            KeyCode::Char('t') => {
                self.request_transition(View::Terminal);
            }
            KeyCode::Char('q') => self.running = false,
            KeyCode::Up | KeyCode::Char('k') => self.gui.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.gui.scroll_down(1),
            KeyCode::PageUp => self.gui.page_up(),
            KeyCode::PageDown | KeyCode::Char(' ') => self.gui.page_down(),
            KeyCode::Home => self.gui.scroll_to_top(),
            KeyCode::End => self.gui.scroll_to_bottom(),
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        match self.view {
            View::Terminal => {
                if let Some(control) = find_hit(&self.hit_areas.controls, column, row) {
                    self.press_window_control(control);
                }
            }
            View::Selector => {
                if let Some(option) = find_hit(&self.hit_areas.options, column, row) {
                    self.choose(option);
                }
            }
            View::Gui => {
                if let Some(section) = find_hit(&self.hit_areas.sections, column, row) {
                    self.gui.jump_to(section);
                }
            }
        }
    }

    fn scroll(&mut self, up: bool) {
        match (self.view, up) {
            (View::Terminal, true) => self.terminal_scroll = self.terminal_scroll.saturating_add(3),
            (View::Terminal, false) => self.terminal_scroll = self.terminal_scroll.saturating_sub(3),
            (View::Gui, true) => self.gui.scroll_up(3),
            (View::Gui, false) => self.gui.scroll_down(3),
            (View::Selector, _) => {}
        }
    }
}
