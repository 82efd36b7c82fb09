//! The simulated shell behind the terminal view.
//!
//! [`Interpreter`] owns the scrollback, the command history and the live
//! prompt. It resolves submitted lines against the command table and turns
//! handler output into scrollback entries. Mode switches are not performed
//! here: they are returned to the caller as a [`Transition`], and the
//! interpreter stays busy until [`Interpreter::end_transition`] is called.

pub mod completion;
pub mod history;
pub mod prompt;
pub mod scrollback;
pub mod text;

use tracing::debug;

use crate::commands::definitions::{self, CommandKind};
use crate::commands::handlers::{self, system, CommandContext};
use crate::commands::help::HELP_HINT;
use crate::commands::output::{CommandOutput, ControlAction, Transition};
use crate::config::ProfileConfig;
use crate::portfolio::HANDLE;

pub use completion::{complete, Completion};
pub use history::{CommandHistory, HistoryDirection};
pub use prompt::PromptState;
pub use scrollback::{Entry, EntryKind, Scrollback};

const MINIMIZED_NOTICE: &str =
    "[INFO] Terminal minimized. Type \"exit\" to return to selection screen.";
const MAXIMIZED_NOTICE: &str = "[INFO] Terminal maximized.";

/// The title-bar buttons of the terminal window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowControl {
    Close,
    Minimize,
    Maximize,
}

/// First scrollback entry. Survives `clear`.
pub fn banner(profile: &ProfileConfig) -> String {
    format!(
        "Welcome to {HANDLE}'s portfolio terminal ({}@{}).\n{HELP_HINT}",
        profile.user, profile.host
    )
}

/// Command interpreter state.
#[derive(Debug, Clone)]
pub struct Interpreter {
    profile: ProfileConfig,
    scrollback: Scrollback,
    history: CommandHistory,
    prompt: PromptState,
    busy: bool,
}

impl Interpreter {
    pub fn new(profile: ProfileConfig) -> Self {
        let scrollback = Scrollback::new(banner(&profile));
        Self {
            profile,
            scrollback,
            history: CommandHistory::new(),
            prompt: PromptState::new(),
            busy: false,
        }
    }

    pub fn profile(&self) -> &ProfileConfig {
        &self.profile
    }

    pub fn scrollback(&self) -> &Scrollback {
        &self.scrollback
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn prompt(&self) -> &PromptState {
        &self.prompt
    }

    pub fn prompt_mut(&mut self) -> &mut PromptState {
        &mut self.prompt
    }

    /// True while a mode switch is waiting on the loader.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Releases the busy flag once the loader has settled.
    pub fn end_transition(&mut self) {
        self.busy = false;
        self.prompt.enable();
    }

    /// Submits whatever is in the prompt (Enter).
    pub fn submit(&mut self) -> Option<Transition> {
        if self.busy {
            return None;
        }
        let raw = self.prompt.submit();
        self.execute(&raw)
    }

    /// Runs one line of input.
    ///
    /// Ignored entirely while busy. Returns the mode switch the caller has to
    /// carry out, if the command asked for one.
    pub fn execute(&mut self, raw: &str) -> Option<Transition> {
        if self.busy {
            debug!(input = raw, "Ignoring input during transition");
            return None;
        }

        let input = raw.trim();
        if input.is_empty() {
            self.prompt.reset();
            return None;
        }

        self.history.push(input);
        self.scrollback.push(
            EntryKind::CommandLine,
            format!("{} {input}", self.profile.prompt_label()),
        );

        let output = self.resolve(input);
        let transition = self.apply(output);

        self.prompt.reset();
        transition
    }

    fn resolve(&self, input: &str) -> CommandOutput {
        let ctx = CommandContext {
            shell: &self.profile.shell,
            input,
        };

        match definitions::lookup(input) {
            Some(kind) => {
                debug!(command = input, ?kind, "Dispatching command");
                handlers::dispatch(kind, &ctx)
            }
            None if definitions::is_change_directory(input) => {
                handlers::dispatch(CommandKind::ChangeDirectory, &ctx)
            }
            None => {
                debug!(command = input, "Unknown command");
                system::handle_unknown(ctx.shell, input)
            }
        }
    }

    fn apply(&mut self, output: CommandOutput) -> Option<Transition> {
        match output {
            CommandOutput::Text(text) => {
                self.scrollback.push(EntryKind::Normal, text);
                None
            }
            CommandOutput::Error(text) => {
                self.scrollback.push(EntryKind::Error, text);
                None
            }
            CommandOutput::Control(ControlAction::ClearScrollback) => {
                self.clear();
                None
            }
            CommandOutput::Control(ControlAction::Transition(to)) => Some(self.begin_transition(to)),
        }
    }

    fn begin_transition(&mut self, to: Transition) -> Transition {
        self.scrollback.push(EntryKind::Normal, to.announcement());
        self.busy = true;
        debug!(?to, "Transition requested");
        to
    }

    /// Removes every scrollback entry except the banner.
    pub fn clear(&mut self) {
        self.scrollback.clear();
    }

    /// Tab completion on the current prompt text.
    pub fn autocomplete(&mut self) {
        match complete(self.prompt.text()) {
            Completion::None => {}
            Completion::Single(name) => self.prompt.set_text(name),
            Completion::Multiple(names) => {
                self.scrollback
                    .push(EntryKind::Normal, Completion::listing(&names));
            }
        }
    }

    /// Moves through history and mirrors the selected entry into the prompt.
    pub fn navigate_history(&mut self, direction: HistoryDirection) {
        if let Some(text) = self.history.navigate(direction) {
            let text = text.to_string();
            self.prompt.set_text(text);
        }
    }

    pub fn history_up(&mut self) {
        self.navigate_history(HistoryDirection::Older);
    }

    pub fn history_down(&mut self) {
        self.navigate_history(HistoryDirection::Newer);
    }

    /// Handles a click on one of the window buttons.
    pub fn window_control(&mut self, control: WindowControl) -> Option<Transition> {
        match control {
            WindowControl::Close if self.busy => None,
            WindowControl::Close => Some(self.begin_transition(Transition::Selector)),
            WindowControl::Minimize => {
                self.scrollback.push(EntryKind::Normal, MINIMIZED_NOTICE);
                None
            }
            WindowControl::Maximize => {
                self.scrollback.push(EntryKind::Normal, MAXIMIZED_NOTICE);
                None
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(ProfileConfig::default())
    }
}
