//! System handlers (`clear`, `exit`, `cr -gui`, `cd`, unknown input).

use crate::commands::help::HELP_HINT;
use crate::commands::output::{CommandOutput, Transition};

/// Handle `clear`.
pub fn handle_clear() -> CommandOutput {
    CommandOutput::clear()
}

/// Handle `exit`.
pub fn handle_exit() -> CommandOutput {
    CommandOutput::transition(Transition::Selector)
}

/// Handle `cr -gui`.
pub fn handle_gui() -> CommandOutput {
    CommandOutput::transition(Transition::Gui)
}

/// Handle `cd` and `cd <anything>`. There is no filesystem behind the shell,
/// so every attempt is denied.
pub fn handle_change_directory(shell: &str, input: &str) -> CommandOutput {
    CommandOutput::error(format!("{shell}: {input}: Permission denied\n{HELP_HINT}"))
}

/// Handle unknown input.
pub fn handle_unknown(shell: &str, input: &str) -> CommandOutput {
    CommandOutput::error(format!("{shell}: {input}: command not found\n{HELP_HINT}"))
}
