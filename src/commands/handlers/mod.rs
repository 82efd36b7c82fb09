//! Command handlers.
//!
//! Each handler is a pure function producing a [`CommandOutput`]; none of
//! them touch interpreter state directly.

pub mod content;
pub mod system;

use super::definitions::CommandKind;
use super::output::CommandOutput;

/// Context provided to command handlers.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext<'a> {
    /// Shell name used as the error prefix (`bash`).
    pub shell: &'a str,
    /// The trimmed input line that triggered the command.
    pub input: &'a str,
}

/// Runs the handler bound to `kind`.
pub fn dispatch(kind: CommandKind, ctx: &CommandContext<'_>) -> CommandOutput {
    match kind {
        CommandKind::Help => content::handle_help(),
        CommandKind::About => content::handle_about(),
        CommandKind::Skills => content::handle_skills(),
        CommandKind::Projects => content::handle_projects(),
        CommandKind::Certifications => content::handle_certifications(),
        CommandKind::Challenges => content::handle_challenges(),
        CommandKind::Contact => content::handle_contact(),
        CommandKind::List => content::handle_list(),
        CommandKind::Gui => system::handle_gui(),
        CommandKind::Exit => system::handle_exit(),
        CommandKind::Clear => system::handle_clear(),
        CommandKind::ChangeDirectory => system::handle_change_directory(ctx.shell, ctx.input),
    }
}
