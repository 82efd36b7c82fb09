//! Command table for the simulated shell.
//!
//! Every command is a literal string, matched exactly and case-sensitively.
//! Most content commands exist twice: a short `cr -x` form and the long
//! `crombo -x` form. The table order is also the order autocomplete lists
//! matches in.

/// What a command does when dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Help,
    About,
    Skills,
    Projects,
    Certifications,
    Challenges,
    Contact,
    /// Switch to the GUI view.
    Gui,
    /// Fake `ls` of the home directory.
    List,
    /// Themed `cd`, always denied.
    ChangeDirectory,
    Clear,
    /// Return to the mode selector.
    Exit,
}

/// A single entry of the command table.
#[derive(Debug, Clone, Copy)]
pub struct CommandDef {
    /// Exact command line that triggers the command.
    pub name: &'static str,
    /// Handler bound to the name.
    pub kind: CommandKind,
}

const fn def(name: &'static str, kind: CommandKind) -> CommandDef {
    CommandDef { name, kind }
}

/// All commands, in table order.
pub static COMMANDS: &[CommandDef] = &[
    def("cr -help", CommandKind::Help),
    def("crombo -help", CommandKind::Help),
    def("cr -about", CommandKind::About),
    def("crombo -about", CommandKind::About),
    def("cr -skills", CommandKind::Skills),
    def("crombo -skills", CommandKind::Skills),
    def("cr -projects", CommandKind::Projects),
    def("crombo -projects", CommandKind::Projects),
    def("cr -certs", CommandKind::Certifications),
    def("crombo -certs", CommandKind::Certifications),
    def("cr -challs", CommandKind::Challenges),
    def("crombo -challs", CommandKind::Challenges),
    def("cr -contact", CommandKind::Contact),
    def("crombo -contact", CommandKind::Contact),
    def("cr -gui", CommandKind::Gui),
    def("crombo -gui", CommandKind::Gui),
    def("ls", CommandKind::List),
    def("cd", CommandKind::ChangeDirectory),
    def("clear", CommandKind::Clear),
    def("exit", CommandKind::Exit),
];

/// The directory-change token. Any input equal to it or starting with it
/// followed by a space is routed to the permission-denied handler.
pub const CHANGE_DIRECTORY: &str = "cd";

/// Looks up an exact command line in the table.
pub fn lookup(input: &str) -> Option<CommandKind> {
    COMMANDS.iter().find(|c| c.name == input).map(|c| c.kind)
}

/// Returns true if the input is a directory-change attempt.
pub fn is_change_directory(input: &str) -> bool {
    input == CHANGE_DIRECTORY
        || input
            .strip_prefix(CHANGE_DIRECTORY)
            .is_some_and(|rest| rest.starts_with(' '))
}

/// Iterates over all command names in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|c| c.name)
}
