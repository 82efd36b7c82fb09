//! Help text for the shell commands.

/// Help text displayed for `cr -help` / `crombo -help`.
pub const HELP_TEXT: &str = r#"Available Commands:

You can use "cr" as a shorthand for the "crombo" command
Examples:

cr -help     - Show this help menu
cr -about    - Learn about me
cr -skills   - View my technical skills
cr -projects - See my projects
cr -certs    - See my certifications
cr -challs   - See Forensics challenges that CR0M80 created
cr -contact  - Get my contact information
cr -gui      - Switch to GUI mode
ls           - List directory contents
cd           - Change directory
clear        - Clear terminal
exit         - Return to mode selection"#;

/// Hint appended to shell errors.
pub const HELP_HINT: &str = "Type 'cr -help' for available commands.";
