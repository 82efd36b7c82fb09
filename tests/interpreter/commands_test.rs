//! Command resolution, echo and scrollback growth.

use crombo_portfolio::commands::help::HELP_TEXT;
use crombo_portfolio::commands::{Transition, COMMANDS};
use crombo_portfolio::shell::{Entry, EntryKind, Interpreter};
use pretty_assertions::assert_eq;

const LABEL: &str = "CR0M80@portfolio:~$";

fn tail(shell: &Interpreter, n: usize) -> Vec<Entry> {
    let entries = shell.scrollback().entries();
    entries[entries.len() - n..].to_vec()
}

#[test]
fn test_every_command_adds_echo_and_one_block() {
    for def in COMMANDS.iter().filter(|d| d.name != "clear") {
        let mut shell = Interpreter::default();
        shell.execute(def.name);

        assert_eq!(shell.scrollback().len(), 3, "command {:?}", def.name);
        assert_eq!(shell.history().entries(), [def.name.to_string()]);

        let echo = &shell.scrollback().entries()[1];
        assert_eq!(echo.kind, EntryKind::CommandLine);
        assert_eq!(echo.text, format!("{LABEL} {}", def.name));
    }
}

#[test]
fn test_help_example() {
    let mut shell = Interpreter::default();
    assert_eq!(shell.execute("cr -help"), None);

    assert_eq!(
        tail(&shell, 2),
        vec![
            Entry::new(EntryKind::CommandLine, "CR0M80@portfolio:~$ cr -help"),
            Entry::new(EntryKind::Normal, HELP_TEXT),
        ]
    );
    assert_eq!(shell.history().entries(), ["cr -help".to_string()]);
}

#[test]
fn test_long_and_short_forms_match() {
    let mut short = Interpreter::default();
    let mut long = Interpreter::default();
    short.execute("cr -contact");
    long.execute("crombo -contact");
    assert_eq!(tail(&short, 1), tail(&long, 1));
}

#[test]
fn test_unknown_command_example() {
    let mut shell = Interpreter::default();
    shell.execute("foobar");

    let last = tail(&shell, 1).remove(0);
    assert_eq!(last.kind, EntryKind::Error);
    assert_eq!(
        last.text,
        "bash: foobar: command not found\nType 'cr -help' for available commands."
    );
}

#[test]
fn test_commands_are_case_sensitive() {
    let mut shell = Interpreter::default();
    shell.execute("CR -HELP");
    assert_eq!(tail(&shell, 1)[0].kind, EntryKind::Error);
}

#[test]
fn test_surrounding_whitespace_is_trimmed() {
    let mut shell = Interpreter::default();
    shell.execute("   ls   ");
    assert_eq!(shell.history().entries(), ["ls".to_string()]);
    assert_eq!(tail(&shell, 2)[0].text, format!("{LABEL} ls"));
    assert_eq!(tail(&shell, 1)[0].kind, EntryKind::Normal);
}

#[test]
fn test_cd_is_denied() {
    for input in ["cd", "cd /root", "cd .."] {
        let mut shell = Interpreter::default();
        shell.execute(input);
        let last = tail(&shell, 1).remove(0);
        assert_eq!(last.kind, EntryKind::Error);
        assert_eq!(
            last.text,
            format!("bash: {input}: Permission denied\nType 'cr -help' for available commands.")
        );
    }
}

#[test]
fn test_cd_prefix_without_space_is_unknown() {
    let mut shell = Interpreter::default();
    shell.execute("cdrom");
    assert!(tail(&shell, 1)[0].text.contains("command not found"));
}

#[test]
fn test_empty_input_changes_nothing() {
    for input in ["", "   ", "\t"] {
        let mut shell = Interpreter::default();
        assert_eq!(shell.execute(input), None);
        assert_eq!(shell.scrollback().len(), 1);
        assert!(shell.history().is_empty());
    }
}

#[test]
fn test_clear_keeps_only_banner() {
    let mut shell = Interpreter::default();
    let banner = shell.scrollback().entries()[0].clone();
    shell.execute("ls");
    shell.execute("cr -about");
    shell.execute("clear");

    assert_eq!(shell.scrollback().entries(), [banner]);
    assert_eq!(shell.history().len(), 3);

    shell.execute("clear");
    assert_eq!(shell.scrollback().len(), 1);
}

#[test]
fn test_mode_switches_go_busy() {
    let mut shell = Interpreter::default();
    assert_eq!(shell.execute("cr -gui"), Some(Transition::Gui));
    assert!(shell.is_busy());
    assert_eq!(tail(&shell, 1)[0].text, "[INFO] Switching to GUI mode...");

    // Ignored entirely until the loader settles
    assert_eq!(shell.execute("ls"), None);
    assert_eq!(shell.history().len(), 1);
    assert_eq!(shell.scrollback().len(), 3);

    shell.end_transition();
    assert_eq!(shell.execute("exit"), Some(Transition::Selector));
    assert_eq!(
        tail(&shell, 1)[0].text,
        "[INFO] Returning to mode selection..."
    );
}
