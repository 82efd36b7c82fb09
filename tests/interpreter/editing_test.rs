//! History navigation, autocomplete and prompt editing.

use crombo_portfolio::shell::{EntryKind, Interpreter, WindowControl};
use pretty_assertions::assert_eq;

fn shell_with(commands: &[&str]) -> Interpreter {
    let mut shell = Interpreter::default();
    for command in commands {
        shell.execute(command);
    }
    shell
}

#[test]
fn test_history_up_stops_at_oldest() {
    let mut shell = shell_with(&["ls", "cr -about"]);
    shell.history_up();
    assert_eq!(shell.prompt().text(), "cr -about");
    shell.history_up();
    shell.history_up();
    shell.history_up();
    assert_eq!(shell.prompt().text(), "ls");
    assert_eq!(shell.history().cursor(), 0);
}

#[test]
fn test_history_down_past_newest_clears() {
    let mut shell = shell_with(&["ls", "cr -about"]);
    shell.history_up();
    shell.history_down();
    assert_eq!(shell.prompt().text(), "");
    shell.history_down();
    assert_eq!(shell.prompt().text(), "");
    assert_eq!(shell.history().cursor(), 2);
}

#[test]
fn test_history_grows_past_hundreds_of_commands() {
    let mut shell = Interpreter::default();
    for _ in 0..501 {
        shell.execute("ls");
    }
    let before = shell.history().len();
    shell.execute("cr -help");
    assert_eq!(shell.history().len(), before + 1);
    assert_eq!(shell.history().len(), 502);

    for _ in 0..600 {
        shell.history_up();
    }
    assert_eq!(shell.prompt().text(), "ls");
    assert_eq!(shell.history().cursor(), 0);
}

#[test]
fn test_history_on_empty_is_noop() {
    let mut shell = Interpreter::default();
    shell.prompt_mut().insert_str("draft");
    shell.history_up();
    shell.history_down();
    assert_eq!(shell.prompt().text(), "draft");
}

#[test]
fn test_history_cursor_resets_after_submit() {
    let mut shell = shell_with(&["ls", "clear"]);
    shell.history_up();
    shell.history_up();
    shell.submit();
    assert_eq!(shell.history().len(), 3);
    assert_eq!(shell.history().cursor(), 3);
}

#[test]
fn test_autocomplete_single_match() {
    let mut shell = Interpreter::default();
    shell.prompt_mut().insert_str("crombo -sk");
    shell.autocomplete();
    assert_eq!(shell.prompt().text(), "crombo -skills");
    assert_eq!(shell.prompt().cursor(), "crombo -skills".len());
    assert_eq!(shell.scrollback().len(), 1);
}

#[test]
fn test_autocomplete_is_case_insensitive_on_input() {
    let mut shell = Interpreter::default();
    shell.prompt_mut().insert_str("CLE");
    shell.autocomplete();
    assert_eq!(shell.prompt().text(), "clear");
}

#[test]
fn test_autocomplete_lists_multiple() {
    let mut shell = Interpreter::default();
    shell.prompt_mut().insert_str("cr -c");
    shell.autocomplete();

    assert_eq!(shell.prompt().text(), "cr -c");
    let last = shell.scrollback().last().cloned().unwrap();
    assert_eq!(last.kind, EntryKind::Normal);
    assert_eq!(last.text, "cr -certs    cr -challs    cr -contact");
}

#[test]
fn test_autocomplete_no_match() {
    let mut shell = Interpreter::default();
    shell.prompt_mut().insert_str("xyz");
    shell.autocomplete();
    assert_eq!(shell.prompt().text(), "xyz");
    assert_eq!(shell.scrollback().len(), 1);
}

#[test]
fn test_submit_reenables_prompt() {
    let mut shell = Interpreter::default();
    shell.prompt_mut().insert_str("ls");
    shell.submit();
    assert!(shell.prompt().is_enabled());
    assert!(shell.prompt().is_empty());
}

#[test]
fn test_busy_submit_keeps_typed_text() {
    let mut shell = shell_with(&["cr -gui"]);
    shell.prompt_mut().insert_str("ls");
    assert_eq!(shell.submit(), None);
    assert_eq!(shell.prompt().text(), "ls");
}

#[test]
fn test_window_controls() {
    let mut shell = Interpreter::default();
    shell.window_control(WindowControl::Minimize);
    shell.window_control(WindowControl::Maximize);
    let texts: Vec<String> = shell.scrollback().entries()[1..]
        .iter()
        .map(|e| e.text.clone())
        .collect();
    assert_eq!(
        texts,
        vec![
            "[INFO] Terminal minimized. Type \"exit\" to return to selection screen.".to_string(),
            "[INFO] Terminal maximized.".to_string(),
        ]
    );

    assert!(shell.window_control(WindowControl::Close).is_some());
    assert!(shell.is_busy());
    assert!(shell.window_control(WindowControl::Close).is_none());
}
