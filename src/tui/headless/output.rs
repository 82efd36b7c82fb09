//! Headless reports.
//!
//! Every format shows the final screen first and then the portfolio session:
//! the visible view, the loader, and what the shell has printed so far.

use super::{Frame, HeadlessResult, HeadlessState};
use crate::shell::{Entry, EntryKind};
use ratatui::buffer::Buffer;
use serde::Serialize;

pub use crate::cli::OutputFormat;

/// Flattens a rendered buffer into text, one line per row.
///
/// Trailing spaces and blank bottom rows are dropped so reports stay stable
/// across screen sizes.
pub fn screen_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut rows: Vec<String> = (area.top()..area.bottom())
        .map(|y| {
            let mut row = String::new();
            for x in area.left()..area.right() {
                row.push_str(buffer.cell((x, y)).map_or(" ", |cell| cell.symbol()));
            }
            row.truncate(row.trim_end().len());
            row
        })
        .collect();

    while rows.last().is_some_and(|row| row.is_empty()) {
        rows.pop();
    }

    let mut text = rows.join("\n");
    text.push('\n');
    text
}

/// Renders a run in the requested format.
pub fn render_report(format: OutputFormat, result: &HeadlessResult) -> String {
    match format {
        OutputFormat::Text => text_report(result),
        OutputFormat::Json => json_report(result),
        OutputFormat::Frames => frames_report(result),
    }
}

/// Scrollback blocks counted by kind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
struct ShellTally {
    banner: usize,
    commands: usize,
    output: usize,
    errors: usize,
}

impl ShellTally {
    fn of(entries: &[Entry]) -> Self {
        entries.iter().fold(Self::default(), |mut tally, entry| {
            match entry.kind {
                EntryKind::Banner => tally.banner += 1,
                EntryKind::CommandLine => tally.commands += 1,
                EntryKind::Normal => tally.output += 1,
                EntryKind::Error => tally.errors += 1,
            }
            tally
        })
    }
}

fn loader_label(progress: Option<u8>) -> String {
    match progress {
        Some(percent) => format!("loading {percent}%"),
        None => "idle".to_string(),
    }
}

/// The part of the state that matters for the view on screen.
fn view_detail(state: &HeadlessState) -> String {
    match state.view.as_str() {
        "selector" => format!("Selected: {}", state.selector),
        "gui" => format!("Section: {} (row {})", state.gui_section, state.gui_scroll),
        _ if state.busy => format!("Prompt: {:?} (busy)", state.input_text),
        _ => format!("Prompt: {:?}", state.input_text),
    }
}

/// Closing lines shared by the text and frames reports.
fn session_summary(result: &HeadlessResult) -> String {
    let state = &result.state;
    let tally = ShellTally::of(&result.scrollback);

    let mut summary = format!(
        "View: {} | Loader: {} | {}\n",
        state.view,
        loader_label(state.loader_progress),
        view_detail(state)
    );
    summary.push_str(&format!(
        "Shell: {} commands, {} outputs, {} errors | History: {}\n",
        tally.commands, tally.output, tally.errors, state.history_len
    ));
    summary.push_str(&format!(
        "Events: {} executed in {}ms",
        result.events_executed,
        result.duration.as_millis()
    ));
    if result.assertions_passed > 0 || result.assertions_failed > 0 {
        summary.push_str(&format!(
            " | Assertions: {} passed, {} failed",
            result.assertions_passed, result.assertions_failed
        ));
    }
    summary.push('\n');
    summary
}

fn text_report(result: &HeadlessResult) -> String {
    format!("{}\n{}", result.screen, session_summary(result))
}

fn frame_header(frame: &Frame) -> String {
    let event = frame.event.as_deref().unwrap_or("initial");
    match frame.loader_progress {
        Some(percent) => format!(
            "=== FRAME {} ({event}) [{}, loading {percent}%] ===",
            frame.number, frame.view
        ),
        None => format!("=== FRAME {} ({event}) [{}] ===", frame.number, frame.view),
    }
}

fn frames_report(result: &HeadlessResult) -> String {
    let mut report = String::new();
    for frame in &result.frames {
        report.push_str(&frame_header(frame));
        report.push('\n');
        report.push_str(&frame.screen);
        report.push('\n');
    }
    report.push_str(&format!("{} frames\n", result.frames.len()));
    report.push_str(&session_summary(result));
    report
}

#[derive(Serialize)]
struct JsonReport<'a> {
    screen: &'a str,
    screen_lines: &'a [String],
    state: &'a HeadlessState,
    scrollback: &'a [Entry],
    shell: ShellTally,
    events_executed: usize,
    duration_ms: u64,
    assertions: AssertionCounts,
}

#[derive(Serialize)]
struct AssertionCounts {
    passed: usize,
    failed: usize,
}

fn json_report(result: &HeadlessResult) -> String {
    let report = JsonReport {
        screen: &result.screen,
        screen_lines: &result.screen_lines,
        state: &result.state,
        scrollback: &result.scrollback,
        shell: ShellTally::of(&result.scrollback),
        events_executed: result.events_executed,
        duration_ms: u64::try_from(result.duration.as_millis()).unwrap_or(u64::MAX),
        assertions: AssertionCounts {
            passed: result.assertions_passed,
            failed: result.assertions_failed,
        },
    };

    serde_json::to_string_pretty(&report)
        .unwrap_or_else(|e| format!("{{\"error\": \"Failed to serialize: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::layout::Rect;
    use ratatui::style::Style;
    use std::time::Duration;

    fn state(view: &str) -> HeadlessState {
        HeadlessState {
            view: view.to_string(),
            selector: "gui".to_string(),
            input_text: "cr -he".to_string(),
            busy: false,
            transitioning: false,
            loader_progress: None,
            scrollback_len: 4,
            history_len: 2,
            history_cursor: 2,
            running: true,
            gui_section: "skills".to_string(),
            gui_scroll: 12,
        }
    }

    fn result_on(view: &str) -> HeadlessResult {
        HeadlessResult {
            screen: "CR0M80@portfolio:~$ cr -he\n".to_string(),
            screen_lines: vec!["CR0M80@portfolio:~$ cr -he".to_string()],
            events_executed: 3,
            duration: Duration::from_millis(150),
            assertions_passed: 2,
            assertions_failed: 0,
            state: state(view),
            scrollback: vec![
                Entry::new(EntryKind::Banner, "Welcome"),
                Entry::new(EntryKind::CommandLine, "CR0M80@portfolio:~$ foo"),
                Entry::new(EntryKind::Error, "bash: foo: command not found"),
                Entry::new(EntryKind::CommandLine, "CR0M80@portfolio:~$ ls"),
            ],
            frames: vec![
                Frame {
                    number: 0,
                    event: None,
                    screen: "selector".to_string(),
                    view: "selector",
                    loader_progress: None,
                },
                Frame {
                    number: 1,
                    event: Some("key:t".to_string()),
                    screen: "loading".to_string(),
                    view: "selector",
                    loader_progress: Some(60),
                },
            ],
        }
    }

    #[test]
    fn test_tally_counts_each_kind() {
        let result = result_on("terminal");
        assert_eq!(
            ShellTally::of(&result.scrollback),
            ShellTally {
                banner: 1,
                commands: 2,
                output: 0,
                errors: 1,
            }
        );
    }

    #[test]
    fn test_text_report_describes_terminal_session() {
        let text = render_report(OutputFormat::Text, &result_on("terminal"));

        assert!(text.starts_with("CR0M80@portfolio:~$ cr -he\n"));
        assert!(text.contains("View: terminal | Loader: idle | Prompt: \"cr -he\""));
        assert!(text.contains("Shell: 2 commands, 0 outputs, 1 errors | History: 2"));
        assert!(text.contains("Events: 3 executed in 150ms | Assertions: 2 passed, 0 failed"));
    }

    #[test]
    fn test_text_report_detail_follows_view() {
        let gui = render_report(OutputFormat::Text, &result_on("gui"));
        assert!(gui.contains("View: gui | Loader: idle | Section: skills (row 12)"));

        let mut result = result_on("selector");
        result.state.loader_progress = Some(90);
        let selector = render_report(OutputFormat::Text, &result);
        assert!(selector.contains("View: selector | Loader: loading 90% | Selected: gui"));
    }

    #[test]
    fn test_busy_prompt_is_flagged() {
        let mut result = result_on("terminal");
        result.state.busy = true;
        let text = render_report(OutputFormat::Text, &result);
        assert!(text.contains("Prompt: \"cr -he\" (busy)"));
    }

    #[test]
    fn test_json_report() {
        let json = render_report(OutputFormat::Json, &result_on("terminal"));
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["state"]["input_text"], "cr -he");
        assert_eq!(parsed["state"]["loader_progress"], serde_json::Value::Null);
        assert_eq!(parsed["scrollback"][2]["kind"], "error");
        assert_eq!(parsed["shell"]["commands"], 2);
        assert_eq!(parsed["shell"]["errors"], 1);
        assert_eq!(parsed["duration_ms"], 150);
        assert_eq!(parsed["assertions"]["passed"], 2);
    }

    #[test]
    fn test_frames_report_tags_view_and_loader() {
        let frames = render_report(OutputFormat::Frames, &result_on("terminal"));

        assert!(frames.contains("=== FRAME 0 (initial) [selector] ===\nselector\n"));
        assert!(frames.contains("=== FRAME 1 (key:t) [selector, loading 60%] ===\nloading\n"));
        assert!(frames.contains("2 frames\nView: terminal"));
    }

    #[test]
    fn test_screen_text_trims_blank_rows_and_trailing_spaces() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 10, 4));
        buffer.set_string(0, 0, "top", Style::default());
        buffer.set_string(2, 1, "mid", Style::default());
        assert_eq!(screen_text(&buffer), "top\n  mid\n");
    }

    #[test]
    fn test_screen_text_of_blank_buffer() {
        let buffer = Buffer::empty(Rect::new(0, 0, 5, 2));
        assert_eq!(screen_text(&buffer), "\n");
    }
}
