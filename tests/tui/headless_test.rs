//! Integration tests for headless mode.

use super::common::{run_headless, run_terminal_json};

#[test]
fn test_headless_basic_execution() {
    let (code, stdout, _) = run_headless(&["--headless", "--events", "key:right"]);

    assert_eq!(code, 0, "Expected exit code 0");
    assert!(
        stdout.contains("Events: 1 executed"),
        "Should show events executed. Got: {stdout}"
    );
    assert!(stdout.contains("View: selector"));
}

#[test]
fn test_headless_type_event() {
    let (code, json) = run_terminal_json("type:cr -ab");

    assert_eq!(code, 0);
    assert_eq!(json["state"]["input_text"], "cr -ab");
    assert_eq!(json["state"]["view"], "terminal");
}

#[test]
fn test_headless_assertion_pass() {
    let (code, json) = run_terminal_json("type:ls,key:enter,assert:contains:Documents");

    assert_eq!(code, 0);
    assert_eq!(json["assertions"]["passed"], 1);
    assert_eq!(json["assertions"]["failed"], 0);
}

#[test]
fn test_headless_assertion_fail() {
    let (code, json) = run_terminal_json("type:ls,assert:contains:goodbye");

    assert_eq!(code, 1, "Should exit with code 1 on assertion failure");
    assert_eq!(json["assertions"]["passed"], 0);
    assert_eq!(json["assertions"]["failed"], 1);
}

#[test]
fn test_headless_custom_size() {
    let (code, stdout, _) = run_headless(&[
        "--headless",
        "--events",
        "key:right",
        "--size",
        "120x40",
        "--output",
        "json",
    ]);

    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let lines = json["screen_lines"].as_array().unwrap();
    assert!(lines.len() <= 40);
    assert!(lines.iter().all(|l| l.as_str().unwrap().chars().count() <= 120));
}

#[test]
fn test_headless_frames_output() {
    let (code, stdout, _) = run_headless(&[
        "--headless",
        "--view",
        "terminal",
        "--events",
        "type:a,type:b",
        "--output",
        "frames",
    ]);

    assert_eq!(code, 0);
    assert!(stdout.contains("=== FRAME 0 (initial) [terminal] ==="));
    assert!(stdout.contains("=== FRAME 1 (type:a) [terminal] ==="));
    assert!(stdout.contains("=== FRAME 2 (type:b) [terminal] ==="));
    assert!(stdout.contains("3 frames\nView: terminal | Loader: idle | Prompt: \"ab\""));
}

#[test]
fn test_headless_text_summary_reports_shell_activity() {
    let (code, stdout, _) = run_headless(&[
        "--headless",
        "--no-loader",
        "--view",
        "terminal",
        "--events",
        "type:foobar,key:enter,type:ls,key:enter",
    ]);

    assert_eq!(code, 0, "Got: {stdout}");
    assert!(
        stdout.contains("Shell: 2 commands, 1 outputs, 1 errors | History: 2"),
        "Got: {stdout}"
    );
}

#[test]
fn test_headless_requires_events_or_script() {
    let (code, stdout, stderr) = run_headless(&["--headless"]);

    assert_eq!(code, 1, "Should fail without events or script");
    let combined = format!("{stdout}{stderr}");
    assert!(
        combined.contains("requires --events or --script"),
        "Should show error message. Got: {combined}"
    );
}

#[test]
fn test_headless_bad_event_is_reported() {
    let (code, _, stderr) = run_headless(&["--headless", "--events", "tap:enter"]);

    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown event type"), "Got: {stderr}");
}

#[test]
fn test_headless_script_file() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("tour.txt");
    std::fs::write(
        &script,
        "# open the shell\nkey:t\ntype:cr -contact\nkey:enter\nassert:state:history_len=1\n",
    )
    .unwrap();

    let (code, stdout, _) = run_headless(&[
        "--headless",
        "--no-loader",
        "--script",
        script.to_str().unwrap(),
    ]);

    assert_eq!(code, 0, "Got: {stdout}");
    assert!(stdout.contains("Assertions: 1 passed, 0 failed"));
}

#[test]
fn test_headless_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.json");

    let (code, stdout, _) = run_headless(&[
        "--headless",
        "--events",
        "key:right",
        "--output",
        "json",
        "--output-file",
        out.to_str().unwrap(),
    ]);

    assert_eq!(code, 0);
    assert!(stdout.is_empty());
    let written = std::fs::read_to_string(out).unwrap();
    let json: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(json["state"]["selector"], "gui");
}

#[test]
fn test_headless_multiple_assertions() {
    let (code, json) = run_terminal_json(
        "type:foobar,key:enter,assert:contains:command not found,assert:state:scrollback_len=3,assert:not-contains:Permission denied",
    );

    assert_eq!(code, 0);
    assert_eq!(json["assertions"]["passed"], 3);
    assert_eq!(json["assertions"]["failed"], 0);
}
