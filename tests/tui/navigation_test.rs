//! View switching, window controls and the GUI page, end to end.

use super::common::{run_headless, run_terminal_json};

#[test]
fn test_selector_to_terminal_and_back() {
    let (code, stdout, _) = run_headless(&[
        "--headless",
        "--no-loader",
        "--events",
        "key:enter,assert:state:view=terminal,type:exit,key:enter,assert:state:view=selector",
        "--output",
        "json",
    ]);

    assert_eq!(code, 0, "Got: {stdout}");
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["state"]["busy"], false);
    assert_eq!(json["state"]["history_len"], 1);
}

#[test]
fn test_real_loader_reports_progress() {
    // Default loader: 200ms to 30%, then 300ms more to 60%
    let (code, stdout, _) = run_headless(&[
        "--headless",
        "--events",
        "key:g,wait:650ms,assert:state:transitioning=true,assert:state:loader_progress>=30",
        "--output",
        "json",
    ]);

    assert_eq!(code, 0, "Got: {stdout}");
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    // The final screen waits for the switch to finish
    assert_eq!(json["state"]["view"], "gui");
    assert_eq!(json["state"]["transitioning"], false);
}

#[test]
fn test_gui_command_switches_view() {
    let (code, json) = run_terminal_json("type:cr -gui,key:enter,assert:state:view=gui");

    assert_eq!(code, 0);
    assert_eq!(json["state"]["gui_section"], "home");
    let kinds: Vec<&str> = json["scrollback"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["kind"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["banner", "command_line", "normal"]);
}

#[test]
fn test_window_controls_by_key_and_click() {
    // Title bar sits on row 1; buttons at columns 1, 3 and 5
    let (code, json) = run_terminal_json(
        "key:f3,click:5:1,assert:contains:Terminal maximized,click:1:1,assert:state:view=selector",
    );

    assert_eq!(code, 0, "Got: {json}");
    assert_eq!(json["assertions"]["passed"], 2);
}

#[test]
fn test_gui_digit_jumps() {
    let (code, stdout, _) = run_headless(&[
        "--headless",
        "--no-loader",
        "--view",
        "gui",
        "--events",
        "key:4,assert:state:gui_section=projects,key:home,assert:state:gui_section=home,key:6,assert:contains:Contact",
        "--output",
        "json",
    ]);

    assert_eq!(code, 0, "Got: {stdout}");
}

#[test]
fn test_history_and_completion_through_keys() {
    let (code, json) = run_terminal_json(
        "type:cle,key:tab,assert:state:input_text=clear,key:enter,key:up,assert:state:input_text=clear,key:down,assert:state:input_text=",
    );

    assert_eq!(code, 0, "Got: {json}");
    assert_eq!(json["state"]["history_len"], 1);
    assert_eq!(json["state"]["scrollback_len"], 1);
}
