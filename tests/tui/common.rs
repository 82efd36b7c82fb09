//! Common test utilities for TUI tests.

use std::process::Command;

/// Runs `crombo` in headless mode with the given arguments.
///
/// The binary is built by `cargo test` as part of the package. A config path
/// that does not exist keeps the user's own config out of the run.
pub fn run_headless(args: &[&str]) -> (i32, String, String) {
    let config_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = config_dir.path().join("missing.toml");

    let output = Command::new(env!("CARGO_BIN_EXE_crombo"))
        .arg("--config")
        .arg(&config_path)
        .args(args)
        .output()
        .expect("Failed to execute command");

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

/// Runs a headless script against the terminal view with the loader off,
/// returning the parsed JSON output.
pub fn run_terminal_json(events: &str) -> (i32, serde_json::Value) {
    let (code, stdout, stderr) = run_headless(&[
        "--headless",
        "--no-loader",
        "--view",
        "terminal",
        "--events",
        events,
        "--output",
        "json",
    ]);
    let json = serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("Invalid JSON ({e}). stdout: {stdout} stderr: {stderr}"));
    (code, json)
}
