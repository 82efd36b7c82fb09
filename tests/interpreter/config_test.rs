//! Config files on disk.

use crombo_portfolio::config::{Config, StartView};
use crombo_portfolio::loader::Loader;
use crombo_portfolio::shell::Interpreter;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_profile_drives_prompt_and_errors() {
    let file = write_config(
        r#"
[profile]
user = "guest"
host = "lab"
shell = "zsh"
"#,
    );
    let config = Config::load_from_file(file.path()).unwrap();
    let mut shell = Interpreter::new(config.profile);
    shell.execute("nope");

    let entries = shell.scrollback().entries();
    assert_eq!(entries[1].text, "guest@lab:~$ nope");
    assert!(entries[2].text.starts_with("zsh: nope: command not found"));
}

#[test]
fn test_loader_and_ui_sections() {
    let file = write_config(
        r#"
[loader]
settle_ms = 0
steps = [
  { percent = 50, delay_ms = 10 },
  { percent = 100, delay_ms = 20 },
]

[ui]
start_view = "terminal"
"#,
    );
    let config = Config::load_from_file(file.path()).unwrap();
    assert_eq!(config.ui.start_view, StartView::Terminal);

    let loader = Loader::from_config(&config.loader);
    assert_eq!(loader.total_duration(), Duration::from_millis(30));
}

#[test]
fn test_invalid_file_is_config_error() {
    let file = write_config("[ui]\nstart_view = \"desktop\"\n");
    let err = Config::load_from_file(file.path()).unwrap_err();
    assert_eq!(err.category(), "Configuration Error");
}
