//! Event DSL parser for headless mode.
//!
//! Parses event strings like "key:enter", "type:cr -help", "click:3:1" or
//! "wait:2s" into executable events.

use super::HeadlessState;
use crate::error::{PortfolioError, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fmt;
use std::time::Duration;

/// An assertion to check against the screen or state.
#[derive(Debug, Clone)]
pub enum Assertion {
    /// Screen contains text (case-insensitive).
    Contains(String),
    /// Screen contains text (case-sensitive).
    ContainsExact(String),
    /// Screen does not contain text.
    NotContains(String),
    /// Screen matches regex pattern.
    Matches(String),
    /// State field equals value.
    StateEquals { field: String, value: String },
    /// State field comparison (>=, <=, >, <).
    StateCompare {
        field: String,
        op: String,
        value: String,
    },
}

impl Assertion {
    /// Checks the assertion against the rendered screen and a state snapshot.
    pub fn check(&self, screen: &str, state: &HeadlessState) -> bool {
        match self {
            Self::Contains(text) => screen.to_lowercase().contains(&text.to_lowercase()),
            Self::ContainsExact(text) => screen.contains(text),
            Self::NotContains(text) => !screen.to_lowercase().contains(&text.to_lowercase()),
            Self::Matches(pattern) => regex::Regex::new(pattern)
                .map(|re| re.is_match(screen))
                .unwrap_or(false),
            Self::StateEquals { field, value } => {
                state.field(field).as_deref() == Some(value.as_str())
            }
            Self::StateCompare { field, op, value } => {
                compare_values(state.field(field).as_deref(), op, value)
            }
        }
    }
}

/// Compares values using the given operator.
fn compare_values(actual: Option<&str>, op: &str, expected: &str) -> bool {
    let Some(actual) = actual else {
        return false;
    };

    if let (Ok(a), Ok(e)) = (actual.parse::<i64>(), expected.parse::<i64>()) {
        return match op {
            ">=" => a >= e,
            "<=" => a <= e,
            ">" => a > e,
            "<" => a < e,
            "=" | "==" => a == e,
            _ => false,
        };
    }

    match op {
        "=" | "==" => actual == expected,
        _ => false,
    }
}

/// A parsed event that can be executed.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key press event.
    Key(KeyEvent),
    /// Type text, one key press per character.
    Type(String),
    /// Left click at a cell.
    Click { column: u16, row: u16 },
    /// Mouse wheel.
    Scroll { up: bool },
    /// Wait for a duration. Loader messages are applied afterwards.
    Wait(Duration),
    /// Resize the terminal.
    Resize(u16, u16),
    /// Take a named snapshot.
    Snapshot(String),
    /// Assert something about the screen or state.
    Assert(Assertion),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => {
                let mut parts = Vec::new();
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    parts.push("ctrl");
                }
                if key.modifiers.contains(KeyModifiers::ALT) {
                    parts.push("alt");
                }
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    parts.push("shift");
                }
                let key_name = key_code_to_string(&key.code);
                parts.push(&key_name);
                write!(f, "key:{}", parts.join("+"))
            }
            Self::Type(text) => write!(f, "type:{text}"),
            Self::Click { column, row } => write!(f, "click:{column}:{row}"),
            Self::Scroll { up } => write!(f, "scroll:{}", if *up { "up" } else { "down" }),
            Self::Wait(d) => write!(f, "wait:{}ms", d.as_millis()),
            Self::Resize(w, h) => write!(f, "resize:{w}x{h}"),
            Self::Snapshot(name) => write!(f, "snapshot:{name}"),
            Self::Assert(a) => match a {
                Assertion::Contains(t) => write!(f, "assert:contains:{t}"),
                Assertion::ContainsExact(t) => write!(f, "assert:contains-exact:{t}"),
                Assertion::NotContains(t) => write!(f, "assert:not-contains:{t}"),
                Assertion::Matches(p) => write!(f, "assert:matches:{p}"),
                Assertion::StateEquals { field, value } => {
                    write!(f, "assert:state:{field}={value}")
                }
                Assertion::StateCompare { field, op, value } => {
                    write!(f, "assert:state:{field}{op}{value}")
                }
            },
        }
    }
}

fn key_code_to_string(code: &KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pageup".to_string(),
        KeyCode::PageDown => "pagedown".to_string(),
        KeyCode::F(n) => format!("f{n}"),
        _ => "unknown".to_string(),
    }
}

/// Parser for the event DSL.
#[derive(Debug, Default)]
pub struct EventParser;

impl EventParser {
    /// Creates a new event parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses all events from an input string.
    /// Supports comma-separated and newline-separated events.
    pub fn parse_all(&self, input: &str) -> Result<Vec<Event>> {
        let mut events = Vec::new();

        for (line_no, line) in input.lines().enumerate() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            for part in line.split(',') {
                let part = part.trim();
                if part.is_empty() {
                    continue;
                }

                let event = self.parse_one(part).map_err(|e| {
                    PortfolioError::script(format!("line {}: {}", line_no + 1, e.message()))
                })?;
                events.push(event);
            }
        }

        Ok(events)
    }

    /// Parses a single event string.
    pub fn parse_one(&self, input: &str) -> Result<Event> {
        let input = input.trim();

        let (event_type, value) = match input.split_once(':') {
            Some((t, v)) => (t.trim().to_lowercase(), v),
            None => {
                return Err(PortfolioError::script(format!(
                    "Invalid event syntax: '{input}'. Expected format: type:value"
                )));
            }
        };

        match event_type.as_str() {
            "key" => self.parse_key(value.trim()),
            // Leading spaces are kept so "type: x" can type a space
            "type" => Ok(Event::Type(value.to_string())),
            "click" => self.parse_click(value.trim()),
            "scroll" => self.parse_scroll(value.trim()),
            "wait" => self.parse_wait(value),
            "resize" => self.parse_resize(value.trim()),
            "snapshot" => Ok(Event::Snapshot(value.trim().to_string())),
            "assert" => self.parse_assert(value.trim()),
            _ => Err(PortfolioError::script(format!(
                "Unknown event type: '{event_type}'. Valid types: key, type, click, scroll, wait, resize, snapshot, assert"
            ))),
        }
    }

    /// Parses a key event like "enter", "ctrl+c", "alt+d".
    fn parse_key(&self, value: &str) -> Result<Event> {
        // "key:+" is the plus key itself
        if value == "+" {
            return Ok(Event::Key(KeyEvent::new(
                KeyCode::Char('+'),
                KeyModifiers::NONE,
            )));
        }

        let parts: Vec<&str> = value.split('+').collect();
        let mut modifiers = KeyModifiers::empty();
        let mut key_str = "";

        for (i, part) in parts.iter().enumerate() {
            if i == parts.len() - 1 {
                key_str = part;
                continue;
            }
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => {
                    return Err(PortfolioError::script(format!(
                        "Unknown modifier: '{part}'. Valid modifiers: ctrl, alt, shift"
                    )));
                }
            }
        }

        let code = self.parse_key_code(key_str)?;

        Ok(Event::Key(KeyEvent::new(code, modifiers)))
    }

    /// Parses a key code string into a KeyCode.
    fn parse_key_code(&self, s: &str) -> Result<KeyCode> {
        let s_lower = s.to_lowercase();

        if let Some(n) = s_lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
            if (1..=12).contains(&n) {
                return Ok(KeyCode::F(n));
            }
        }

        let code = match s_lower.as_str() {
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backspace" | "bs" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            "comma" => KeyCode::Char(','),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => {
                        return Err(PortfolioError::script(format!(
                            "Unknown key: '{s}'. Use single characters or named keys like enter, esc, tab, etc."
                        )));
                    }
                }
            }
        };

        Ok(code)
    }

    /// Parses a click like "12:3" (column, row).
    fn parse_click(&self, value: &str) -> Result<Event> {
        let (column, row) = value.split_once(':').ok_or_else(|| {
            PortfolioError::script(format!(
                "Invalid click format: '{value}'. Expected COLUMN:ROW"
            ))
        })?;
        let column = column
            .trim()
            .parse()
            .map_err(|_| PortfolioError::script(format!("Invalid column: '{column}'")))?;
        let row = row
            .trim()
            .parse()
            .map_err(|_| PortfolioError::script(format!("Invalid row: '{row}'")))?;
        Ok(Event::Click { column, row })
    }

    fn parse_scroll(&self, value: &str) -> Result<Event> {
        match value.to_lowercase().as_str() {
            "up" => Ok(Event::Scroll { up: true }),
            "down" => Ok(Event::Scroll { up: false }),
            _ => Err(PortfolioError::script(format!(
                "Invalid scroll direction: '{value}'. Expected up or down"
            ))),
        }
    }

    /// Parses a wait duration like "100ms", "2s", or just "100" (defaults to ms).
    fn parse_wait(&self, value: &str) -> Result<Event> {
        let value = value.trim().to_lowercase();
        let invalid = || PortfolioError::script(format!("Invalid duration: '{value}'"));

        let duration = if let Some(ms) = value.strip_suffix("ms") {
            Duration::from_millis(ms.parse().map_err(|_| invalid())?)
        } else if let Some(secs) = value.strip_suffix('s') {
            Duration::from_secs(secs.parse().map_err(|_| invalid())?)
        } else {
            Duration::from_millis(value.parse().map_err(|_| invalid())?)
        };

        Ok(Event::Wait(duration))
    }

    /// Parses a resize event like "120x40".
    fn parse_resize(&self, value: &str) -> Result<Event> {
        let (width, height) = value.split_once('x').ok_or_else(|| {
            PortfolioError::script(format!(
                "Invalid resize format: '{value}'. Expected WIDTHxHEIGHT"
            ))
        })?;

        let width: u16 = width
            .parse()
            .map_err(|_| PortfolioError::script(format!("Invalid width: '{width}'")))?;
        let height: u16 = height
            .parse()
            .map_err(|_| PortfolioError::script(format!("Invalid height: '{height}'")))?;

        Ok(Event::Resize(width, height))
    }

    /// Parses an assertion like "contains:hello" or "state:view=terminal".
    fn parse_assert(&self, value: &str) -> Result<Event> {
        let (assert_type, rest) = match value.split_once(':') {
            Some((t, r)) => (t.trim().to_lowercase(), r.trim()),
            None => {
                return Err(PortfolioError::script(format!(
                    "Invalid assertion syntax: '{value}'. Expected assert:type:value"
                )));
            }
        };

        let assertion = match assert_type.as_str() {
            "contains" => Assertion::Contains(rest.to_string()),
            "contains-exact" => Assertion::ContainsExact(rest.to_string()),
            "not-contains" => Assertion::NotContains(rest.to_string()),
            "matches" => Assertion::Matches(rest.to_string()),
            "state" => self.parse_state_assertion(rest)?,
            _ => {
                return Err(PortfolioError::script(format!(
                    "Unknown assertion type: '{assert_type}'. Valid types: contains, contains-exact, not-contains, matches, state"
                )));
            }
        };

        Ok(Event::Assert(assertion))
    }

    /// Parses a state assertion like "view=gui" or "history_len>=2".
    fn parse_state_assertion(&self, value: &str) -> Result<Assertion> {
        for op in [">=", "<=", ">", "<", "="] {
            if let Some((field, val)) = value.split_once(op) {
                let field = field.trim().to_string();
                let val = val.trim().to_string();

                return Ok(if op == "=" {
                    Assertion::StateEquals { field, value: val }
                } else {
                    Assertion::StateCompare {
                        field,
                        op: op.to_string(),
                        value: val,
                    }
                });
            }
        }

        Err(PortfolioError::script(format!(
            "Invalid state assertion: '{value}'. Expected field=value or field>=value"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Event {
        EventParser::new().parse_one(input).unwrap()
    }

    #[test]
    fn test_parse_key_enter() {
        match parse("key:enter") {
            Event::Key(key) => {
                assert_eq!(key.code, KeyCode::Enter);
                assert!(key.modifiers.is_empty());
            }
            other => panic!("Expected Key event, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_key_with_modifier() {
        match parse("key:alt+d") {
            Event::Key(key) => {
                assert_eq!(key.code, KeyCode::Char('d'));
                assert!(key.modifiers.contains(KeyModifiers::ALT));
            }
            other => panic!("Expected Key event, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_type_keeps_inner_spaces() {
        match parse("type:cr -about") {
            Event::Type(text) => assert_eq!(text, "cr -about"),
            other => panic!("Expected Type event, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_click() {
        match parse("click:12:3") {
            Event::Click { column, row } => assert_eq!((column, row), (12, 3)),
            other => panic!("Expected Click event, got {other:?}"),
        }
        assert!(EventParser::new().parse_one("click:12").is_err());
    }

    #[test]
    fn test_parse_scroll() {
        assert!(matches!(parse("scroll:up"), Event::Scroll { up: true }));
        assert!(matches!(parse("scroll:down"), Event::Scroll { up: false }));
        assert!(EventParser::new().parse_one("scroll:left").is_err());
    }

    #[test]
    fn test_parse_wait_units() {
        assert!(matches!(parse("wait:100ms"), Event::Wait(d) if d == Duration::from_millis(100)));
        assert!(matches!(parse("wait:2s"), Event::Wait(d) if d == Duration::from_secs(2)));
        assert!(matches!(parse("wait:100"), Event::Wait(d) if d == Duration::from_millis(100)));
    }

    #[test]
    fn test_parse_resize() {
        assert!(matches!(parse("resize:120x40"), Event::Resize(120, 40)));
    }

    #[test]
    fn test_parse_function_keys() {
        for n in 1..=12 {
            match parse(&format!("key:f{n}")) {
                Event::Key(key) => assert_eq!(key.code, KeyCode::F(n)),
                other => panic!("Expected Key event, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_comma_separated_and_comments() {
        let script = r#"
# open the terminal
key:t
type:cr -help,key:enter

wait:100
"#;
        let events = EventParser::new().parse_all(script).unwrap();
        assert_eq!(events.len(), 4);
    }

    #[test]
    fn test_parse_assert_state() {
        match parse("assert:state:view=terminal") {
            Event::Assert(Assertion::StateEquals { field, value }) => {
                assert_eq!(field, "view");
                assert_eq!(value, "terminal");
            }
            other => panic!("Expected StateEquals, got {other:?}"),
        }
        match parse("assert:state:history_len>=2") {
            Event::Assert(Assertion::StateCompare { field, op, value }) => {
                assert_eq!((field.as_str(), op.as_str(), value.as_str()), ("history_len", ">=", "2"));
            }
            other => panic!("Expected StateCompare, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_errors_name_the_line() {
        let err = EventParser::new()
            .parse_all("key:enter\nbogus:thing")
            .unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_display_round_trips_click() {
        assert_eq!(parse("click:4:1").to_string(), "click:4:1");
        assert_eq!(parse("key:ctrl+w").to_string(), "key:ctrl+w");
    }

    #[test]
    fn test_compare_values() {
        assert!(compare_values(Some("3"), ">=", "2"));
        assert!(!compare_values(Some("1"), ">", "2"));
        assert!(compare_values(Some("gui"), "=", "gui"));
        assert!(!compare_values(None, "=", "gui"));
    }
}
