//! Command history for the shell.
//!
//! A linear list with a cursor in `[0, len]`. `len` is the "fresh input"
//! position: landing there clears the prompt.

/// Direction of a history navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    /// Towards older entries (ArrowUp).
    Older,
    /// Towards newer entries (ArrowDown).
    Newer,
}

/// Entered commands, oldest first.
#[derive(Debug, Default, Clone)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl CommandHistory {
    /// Creates a new empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry and moves the cursor one past the end.
    ///
    /// The caller is responsible for not pushing empty input.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
        self.cursor = self.entries.len();
    }

    /// Moves the cursor one step, clamped to `[0, len]`.
    ///
    /// Returns the text the prompt should show: the entry under the cursor,
    /// or an empty string at the fresh-input position. Returns `None` when
    /// the history is empty and nothing should change.
    pub fn navigate(&mut self, direction: HistoryDirection) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }

        self.cursor = match direction {
            HistoryDirection::Older => self.cursor.saturating_sub(1),
            HistoryDirection::Newer => (self.cursor + 1).min(self.entries.len()),
        };

        Some(
            self.entries
                .get(self.cursor)
                .map(String::as_str)
                .unwrap_or(""),
        )
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the number of entries in history.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns all history entries (oldest first).
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
