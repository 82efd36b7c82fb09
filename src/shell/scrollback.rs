//! Scrollback buffer: every block the shell has printed.

/// Display category of a scrollback entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// The welcome banner at the top.
    Banner,
    /// Echo of a submitted command, prompt label included.
    CommandLine,
    /// Error output.
    Error,
    /// Regular output.
    Normal,
}

/// One printed block.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Entry {
    pub kind: EntryKind,
    pub text: String,
}

impl Entry {
    pub fn new(kind: EntryKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Block-letter art and link lists render unwrapped in their own colour.
    pub fn is_art(&self) -> bool {
        self.text.contains("██") || self.text.contains('➤')
    }
}

/// Ordered, append-only list of entries. The first entry is permanent.
#[derive(Debug, Clone)]
pub struct Scrollback {
    entries: Vec<Entry>,
}

impl Scrollback {
    /// Creates a scrollback holding only the permanent first entry.
    pub fn new(banner: impl Into<String>) -> Self {
        Self {
            entries: vec![Entry::new(EntryKind::Banner, banner)],
        }
    }

    pub fn push(&mut self, kind: EntryKind, text: impl Into<String>) {
        self.entries.push(Entry::new(kind, text));
    }

    /// Removes everything except the first entry.
    pub fn clear(&mut self) {
        self.entries.truncate(1);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: the banner cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }
}
