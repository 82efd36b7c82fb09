//! Terminal window body: scrollback followed by the live prompt.

use crate::shell::{Entry, EntryKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Text broken into rows by display width.
struct Wrapped {
    rows: Vec<String>,
    /// (row, column) of the cell each char starts in.
    starts: Vec<(usize, usize)>,
    /// Cell just past the last char.
    end: (usize, usize),
}

impl Wrapped {
    /// Splits `text` into rows at most `width` cells wide, keeping spaces. A
    /// wide glyph that would straddle the edge moves to the next row.
    fn new(text: &str, width: usize) -> Self {
        let width = width.max(1);
        let mut rows = vec![String::new()];
        let mut starts = Vec::new();
        let mut col = 0;

        for c in text.chars() {
            let w = c.width().unwrap_or(0);
            if col > 0 && col + w > width {
                rows.push(String::new());
                col = 0;
            }
            starts.push((rows.len() - 1, col));
            if let Some(row) = rows.last_mut() {
                row.push(c);
            }
            col += w;
        }

        let end = (rows.len() - 1, col);
        Self { rows, starts, end }
    }

    /// Cell the cursor occupies when it sits before char `index`.
    fn cursor_at(&self, index: usize, width: usize) -> (usize, usize) {
        match self.starts.get(index) {
            Some(&cell) => cell,
            None if self.end.1 >= width => (self.end.0 + 1, 0),
            None => self.end,
        }
    }
}

fn hard_wrap(text: &str, width: usize) -> Vec<String> {
    Wrapped::new(text, width).rows
}

/// Prompt label style.
fn label_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

fn entry_style(entry: &Entry) -> Style {
    if entry.is_art() {
        return Style::default().fg(Color::LightGreen);
    }
    match entry.kind {
        EntryKind::Banner => Style::default().fg(Color::Cyan),
        EntryKind::CommandLine => Style::default().fg(Color::White),
        EntryKind::Error => Style::default().fg(Color::Red),
        EntryKind::Normal => Style::default().fg(Color::Gray),
    }
}

/// Laid-out rows of the terminal body plus where the cursor goes.
#[derive(Debug)]
pub struct TerminalLayout {
    pub lines: Vec<Line<'static>>,
    /// Cursor position as (row index into `lines`, column).
    pub cursor: (usize, u16),
}

impl TerminalLayout {
    /// Lays out every entry and the prompt for a body `width` cells wide.
    ///
    /// Art entries are never wrapped; they are clipped at the right edge.
    pub fn build(
        entries: &[Entry],
        label: &str,
        prompt: &str,
        cursor: usize,
        width: u16,
    ) -> Self {
        let width = usize::from(width.max(1));
        let mut lines = Vec::new();

        for entry in entries {
            let style = entry_style(entry);
            let art = entry.is_art();

            for raw in entry.text.split('\n') {
                if art {
                    lines.push(Line::from(Span::styled(raw.to_string(), style)));
                    continue;
                }

                let echo = entry.kind == EntryKind::CommandLine
                    && starts_with_label(raw, label);
                for (i, row) in hard_wrap(raw, width).into_iter().enumerate() {
                    if echo && i == 0 {
                        lines.push(styled_echo(row, label, style));
                    } else {
                        lines.push(Line::from(Span::styled(row, style)));
                    }
                }
            }
        }

        // Prompt: label, a space, then the input, wrapped as one string
        let full = format!("{label} {prompt}");
        let prefix = label.chars().count() + 1;
        let wrapped = Wrapped::new(&full, width);
        let (row_offset, cursor_col) = wrapped.cursor_at(prefix + cursor, width);
        let first_prompt_row = lines.len();
        for (i, row) in wrapped.rows.into_iter().enumerate() {
            if i == 0 {
                lines.push(styled_echo(row, label, Style::default().fg(Color::White)));
            } else {
                lines.push(Line::from(Span::styled(row, Style::default().fg(Color::White))));
            }
        }

        let mut cursor_row = first_prompt_row + row_offset;
        let cursor_col = u16::try_from(cursor_col).unwrap_or(u16::MAX);
        if cursor_row >= lines.len() {
            // Cursor sits just past a full last row
            lines.push(Line::default());
            cursor_row = lines.len() - 1;
        }

        Self {
            lines,
            cursor: (cursor_row, cursor_col),
        }
    }

    /// First row to show so that the bottom of the content is visible,
    /// shifted up by `scroll` rows.
    pub fn first_visible(&self, height: u16, scroll: usize) -> usize {
        let height = usize::from(height);
        let max_start = self.lines.len().saturating_sub(height);
        max_start.saturating_sub(scroll)
    }
}

fn starts_with_label(raw: &str, label: &str) -> bool {
    !label.is_empty() && raw.starts_with(label)
}

fn styled_echo(row: String, label: &str, style: Style) -> Line<'static> {
    match row.strip_prefix(label) {
        Some(rest) if !label.is_empty() => Line::from(vec![
            Span::styled(label.to_string(), label_style()),
            Span::styled(rest.to_string(), style),
        ]),
        _ => Line::from(Span::styled(row, style)),
    }
}

/// Renders a slice of a [`TerminalLayout`].
pub struct TerminalBody<'a> {
    layout: &'a TerminalLayout,
    first: usize,
}

impl<'a> TerminalBody<'a> {
    pub fn new(layout: &'a TerminalLayout, first: usize) -> Self {
        Self { layout, first }
    }
}

impl Widget for TerminalBody<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible: Vec<Line> = self
            .layout
            .lines
            .iter()
            .skip(self.first)
            .take(usize::from(area.height))
            .cloned()
            .collect();
        Paragraph::new(visible).render(area, buf);
    }
}
