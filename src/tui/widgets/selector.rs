//! Mode selection screen.

use crate::tui::app::SelectorOption;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

const CARD_WIDTH: u16 = 30;
const CARD_HEIGHT: u16 = 7;

const TITLE: &str = "Choose your interface";
const HINT: &str = "←/→ select · Enter open · t terminal · g gui · q quit";

/// Blanks a centred one-row strip wide enough for `text` plus a margin, so
/// the backdrop does not run through it.
fn clear_behind(text: &str, row: Rect, buf: &mut Buffer) {
    let width = (text.width() as u16 + 2).min(row.width);
    let strip = Rect {
        x: row.x + (row.width - width) / 2,
        width,
        height: row.height.min(1),
        ..row
    };
    Clear.render(strip, buf);
}

fn card_text(option: SelectorOption) -> (&'static str, &'static str, &'static str) {
    match option {
        SelectorOption::Terminal => (">_", "Terminal", "Explore with shell commands"),
        SelectorOption::Gui => ("[#]", "GUI", "Scroll through the portfolio"),
    }
}

/// The two mode cards, side by side and centred.
pub struct SelectorScreen {
    selected: SelectorOption,
}

impl SelectorScreen {
    pub fn new(selected: SelectorOption) -> Self {
        Self { selected }
    }

    /// Title row and the two card rectangles for a screen area.
    fn layout(area: Rect) -> (Rect, [(SelectorOption, Rect); 2]) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(2),
                Constraint::Length(CARD_HEIGHT),
                Constraint::Length(2),
                Constraint::Fill(1),
            ])
            .split(area);

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(CARD_WIDTH),
                Constraint::Length(4),
                Constraint::Length(CARD_WIDTH),
                Constraint::Fill(1),
            ])
            .split(rows[2]);

        (
            rows[1],
            [
                (SelectorOption::Terminal, cols[1]),
                (SelectorOption::Gui, cols[3]),
            ],
        )
    }

    /// Clickable card areas.
    pub fn option_areas(area: Rect) -> Vec<(SelectorOption, Rect)> {
        Self::layout(area).1.to_vec()
    }
}

impl Widget for SelectorScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title_area, cards) = Self::layout(area);

        clear_behind(TITLE, title_area, buf);
        Paragraph::new(Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(title_area, buf);

        for (option, rect) in cards {
            let selected = option == self.selected;
            let border_style = if selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let (icon, name, blurb) = card_text(option);

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style);
            let text = vec![
                Line::from(""),
                Line::from(Span::styled(icon, Style::default().fg(Color::Green))),
                Line::from(Span::styled(
                    name,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(blurb, Style::default().fg(Color::Gray))),
            ];
            Clear.render(rect, buf);
            Paragraph::new(text)
                .block(block)
                .alignment(Alignment::Center)
                .render(rect, buf);
        }

        let hint_area = Rect {
            y: cards[0].1.bottom().min(area.bottom().saturating_sub(1)),
            height: 1,
            ..area
        };
        if hint_area.y + 1 < area.bottom() {
            let hint_row = Rect {
                y: hint_area.y + 1,
                ..hint_area
            };
            clear_behind(HINT, hint_row, buf);
            Paragraph::new(Line::from(Span::styled(
                HINT,
                Style::default().fg(Color::DarkGray),
            )))
            .alignment(Alignment::Center)
            .render(hint_row, buf);
        }
    }
}
