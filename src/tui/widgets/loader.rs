//! Loading overlay shown while a view switch is in flight.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Gauge, Widget},
};

const OVERLAY_WIDTH: u16 = 50;
const OVERLAY_HEIGHT: u16 = 3;

/// Centered progress bar over whatever view is underneath.
pub struct LoaderOverlay {
    percent: u8,
}

impl LoaderOverlay {
    pub fn new(percent: u8) -> Self {
        Self {
            percent: percent.min(100),
        }
    }

    /// Rectangle the overlay occupies inside `area`.
    pub fn area(area: Rect) -> Rect {
        let width = OVERLAY_WIDTH.min(area.width);
        let height = OVERLAY_HEIGHT.min(area.height);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }
}

impl Widget for LoaderOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let overlay = Self::area(area);
        Clear.render(overlay, buf);

        Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green))
                    .title(" Loading "),
            )
            .gauge_style(
                Style::default()
                    .fg(Color::Green)
                    .bg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            )
            .percent(u16::from(self.percent))
            .render(overlay, buf);
    }
}
