//! Header widgets for the TUI.
//!
//! [`Header`] is the application bar at the top of the screen. [`TitleBar`]
//! is the title row of the terminal window with its three buttons.

use crate::shell::WindowControl;
use crate::tui::app::View;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// Application header bar.
pub struct Header {
    view: View,
    loading: Option<u8>,
}

impl Header {
    /// Creates a new header widget.
    pub fn new(view: View, loading: Option<u8>) -> Self {
        Self { view, loading }
    }
}

fn view_label(view: View) -> &'static str {
    match view {
        View::Selector => "select mode",
        View::Terminal => "terminal",
        View::Gui => "gui",
    }
}

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .bg(Color::Green)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD);

        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(style);
        }

        // Left side: handle and version
        let left_text = format!(" {} v{}", crate::portfolio::HANDLE, env!("CARGO_PKG_VERSION"));
        let left_span = Span::styled(left_text, style);
        buf.set_span(area.x, area.y, &left_span, area.width);

        // Right side: loader progress while switching, otherwise the view
        let right_text = match self.loading {
            Some(percent) => format!(" loading {percent}% "),
            None => format!(" [{}] ", view_label(self.view)),
        };
        let right_width = right_text.chars().count() as u16;
        if right_width < area.width {
            let right_x = area.right().saturating_sub(right_width);
            buf.set_string(right_x, area.y, &right_text, style);
        }
    }
}

/// Button glyph followed by a space.
const BUTTON_WIDTH: u16 = 2;

/// Title row of the terminal window.
pub struct TitleBar<'a> {
    title: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    /// Cells occupied by each window button, left to right.
    pub fn control_areas(area: Rect) -> Vec<(WindowControl, Rect)> {
        [
            WindowControl::Close,
            WindowControl::Minimize,
            WindowControl::Maximize,
        ]
        .into_iter()
        .enumerate()
        .filter_map(|(i, control)| {
            let x = area.x + 1 + i as u16 * BUTTON_WIDTH;
            (x < area.right()).then(|| (control, Rect::new(x, area.y, 1, 1)))
        })
        .collect()
    }
}

fn control_color(control: WindowControl) -> Color {
    match control {
        WindowControl::Close => Color::Red,
        WindowControl::Minimize => Color::Yellow,
        WindowControl::Maximize => Color::Green,
    }
}

impl Widget for TitleBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(style);
        }

        for (control, rect) in Self::control_areas(area) {
            buf.set_string(
                rect.x,
                rect.y,
                "●",
                style.fg(control_color(control)),
            );
        }

        let title_width = self.title.width() as u16;
        if title_width + 10 < area.width {
            let x = area.x + (area.width - title_width) / 2;
            buf.set_string(x, area.y, self.title, style.add_modifier(Modifier::BOLD));
        }
    }
}
