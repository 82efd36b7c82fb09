//! GUI view: navigation bar plus the scrolling portfolio page.

use crate::tui::gui::{GuiState, PageRow, Section};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{LineGauge, Paragraph, Widget},
};

/// Width of the name column in front of a skill gauge.
const SKILL_NAME_WIDTH: u16 = 18;

fn nav_label(index: usize, section: Section) -> String {
    format!(" {} {} ", index + 1, section.title())
}

/// Numbered section links across the top of the GUI view.
pub struct NavBar {
    current: Section,
}

impl NavBar {
    pub fn new(current: Section) -> Self {
        Self { current }
    }

    /// Cells covered by each section link, left to right. Links that do
    /// not fit are dropped.
    pub fn section_areas(area: Rect) -> Vec<(Section, Rect)> {
        let mut x = area.x;
        let mut areas = Vec::new();
        for (i, section) in Section::ALL.into_iter().enumerate() {
            let width = nav_label(i, section).chars().count() as u16;
            if x + width > area.right() {
                break;
            }
            areas.push((section, Rect::new(x, area.y, width, 1)));
            x += width + 1;
        }
        areas
    }
}

impl Widget for NavBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let base = Style::default().bg(Color::Black).fg(Color::Gray);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(base);
        }

        for (i, (section, rect)) in Self::section_areas(area).into_iter().enumerate() {
            let style = if section == self.current {
                Style::default()
                    .bg(Color::Green)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else {
                base
            };
            buf.set_string(rect.x, rect.y, nav_label(i, section), style);
        }
    }
}

/// The visible slice of the page.
pub struct PageView<'a> {
    gui: &'a GuiState,
    typing: &'a str,
}

impl<'a> PageView<'a> {
    pub fn new(gui: &'a GuiState, typing: &'a str) -> Self {
        Self { gui, typing }
    }
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self
            .gui
            .page()
            .rows()
            .iter()
            .skip(self.gui.scroll())
            .take(usize::from(area.height));

        for (offset, row) in rows.enumerate() {
            let line_area = Rect::new(area.x, area.y + offset as u16, area.width, 1);
            render_row(row, self.typing, line_area, buf);
        }
    }
}

fn render_row(row: &PageRow, typing: &str, area: Rect, buf: &mut Buffer) {
    match row {
        PageRow::Blank => {}
        PageRow::Heading(title) => {
            Paragraph::new(Line::from(vec![
                Span::styled("## ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    *title,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ),
            ]))
            .render(area, buf);
        }
        PageRow::Subheading(text) => {
            Paragraph::new(Span::styled(
                text.as_str(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))
            .render(area, buf);
        }
        PageRow::Text(text) => {
            Paragraph::new(Span::styled(text.as_str(), Style::default().fg(Color::Gray)))
                .render(area, buf);
        }
        PageRow::Link { label, url } => {
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{label}: "), Style::default().fg(Color::White)),
                Span::styled(
                    url.as_str(),
                    Style::default()
                        .fg(Color::LightBlue)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ]))
            .render(area, buf);
        }
        PageRow::SkillBar { name, level } => {
            let name_width = SKILL_NAME_WIDTH.min(area.width);
            buf.set_stringn(
                area.x,
                area.y,
                name,
                usize::from(name_width),
                Style::default().fg(Color::White),
            );
            let gauge_area = Rect {
                x: area.x + name_width,
                width: area.width - name_width,
                ..area
            };
            if gauge_area.width > 0 {
                LineGauge::default()
                    .filled_style(Style::default().fg(Color::Green))
                    .unfilled_style(Style::default().fg(Color::DarkGray))
                    .line_set(symbols::line::THICK)
                    .ratio(f64::from((*level).min(100)) / 100.0)
                    .render(gauge_area, buf);
            }
        }
        PageRow::Typing => {
            Paragraph::new(Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    typing,
                    Style::default()
                        .fg(Color::LightGreen)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "▌",
                    Style::default()
                        .fg(Color::LightGreen)
                        .add_modifier(Modifier::SLOW_BLINK),
                ),
            ]))
            .render(area, buf);
        }
    }
}
