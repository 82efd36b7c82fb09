//! Draws the falling-glyph backdrop.

use crate::tui::rain::{MatrixRain, COLUMN_SPACING};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// Glyphs older than this are drawn dim.
const BRIGHT_LEN: usize = 3;

pub struct RainBackdrop<'a> {
    rain: &'a MatrixRain,
}

impl<'a> RainBackdrop<'a> {
    pub fn new(rain: &'a MatrixRain) -> Self {
        Self { rain }
    }
}

fn glyph_style(age: usize) -> Style {
    match age {
        0 => Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD),
        a if a < BRIGHT_LEN => Style::default().fg(Color::Green),
        _ => Style::default().fg(Color::Green).add_modifier(Modifier::DIM),
    }
}

impl Widget for RainBackdrop<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for column in 0..self.rain.columns() {
            let Ok(offset) = u16::try_from(column) else {
                break;
            };
            let x = area.x.saturating_add(offset.saturating_mul(COLUMN_SPACING));
            if x >= area.right() {
                break;
            }

            for (age, glyph) in self.rain.trail(column).enumerate() {
                if glyph.row >= area.height {
                    continue;
                }
                let cell = &mut buf[(x, area.y + glyph.row)];
                cell.set_char(glyph.symbol);
                cell.set_style(glyph_style(age));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(buf: &Buffer, area: Rect) -> Vec<(u16, u16)> {
        let mut filled = Vec::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if buf[(x, y)].symbol() != " " {
                    filled.push((x, y));
                }
            }
        }
        filled
    }

    #[test]
    fn test_glyphs_land_on_even_columns_only() {
        let area = Rect::new(0, 0, 20, 10);
        let mut rain = MatrixRain::new(3);
        rain.resize(area.width, area.height);
        rain.step();

        let mut buf = Buffer::empty(area);
        RainBackdrop::new(&rain).render(area, &mut buf);

        // One fresh glyph per drop
        let filled = symbols(&buf, area);
        assert_eq!(filled.len(), 10);
        assert!(filled.iter().all(|(x, _)| x % COLUMN_SPACING == 0));
    }

    #[test]
    fn test_stays_inside_smaller_area() {
        let mut rain = MatrixRain::new(3);
        rain.resize(40, 20);
        for _ in 0..4 {
            rain.step();
        }

        let full = Rect::new(0, 0, 40, 20);
        let area = Rect::new(4, 2, 10, 5);
        let mut buf = Buffer::empty(full);
        RainBackdrop::new(&rain).render(area, &mut buf);

        assert!(symbols(&buf, full)
            .iter()
            .all(|&(x, y)| x >= 4 && x < 14 && y >= 2 && y < 7));
    }

    #[test]
    fn test_newest_glyph_is_bold() {
        assert!(glyph_style(0).add_modifier.contains(Modifier::BOLD));
        assert!(glyph_style(BRIGHT_LEN).add_modifier.contains(Modifier::DIM));
    }
}
