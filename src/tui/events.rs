//! Event handling for the TUI.
//!
//! Translates crossterm input into the events the application reacts to.

use crate::error::{PortfolioError, Result};
use crossterm::event::{
    self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

/// Application events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Left mouse button pressed at a cell.
    Click { column: u16, row: u16 },
    /// Mouse wheel.
    ScrollUp,
    ScrollDown,
    /// The terminal was resized.
    Resize(u16, u16),
    /// A periodic tick (for animations/updates).
    Tick,
}

impl Event {
    /// Maps a crossterm event. Key releases and unused mouse activity
    /// become `None`.
    pub fn from_crossterm(event: CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Self::Key(key)),
            CrosstermEvent::Mouse(mouse) => Self::from_mouse(mouse),
            CrosstermEvent::Resize(width, height) => Some(Self::Resize(width, height)),
            _ => None,
        }
    }

    fn from_mouse(mouse: MouseEvent) -> Option<Self> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Self::Click {
                column: mouse.column,
                row: mouse.row,
            }),
            MouseEventKind::ScrollUp => Some(Self::ScrollUp),
            MouseEventKind::ScrollDown => Some(Self::ScrollDown),
            _ => None,
        }
    }
}

/// Blocking poll used from `spawn_blocking`.
///
/// Waits up to `tick_rate` for input; returns [`Event::Tick`] on timeout.
pub fn poll(tick_rate: Duration) -> Result<Event> {
    if event::poll(tick_rate)
        .map_err(|e| PortfolioError::terminal(format!("Failed to poll events: {e}")))?
    {
        let event = event::read()
            .map_err(|e| PortfolioError::terminal(format!("Failed to read event: {e}")))?;
        Ok(Event::from_crossterm(event).unwrap_or(Event::Tick))
    } else {
        Ok(Event::Tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn mouse(kind: MouseEventKind) -> CrosstermEvent {
        CrosstermEvent::Mouse(MouseEvent {
            kind,
            column: 4,
            row: 2,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_key_press_maps_to_key() {
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            Event::from_crossterm(CrosstermEvent::Key(key)),
            Some(Event::Key(key))
        );
    }

    #[test]
    fn test_key_release_is_dropped() {
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(Event::from_crossterm(CrosstermEvent::Key(key)), None);
    }

    #[test]
    fn test_left_click() {
        assert_eq!(
            Event::from_crossterm(mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(Event::Click { column: 4, row: 2 })
        );
        assert_eq!(
            Event::from_crossterm(mouse(MouseEventKind::Down(MouseButton::Right))),
            None
        );
        assert_eq!(Event::from_crossterm(mouse(MouseEventKind::Moved)), None);
    }

    #[test]
    fn test_wheel() {
        assert_eq!(
            Event::from_crossterm(mouse(MouseEventKind::ScrollDown)),
            Some(Event::ScrollDown)
        );
    }

    #[test]
    fn test_resize() {
        assert_eq!(
            Event::from_crossterm(CrosstermEvent::Resize(100, 30)),
            Some(Event::Resize(100, 30))
        );
    }
}
