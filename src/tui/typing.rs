//! Typewriter effect for the role line on the GUI home section.
//!
//! Phrases are typed one after the other. The last one stays on screen for a
//! while, is deleted, and the cycle starts over.

use std::time::{Duration, Instant};

pub const INITIAL_DELAY: Duration = Duration::from_millis(1000);
pub const TYPE_DELAY: Duration = Duration::from_millis(100);
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
pub const NEXT_PHRASE_DELAY: Duration = Duration::from_millis(900);
pub const PAUSE_AFTER_ALL: Duration = Duration::from_millis(5000);
pub const RESTART_DELAY: Duration = Duration::from_millis(700);

/// Typing state machine. Each [`step`](Self::step) adds or removes one
/// character and returns how long to wait before the next step.
#[derive(Debug, Clone)]
pub struct TypingAnimation {
    phrases: &'static [&'static str],
    index: usize,
    chars: usize,
    deleting: bool,
    displayed: String,
}

impl TypingAnimation {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self {
            phrases,
            index: 0,
            chars: 0,
            deleting: false,
            displayed: String::new(),
        }
    }

    /// Text currently on screen.
    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn step(&mut self) -> Duration {
        let Some(current) = self.phrases.get(self.index) else {
            return INITIAL_DELAY;
        };
        let len = current.chars().count();

        let mut delay = if self.deleting {
            self.chars = self.chars.saturating_sub(1);
            DELETE_DELAY
        } else {
            self.chars += 1;
            TYPE_DELAY
        };
        self.displayed = current.chars().take(self.chars).collect();

        if !self.deleting && self.chars >= len {
            if self.index + 1 < self.phrases.len() {
                // The finished phrase stays visible until the next one starts.
                self.index += 1;
                self.chars = 0;
                delay = NEXT_PHRASE_DELAY;
            } else {
                self.deleting = true;
                delay = PAUSE_AFTER_ALL;
            }
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.index = 0;
            delay = RESTART_DELAY;
        }

        delay
    }
}

/// Drives a [`TypingAnimation`] from wall-clock ticks.
#[derive(Debug, Clone)]
pub struct TypingClock {
    animation: TypingAnimation,
    due: Instant,
}

impl TypingClock {
    /// Starts a fresh animation; the first character appears after
    /// [`INITIAL_DELAY`].
    pub fn start(phrases: &'static [&'static str], now: Instant) -> Self {
        Self {
            animation: TypingAnimation::new(phrases),
            due: now + INITIAL_DELAY,
        }
    }

    /// Runs every step that fell due up to `now`.
    pub fn advance(&mut self, now: Instant) {
        while self.due <= now {
            let delay = self.animation.step();
            self.due += delay;
        }
    }

    pub fn displayed(&self) -> &str {
        self.animation.displayed()
    }
}
