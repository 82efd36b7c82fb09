//! Falling-glyph backdrop behind the selector screen.
//!
//! Every other screen column carries a drop. Each frame a drop moves one row
//! down and leaves a random glyph behind it; once it has fallen off the
//! bottom it restarts at the top with a small chance per frame.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Glyphs a drop can leave behind.
pub const GLYPHS: &[u8] =
    b"01ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Time between two frames.
pub const FRAME: Duration = Duration::from_millis(50);

/// Glyphs kept visible behind each drop.
pub const TRAIL_LEN: usize = 8;

/// Screen columns per drop.
pub const COLUMN_SPACING: u16 = 2;

/// Chance, per thousand frames, that a drop past the bottom restarts.
const RESTART_PER_MILLE: u64 = 25;

/// Frames replayed at most per tick after a stall.
const MAX_CATCH_UP: u32 = 4;

/// One glyph left on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub row: u16,
    pub symbol: char,
}

#[derive(Debug, Clone, Default)]
struct Column {
    head: u16,
    /// Newest first.
    trail: VecDeque<Glyph>,
}

/// Backdrop state.
pub struct MatrixRain {
    rng: StdRng,
    drops: Vec<Column>,
    height: u16,
    last_frame: Option<Instant>,
}

impl MatrixRain {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            drops: Vec::new(),
            height: 0,
            last_frame: None,
        }
    }

    /// Matches the drop count to the area. New drops start at a random row
    /// so the columns do not fall in lockstep.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.height = height;
        let columns = usize::from(width.div_ceil(COLUMN_SPACING));
        self.drops.truncate(columns);
        while self.drops.len() < columns {
            let head = self.roll(u64::from(height.max(1))) as u16;
            self.drops.push(Column {
                head,
                trail: VecDeque::new(),
            });
        }
    }

    /// Number of drops.
    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    /// Visible glyphs of one drop, newest first.
    pub fn trail(&self, column: usize) -> impl Iterator<Item = &Glyph> {
        self.drops
            .get(column)
            .into_iter()
            .flat_map(|drop| drop.trail.iter())
    }

    /// Plays as many frames as have elapsed since the last call.
    pub fn advance(&mut self, now: Instant) {
        let Some(last) = self.last_frame else {
            self.last_frame = Some(now);
            self.step();
            return;
        };

        let elapsed = now.saturating_duration_since(last);
        let frames = (elapsed.as_millis() / FRAME.as_millis()) as u32;
        if frames == 0 {
            return;
        }
        for _ in 0..frames.min(MAX_CATCH_UP) {
            self.step();
        }
        self.last_frame = Some(last + FRAME * frames);
    }

    /// Moves every drop one row.
    pub fn step(&mut self) {
        for i in 0..self.drops.len() {
            let symbol = char::from(GLYPHS[self.roll(GLYPHS.len() as u64) as usize]);
            let restart = self.drops[i].head >= self.height && self.roll(1000) < RESTART_PER_MILLE;

            let drop = &mut self.drops[i];
            if drop.head < self.height {
                drop.trail.push_front(Glyph {
                    row: drop.head,
                    symbol,
                });
            } else {
                // Off screen: the tail keeps draining
                drop.trail.pop_back();
            }
            drop.trail.truncate(TRAIL_LEN);

            if restart {
                drop.head = 0;
            } else {
                drop.head = drop.head.saturating_add(1);
            }
        }
    }

    /// Uniform value in `0..bound`.
    fn roll(&mut self, bound: u64) -> u64 {
        let mut buf = [0u8; 8];
        self.rng.fill_bytes(&mut buf);
        u64::from_le_bytes(buf) % bound.max(1)
    }
}

impl Default for MatrixRain {
    fn default() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos() as u64);
        Self::new(seed)
    }
}
