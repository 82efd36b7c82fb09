//! TUI widgets for the portfolio.
//!
//! Contains reusable UI components.

pub mod header;
pub mod loader;
pub mod page;
pub mod rain;
pub mod selector;
pub mod terminal;
