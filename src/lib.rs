//! CR0M80's portfolio: a simulated shell, a scrollable page and the mode
//! selector in front of them.
//!
//! This library exposes the core modules for the binary and for integration
//! tests.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod portfolio;
pub mod shell;
pub mod tui;
