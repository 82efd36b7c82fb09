//! Command table, handlers and their output types.
//!
//! Kept free of any interpreter or UI state so the table and every handler
//! can be tested on their own.

pub mod art;
pub mod definitions;
pub mod handlers;
pub mod help;
pub mod output;

pub use definitions::{CommandDef, CommandKind, COMMANDS};
pub use handlers::{dispatch, CommandContext};
pub use output::{CommandOutput, ControlAction, Transition};
