//! Presentation-agnostic command output.
//!
//! Handlers describe what happened; the interpreter turns that into
//! scrollback entries and state changes.

/// Output from a command handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// A content block for the scrollback.
    Text(String),

    /// An error line for the scrollback.
    Error(String),

    /// An action on interpreter or application state.
    Control(ControlAction),
}

/// Control actions produced by commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    /// Wipe the scrollback down to the banner.
    ClearScrollback,

    /// Hand control to another view after the loader runs.
    Transition(Transition),
}

/// A mode switch gated by the loading transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Switch to the GUI page.
    Gui,
    /// Return to the mode selector.
    Selector,
}

impl Transition {
    /// The informational line printed when the transition starts.
    pub fn announcement(&self) -> &'static str {
        match self {
            Self::Gui => "[INFO] Switching to GUI mode...",
            Self::Selector => "[INFO] Returning to mode selection...",
        }
    }
}

impl CommandOutput {
    /// Creates a content block.
    pub fn text(msg: impl Into<String>) -> Self {
        Self::Text(msg.into())
    }

    /// Creates an error line.
    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    /// Creates a transition control action.
    pub fn transition(to: Transition) -> Self {
        Self::Control(ControlAction::Transition(to))
    }

    /// Creates a clear-scrollback control action.
    pub fn clear() -> Self {
        Self::Control(ControlAction::ClearScrollback)
    }
}
