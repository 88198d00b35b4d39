//! Actions that modules and commands return to the shell

use crate::app::Tab;

/// Actions returned by modules to communicate state changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Switch the dashboard to a tab
    SelectTab(Tab),

    /// Flip the notes panel open/closed
    ToggleNotes,

    /// Close the notes panel if it is open
    CloseNotes,

    /// Add a note with the given text
    AddNote(String),

    /// Show notification in status bar
    Notify(String, NotifyLevel),

    /// Show or hide the help popup
    ToggleHelp,

    /// Request quit
    Quit,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
