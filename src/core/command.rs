//! Command parser for the : command line

use crate::app::Tab;

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation
    Tab(Tab),

    // Notes
    Notes,
    Note(Option<String>),

    // Shell
    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

impl Command {
    /// Turn a parsed command into the action the shell applies.
    pub fn into_action(self) -> super::Action {
        use super::{Action, NotifyLevel};

        match self {
            Command::Tab(tab) => Action::SelectTab(tab),
            Command::Notes => Action::ToggleNotes,
            Command::Note(Some(text)) => Action::AddNote(text),
            Command::Note(None) => Action::Notify("Usage: :note <text>".into(), NotifyLevel::Warn),
            Command::Help => Action::ToggleHelp,
            Command::Quit => Action::Quit,
            Command::Unknown(s) => {
                Action::Notify(format!("Unknown command: {}", s), NotifyLevel::Warn)
            }
        }
    }
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().map(|s| s.trim_start().to_string());

    match cmd.to_lowercase().as_str() {
        // Navigation
        "overview" | "ov" => Command::Tab(Tab::Overview),
        "audience" | "aud" => Command::Tab(Tab::Audience),
        "campaign" | "camp" => Command::Tab(Tab::Campaign),
        "regions" | "reg" => Command::Tab(Tab::Regions),
        "timeline" | "time" => Command::Tab(Tab::Timeline),

        // Notes
        "notes" => Command::Notes,
        "note" | "add" => Command::Note(args.filter(|text| !text.trim().is_empty())),

        // Shell
        "help" | "?" => Command::Help,
        "quit" | "q" => Command::Quit,

        _ => Command::Unknown(input.to_string()),
    }
}
