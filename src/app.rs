use std::time::{Duration, Instant};

use crate::config::{Branding, Config};
use crate::core::{Action, NotifyLevel};
use crate::modules::notes::NotesPanel;
use crate::scroll::{PageScroll, ScrollLock, ScrollLockGuard};

/// Dashboard tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Tab {
    #[default]
    Overview,
    Audience,
    Campaign,
    Regions,
    Timeline,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Overview,
        Tab::Audience,
        Tab::Campaign,
        Tab::Regions,
        Tab::Timeline,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Audience => "Target Audience",
            Tab::Campaign => "Campaign",
            Tab::Regions => "Regions",
            Tab::Timeline => "Timeline",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Tab::Overview => '1',
            Tab::Audience => '2',
            Tab::Campaign => '3',
            Tab::Regions => '4',
            Tab::Timeline => '5',
        }
    }

    pub fn from_shortcut(ch: char) -> Option<Tab> {
        Tab::ALL.iter().copied().find(|tab| tab.shortcut() == ch)
    }

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Audience => "audience",
            Tab::Campaign => "campaign",
            Tab::Regions => "regions",
            Tab::Timeline => "timeline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

impl From<NotifyLevel> for StatusLevel {
    fn from(level: NotifyLevel) -> Self {
        match level {
            NotifyLevel::Info => StatusLevel::Info,
            NotifyLevel::Warn => StatusLevel::Warn,
            NotifyLevel::Error => StatusLevel::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug)]
pub struct App {
    /// Current active tab
    pub current_tab: Tab,
    pub notes: NotesPanel,
    pub page: PageScroll,
    pub input_mode: InputMode,
    pub command: CommandBar,
    pub status: Option<StatusMessage>,
    pub branding: Branding,
    pub notes_width: u16,
    pub help_open: bool,
    pub should_quit: bool,
    notes_open: bool,
    scroll_guard: Option<ScrollLockGuard>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            current_tab: Tab::default(),
            notes: NotesPanel::new(),
            page: PageScroll::new(ScrollLock::new()),
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            status: None,
            branding: config.branding.clone(),
            notes_width: config.notes_width_percent(),
            help_open: false,
            should_quit: false,
            notes_open: false,
            scroll_guard: None,
        }
    }

    /// Switch tabs. Selecting the active tab changes nothing.
    pub fn select_tab(&mut self, tab: Tab) {
        if self.current_tab == tab {
            return;
        }
        tracing::info!(from = self.current_tab.id(), to = tab.id(), "tab selected");
        self.current_tab = tab;
        self.page.reset();
    }

    pub fn cycle_tab(&mut self, forward: bool) {
        let index = Tab::ALL
            .iter()
            .position(|tab| *tab == self.current_tab)
            .unwrap_or(0);
        let next = if forward {
            (index + 1) % Tab::ALL.len()
        } else {
            (index + Tab::ALL.len() - 1) % Tab::ALL.len()
        };
        self.select_tab(Tab::ALL[next]);
    }

    pub fn notes_open(&self) -> bool {
        self.notes_open
    }

    /// Label for the control that flips the notes panel.
    pub fn notes_toggle_label(&self) -> &'static str {
        if self.notes_open {
            "Close Notes"
        } else {
            "Open Notes"
        }
    }

    pub fn open_notes(&mut self) {
        if self.notes_open {
            return;
        }
        self.notes_open = true;
        self.scroll_guard = Some(self.page.lock().acquire());
        tracing::info!(count = self.notes.len(), "notes opened");
    }

    pub fn close_notes(&mut self) {
        if !self.notes_open {
            return;
        }
        self.notes_open = false;
        self.scroll_guard = None;
        tracing::info!(count = self.notes.len(), "notes closed");
    }

    pub fn toggle_notes(&mut self) {
        if self.notes_open {
            self.close_notes();
        } else {
            self.open_notes();
        }
    }

    pub fn scroll_locked(&self) -> bool {
        self.page.lock().is_locked()
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > Duration::from_secs(3) {
                self.status = None;
            }
        }
    }

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    /// Put the last applied command back on the command line.
    pub fn recall_command(&mut self) {
        if let Some(last) = &self.command.last {
            self.command.input = last.clone();
        }
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        if input.is_empty() {
            self.exit_command();
            return;
        }

        let cmd = crate::core::parse_command(&input);
        if let crate::core::Command::Unknown(raw) = &cmd {
            tracing::warn!(command = %raw, "unknown command");
        }
        let action = cmd.into_action();
        self.command.last = Some(input);
        self.exit_command();
        self.apply_action(action);
    }

    /// Apply an action returned by a command or module
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::SelectTab(tab) => self.select_tab(tab),
            Action::ToggleNotes => self.toggle_notes(),
            Action::CloseNotes => self.close_notes(),
            Action::AddNote(text) => {
                if self.notes.add_note(&text).is_some() {
                    self.set_status(
                        format!("Note added ({} total)", self.notes.len()),
                        StatusLevel::Info,
                    );
                }
            }
            Action::Notify(msg, level) => self.set_status(msg, level.into()),
            Action::ToggleHelp => self.help_open = !self.help_open,
            Action::Quit => self.should_quit = true,
        }
    }
}
