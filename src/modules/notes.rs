//! Session-only notes panel
//!
//! Notes live in memory for as long as the panel does. The panel keeps its
//! own list and input buffer; whether it is shown is decided by the shell.

use std::fmt;

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::{Action, Module};

/// Identifier of a note, unique and increasing within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteId(i64);

impl NoteId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for NoteId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub text: String,
}

/// Hands out note ids based on the wall clock in milliseconds.
///
/// Two notes created in the same millisecond (or after the clock stepped
/// back) get `last + 1`, so ids stay strictly increasing.
#[derive(Debug, Default)]
struct IdClock {
    last: Option<i64>,
}

impl IdClock {
    fn next(&mut self) -> NoteId {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn next_at(&mut self, now_ms: i64) -> NoteId {
        let id = match self.last {
            Some(last) if now_ms <= last => last + 1,
            _ => now_ms,
        };
        self.last = Some(id);
        NoteId(id)
    }
}

#[derive(Debug, Default)]
pub struct NotesPanel {
    notes: Vec<Note>,
    input: String,
    selected: Option<usize>,
    ids: IdClock,
}

impl NotesPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn push_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// Add the input buffer as a note and clear the buffer.
    ///
    /// Whitespace-only input is ignored and left in place.
    pub fn submit(&mut self) -> Option<NoteId> {
        let text = std::mem::take(&mut self.input);
        match self.add_note(&text) {
            Some(id) => Some(id),
            None => {
                self.input = text;
                None
            }
        }
    }

    /// Append a note and select it, so the list scrolls to the new row.
    /// Returns `None` without touching the list when `text` is empty after
    /// trimming.
    pub fn add_note(&mut self, text: &str) -> Option<NoteId> {
        if text.trim().is_empty() {
            return None;
        }
        let id = self.ids.next();
        self.notes.push(Note {
            id,
            text: text.to_string(),
        });
        self.selected = Some(self.notes.len() - 1);
        tracing::info!(note_id = %id, count = self.notes.len(), "note added");
        Some(id)
    }

    /// Remove the note with `id`. Unknown ids are a no-op.
    pub fn delete_note(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        let removed = self.notes.len() != before;
        if removed {
            tracing::info!(note_id = %id, count = self.notes.len(), "note deleted");
            self.clamp_selection();
        }
        removed
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_note(&self) -> Option<&Note> {
        self.selected.and_then(|idx| self.notes.get(idx))
    }

    pub fn select(&mut self, index: usize) {
        if index < self.notes.len() {
            self.selected = Some(index);
        }
    }

    pub fn move_selection_up(&mut self) {
        self.selected = match self.selected {
            _ if self.notes.is_empty() => None,
            Some(idx) => Some(idx.saturating_sub(1)),
            None => Some(self.notes.len() - 1),
        };
    }

    pub fn move_selection_down(&mut self) {
        self.selected = match self.selected {
            _ if self.notes.is_empty() => None,
            Some(idx) => Some((idx + 1).min(self.notes.len() - 1)),
            None => Some(0),
        };
    }

    pub fn delete_selected(&mut self) -> bool {
        match self.selected_note().map(|note| note.id) {
            Some(id) => self.delete_note(id),
            None => false,
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = match self.selected {
            _ if self.notes.is_empty() => None,
            Some(idx) => Some(idx.min(self.notes.len() - 1)),
            None => None,
        };
    }
}

impl Module for NotesPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.kind != KeyEventKind::Press {
            return Action::None;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => Action::CloseNotes,
            (KeyCode::Enter, _) => {
                self.submit();
                Action::None
            }
            (KeyCode::Char('a'), mods) if mods.contains(KeyModifiers::CONTROL) => {
                self.submit();
                Action::None
            }
            (KeyCode::Char('d'), mods) if mods.contains(KeyModifiers::CONTROL) => {
                self.delete_selected();
                Action::None
            }
            (KeyCode::Delete, _) => {
                self.delete_selected();
                Action::None
            }
            (KeyCode::Up, _) => {
                self.move_selection_up();
                Action::None
            }
            (KeyCode::Down, _) => {
                self.move_selection_down();
                Action::None
            }
            (KeyCode::Backspace, _) => {
                self.pop_char();
                Action::None
            }
            (KeyCode::Char(_), mods) if mods.contains(KeyModifiers::CONTROL) => Action::None,
            (KeyCode::Char(ch), _) => {
                self.push_char(ch);
                Action::None
            }
            _ => Action::None,
        }
    }
}
