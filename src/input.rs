//! Keyboard and mouse dispatch for the dashboard shell

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{App, InputMode, StatusLevel, Tab};
use crate::core::Module;
use crate::ui::layout::{self, rect_contains, NotesAreas, UiAreas};
use crate::ui::tabs::tab_at;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.help_open = false;
        }
        return;
    }

    match app.input_mode {
        InputMode::Command => handle_command_mode(app, key),
        InputMode::Normal if app.notes_open() => handle_notes_mode(app, key),
        InputMode::Normal => handle_normal_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.help_open = true,
        KeyCode::Char(':') => app.enter_command(),
        KeyCode::Char('n') => app.toggle_notes(),
        KeyCode::Char('[') | KeyCode::Left => app.cycle_tab(false),
        KeyCode::Char(']') | KeyCode::Right => app.cycle_tab(true),
        KeyCode::Char(ch @ '1'..='5') => {
            if let Some(tab) = Tab::from_shortcut(ch) {
                app.select_tab(tab);
            }
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.page.scroll_by(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.page.scroll_by(-1);
        }
        KeyCode::PageDown => {
            let amount = app.page.viewport().max(1) as i32;
            app.page.scroll_by(amount);
        }
        KeyCode::PageUp => {
            let amount = app.page.viewport().max(1) as i32;
            app.page.scroll_by(-amount);
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.page.to_top();
        }
        KeyCode::Char('G') | KeyCode::End => {
            app.page.to_bottom();
        }
        _ => {}
    }
}

fn handle_notes_mode(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('n') => {
                app.toggle_notes();
                return;
            }
            KeyCode::Char('y') => {
                handle_copy_to_clipboard(app);
                return;
            }
            _ => {}
        }
    }
    let action = app.notes.handle_key(key);
    app.apply_action(action);
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => app.apply_command(),
        KeyCode::Up => app.recall_command(),
        KeyCode::Backspace => {
            app.command.input.pop();
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.command.input.push(ch);
        }
        _ => {}
    }
}

/// Dispatch a mouse event against a terminal of `size`.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, size: Rect) {
    if app.help_open || app.input_mode == InputMode::Command {
        return;
    }
    let areas = layout::areas(size, app.notes_width, app.notes_toggle_label());
    let col = mouse.column;
    let row = mouse.row;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, &areas, col, row),
        MouseEventKind::ScrollUp => handle_scroll(app, &areas, col, row, true),
        MouseEventKind::ScrollDown => handle_scroll(app, &areas, col, row, false),
        _ => {}
    }
}

fn handle_click(app: &mut App, areas: &UiAreas, col: u16, row: u16) {
    if app.notes_open() {
        if rect_contains(areas.notes.panel, col, row) {
            handle_notes_click(app, &areas.notes, col, row);
        } else {
            app.close_notes();
        }
        return;
    }

    if rect_contains(areas.toggle_button, col, row) {
        app.toggle_notes();
        return;
    }

    if rect_contains(areas.tab_bar, col, row) {
        if let Some(tab) = tab_at(areas.tab_bar, col) {
            app.select_tab(tab);
        }
    }
}

fn handle_notes_click(app: &mut App, notes: &NotesAreas, col: u16, row: u16) {
    if rect_contains(notes.close_button, col, row) {
        app.close_notes();
        return;
    }
    if rect_contains(notes.add_button, col, row) {
        app.notes.submit();
        return;
    }
    if !rect_contains(notes.list, col, row) {
        return;
    }

    let Some(index) = note_index_at(app, notes, row) else {
        return;
    };
    let marker_width = crate::ui::notes::DELETE_MARKER.chars().count() as u16 + 1;
    if col < notes.list.x.saturating_add(marker_width) {
        if let Some(id) = app.notes.notes().get(index).map(|note| note.id) {
            app.notes.delete_note(id);
        }
    } else {
        app.notes.select(index);
    }
}

/// Row → note index, following the list's scroll offset for the selection.
fn note_index_at(app: &App, notes: &NotesAreas, row: u16) -> Option<usize> {
    let row_idx = row.checked_sub(notes.list.y)? as usize;
    let visible_height = notes.list.height.max(1) as usize;
    let selected = app.notes.selected().unwrap_or(0);
    let offset = if selected >= visible_height {
        selected.saturating_sub(visible_height.saturating_sub(1))
    } else {
        0
    };
    let index = offset + row_idx;
    (index < app.notes.len()).then_some(index)
}

fn handle_scroll(app: &mut App, areas: &UiAreas, col: u16, row: u16, up: bool) {
    if app.notes_open() {
        if rect_contains(areas.notes.panel, col, row) {
            if up {
                app.notes.move_selection_up();
            } else {
                app.notes.move_selection_down();
            }
        }
        return;
    }
    app.page.scroll_by(if up { -3 } else { 3 });
}

fn handle_copy_to_clipboard(app: &mut App) {
    use arboard::Clipboard;

    let Some(text) = app.notes.selected_note().map(|note| note.text.clone()) else {
        app.set_status("Select a note to copy", StatusLevel::Warn);
        return;
    };

    match Clipboard::new() {
        Ok(mut clipboard) => {
            if clipboard.set_text(&text).is_ok() {
                app.set_status(
                    format!(
                        "Copied: {}",
                        if text.chars().count() > 20 {
                            format!("{}...", text.chars().take(20).collect::<String>())
                        } else {
                            text
                        }
                    ),
                    StatusLevel::Info,
                );
            } else {
                app.set_status("Failed to copy to clipboard", StatusLevel::Error);
            }
        }
        Err(err) => {
            tracing::warn!("clipboard unavailable: {err}");
            app.set_status("Clipboard not available", StatusLevel::Error);
        }
    }
}
