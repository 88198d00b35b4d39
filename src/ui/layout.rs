use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    pub toggle_button: Rect,
    pub tab_bar: Rect,
    pub body: Rect,
    pub notes: NotesAreas,
    pub status_line: Rect,
    pub command_line: Rect,
}

/// Hit areas of the notes panel, shared by drawing and mouse handling.
#[derive(Debug, Clone, Copy)]
pub struct NotesAreas {
    pub panel: Rect,
    pub close_button: Rect,
    pub summary: Rect,
    pub list: Rect,
    pub input: Rect,
    pub add_button: Rect,
}

pub const ADD_LABEL: &str = "[Add]";
pub const CLOSE_LABEL: &str = "[x]";

pub fn areas(size: Rect, notes_width: u16, toggle_label: &str) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(size);

    let footer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(vertical[3]);

    let header = vertical[0];
    let button_width = (toggle_label.chars().count() as u16).saturating_add(4);
    let toggle_button = Rect {
        x: header
            .right()
            .saturating_sub(button_width.saturating_add(2))
            .max(header.x),
        y: header.y.saturating_add(1),
        width: button_width.min(header.width),
        height: 1.min(header.height),
    };

    UiAreas {
        size,
        header,
        toggle_button,
        tab_bar: vertical[1],
        body: vertical[2],
        notes: notes_areas(vertical[2], notes_width),
        status_line: footer_chunks[0],
        command_line: footer_chunks[1],
    }
}

/// The panel slides in over the right side of the body.
pub fn notes_areas(body: Rect, notes_width: u16) -> NotesAreas {
    let notes_width = notes_width.min(100);
    let panel = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(100 - notes_width),
            Constraint::Percentage(notes_width),
        ])
        .split(body)[1];

    let close_width = CLOSE_LABEL.len() as u16;
    let close_button = Rect {
        x: panel
            .right()
            .saturating_sub(close_width + 2)
            .max(panel.x),
        y: panel.y,
        width: close_width.min(panel.width),
        height: 1.min(panel.height),
    };

    let inner = rect_inner(panel);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(inner);

    let input = chunks[2];
    let add_width = ADD_LABEL.len() as u16;
    let add_button = Rect {
        x: input
            .right()
            .saturating_sub(add_width + 1)
            .max(input.x),
        y: input.y.saturating_add(1),
        width: add_width.min(input.width),
        height: 1.min(input.height),
    };

    NotesAreas {
        panel,
        close_button,
        summary: chunks[0],
        list: chunks[1],
        input,
        add_button,
    }
}

pub fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

pub fn rect_inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
