//! Notes panel overlay

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use super::layout::{NotesAreas, ADD_LABEL, CLOSE_LABEL};
use crate::modules::notes::NotesPanel;

pub const DELETE_MARKER: &str = "×";
const PLACEHOLDER: &str = "Add a note...";

pub fn draw_notes_panel(f: &mut Frame, areas: &NotesAreas, notes: &NotesPanel) {
    f.render_widget(Clear, areas.panel);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            " Notes ",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(block, areas.panel);
    f.render_widget(
        Paragraph::new(Span::styled(CLOSE_LABEL, Style::default().fg(Color::LightRed))),
        areas.close_button,
    );

    let summary = match notes.len() {
        0 => "no notes".to_string(),
        1 => "1 note".to_string(),
        n => format!("{n} notes"),
    };
    f.render_widget(
        Paragraph::new(Span::styled(summary, Style::default().fg(Color::DarkGray))),
        areas.summary,
    );

    if notes.is_empty() {
        let hint = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Nothing jotted yet.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Type below, Enter to add.",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        f.render_widget(Paragraph::new(hint), areas.list);
    } else {
        let items: Vec<ListItem> = notes
            .notes()
            .iter()
            .map(|note| {
                ListItem::new(Line::from(vec![
                    Span::styled(DELETE_MARKER, Style::default().fg(Color::LightRed)),
                    Span::raw(" "),
                    Span::raw(note.text.clone()),
                ]))
            })
            .collect();
        let list = List::new(items).highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        let mut state = ListState::default();
        state.select(notes.selected());
        f.render_stateful_widget(list, areas.list, &mut state);
    }

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let input_inner = input_block.inner(areas.input);
    f.render_widget(input_block, areas.input);

    let text_width = areas.add_button.x.saturating_sub(input_inner.x + 1);
    let text_area = ratatui::layout::Rect {
        width: text_width.min(input_inner.width),
        ..input_inner
    };
    let input_line = if notes.input().is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(tail(notes.input(), text_area.width.saturating_sub(1) as usize))
    };
    f.render_widget(Paragraph::new(input_line), text_area);
    f.render_widget(
        Paragraph::new(Span::styled(
            ADD_LABEL,
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )),
        areas.add_button,
    );

    let cursor_offset = notes
        .input()
        .chars()
        .count()
        .min(text_area.width.saturating_sub(1) as usize) as u16;
    f.set_cursor(text_area.x + cursor_offset, text_area.y);
}

/// Keep the end of the input visible as it grows past the box.
fn tail(text: &str, max: usize) -> String {
    let count = text.chars().count();
    if count <= max {
        return text.to_string();
    }
    text.chars().skip(count - max).collect()
}
