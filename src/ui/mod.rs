use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod notes;
pub mod tabs;
pub mod widgets;

use crate::app::{App, InputMode, StatusLevel, Tab};

pub fn draw(f: &mut Frame, app: &mut App) {
    let areas = layout::areas(f.size(), app.notes_width, app.notes_toggle_label());

    draw_header(f, areas.header, areas.toggle_button, app);
    tabs::draw_tab_bar(f, areas.tab_bar, app);
    tabs::draw_tab_content(f, areas.body, app);
    if app.notes_open() {
        notes::draw_notes_panel(f, &areas.notes, &app.notes);
    }
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size, app);
    }
}

fn draw_header(f: &mut Frame, area: Rect, button: Rect, app: &App) {
    let lines = vec![
        Line::from(Span::styled(
            app.branding.title.clone(),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.branding.subtitle.clone(),
            Style::default().fg(Color::Gray),
        )),
    ];
    let header = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .alignment(Alignment::Left);
    f.render_widget(header, area);

    let button_style = if app.notes_open() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightYellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightBlue)
            .add_modifier(Modifier::BOLD)
    };
    let label = Paragraph::new(Span::styled(
        format!("[ {} ]", app.notes_toggle_label()),
        button_style,
    ));
    f.render_widget(label, button);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let scroll = if app.scroll_locked() {
        "locked".to_string()
    } else {
        format!("line {}", app.page.offset() + 1)
    };
    let spans = vec![
        Span::styled("Tab ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.current_tab.title())),
        Span::styled("Notes ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.notes.len())),
        Span::styled("Scroll ", Style::default().fg(Color::DarkGray)),
        Span::raw(scroll),
    ];

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}

/// Get command hint for autocompletion
fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let commands = [
        ("overview", "Show campaign overview"),
        ("audience", "Show target audience"),
        ("campaign", "Show campaign structure"),
        ("regions", "Show regional strategy"),
        ("timeline", "Show campaign timeline"),
        ("notes", "Open/close the notes panel"),
        ("note", "Add a note: note <text>"),
        ("help", "Toggle help"),
        ("quit", "Quit"),
    ];

    for (cmd, desc) in commands {
        if cmd.starts_with(&input) {
            return Some(desc);
        }
    }
    None
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint = command_hint(&app.command.input);
            let hint_text = hint.unwrap_or("tab name | notes | note <text> | quit");
            Line::from(vec![
                Span::styled(": ", Style::default().fg(Color::Yellow)),
                Span::raw(app.command.input.clone()),
                Span::styled(
                    format!("  {}", hint_text),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                let color = match level {
                    StatusLevel::Info => Color::LightGreen,
                    StatusLevel::Warn => Color::LightYellow,
                    StatusLevel::Error => Color::LightRed,
                };
                Line::from(vec![
                    Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(text.to_string(), Style::default().fg(color)),
                ])
            } else {
                action_hints(app)
            }
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn action_hints(app: &App) -> Line<'static> {
    let key = Style::default().fg(Color::Yellow);
    let text = Style::default().fg(Color::DarkGray);
    if app.notes_open() {
        return Line::from(vec![
            Span::styled("Enter", key),
            Span::styled(" add  ", text),
            Span::styled("↑/↓", key),
            Span::styled(" select  ", text),
            Span::styled("Del", key),
            Span::styled(" delete  ", text),
            Span::styled("Ctrl-y", key),
            Span::styled(" copy  ", text),
            Span::styled("Esc", key),
            Span::styled(" close", text),
        ]);
    }
    Line::from(vec![
        Span::styled("1-5", key),
        Span::styled(" tabs  ", text),
        Span::styled("n", key),
        Span::styled(" notes  ", text),
        Span::styled("j/k", key),
        Span::styled(" scroll  ", text),
        Span::styled(":", key),
        Span::styled(" command  ", text),
        Span::styled("?", key),
        Span::styled(" help  ", text),
        Span::styled("q", key),
        Span::styled(" quit", text),
    ])
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = layout::centered_rect(64, 70, area);
    f.render_widget(Clear, popup_area);

    let tab_keys = Tab::ALL
        .iter()
        .map(|tab| format!("{} {}", tab.shortcut(), tab.title()))
        .collect::<Vec<_>>()
        .join(", ");

    let lines = vec![
        Line::from("Dashboard"),
        Line::from("  1-5        Jump to tab"),
        Line::from(format!("             {tab_keys}")),
        Line::from("  [ / ]      Prev/Next tab (also ←/→)"),
        Line::from("  j / k      Scroll down/up"),
        Line::from("  PgDn/PgUp  Scroll a page"),
        Line::from("  g / G      Top / bottom"),
        Line::from("  Mouse      Click tabs, wheel to scroll"),
        Line::from(""),
        Line::from("Notes"),
        Line::from("  n          Open notes (Esc / Ctrl-n closes)"),
        Line::from("  Enter      Add note (same as [Add])"),
        Line::from("  ↑ / ↓      Select note"),
        Line::from("  Del/Ctrl-d Delete selected note"),
        Line::from("  Ctrl-y     Copy selected note"),
        Line::from("  Click ×    Delete that note"),
        Line::from("  Click out  Close the panel"),
        Line::from(""),
        Line::from("Other"),
        Line::from("  :          Command line (↑ recalls the last one)"),
        Line::from("  ?          Toggle help"),
        Line::from("  q          Quit"),
        Line::from(""),
        Line::from(format!("Active tab: {}", app.current_tab.title())),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, popup_area);
}
