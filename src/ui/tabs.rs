//! Tab bar and per-tab content rendering

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs as RataTabs};
use ratatui::Frame;

use super::widgets::PhaseBar;
use crate::app::{App, Tab};
use crate::content::{self, Body, TabContent, CAMPAIGN_DAYS, PHASE_ONE_DAYS};

const DIVIDER: &str = " │ ";

fn tab_label(tab: Tab) -> String {
    format!("{}:{}", tab.shortcut(), tab.title())
}

/// Draw the tab bar below the header
pub fn draw_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| {
            Line::from(vec![
                Span::styled(
                    format!("{}:", tab.shortcut()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(tab.title()),
            ])
        })
        .collect();

    let selected = Tab::ALL
        .iter()
        .position(|t| *t == app.current_tab)
        .unwrap_or(0);

    let tabs = RataTabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(DIVIDER);

    f.render_widget(tabs, area);
}

/// Which tab sits under `col` in a tab bar drawn at `area`.
///
/// Mirrors the tab widget's layout: one cell of padding on each side of a
/// title, then the divider.
pub fn tab_at(area: Rect, col: u16) -> Option<Tab> {
    let mut x = area.x;
    for tab in Tab::ALL {
        let width = tab_label(tab).chars().count() as u16 + 2;
        if col >= x && col < x.saturating_add(width) {
            return Some(tab);
        }
        x = x.saturating_add(width + DIVIDER.chars().count() as u16);
        if x >= area.right() {
            break;
        }
    }
    None
}

/// Draw the active tab's content block and record its scroll bounds.
pub fn draw_tab_content(f: &mut Frame, area: Rect, app: &mut App) {
    let tab_content = content::for_tab(app.current_tab);

    let content_area = if app.current_tab == Tab::Timeline {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(area);
        draw_phase_bar(f, chunks[0]);
        chunks[1]
    } else {
        area
    };

    let lines = content_lines(&tab_content);
    let viewport = content_area.height.saturating_sub(2);
    app.page
        .set_bounds(lines.len().min(u16::MAX as usize) as u16, viewport);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {} ", tab_content.title),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((app.page.offset(), 0));
    f.render_widget(paragraph, content_area);
}

fn draw_phase_bar(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {CAMPAIGN_DAYS}-day test phase "));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        PhaseBar::new(CAMPAIGN_DAYS, PHASE_ONE_DAYS).phase_styles(
            Style::default().fg(Color::Cyan),
            Style::default().fg(Color::LightGreen),
        ),
        inner,
    );
}

pub fn content_lines(tab_content: &TabContent) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for section in &tab_content.sections {
        let heading_style = if section.accent {
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(Span::styled(
            format!(" {}", section.heading),
            heading_style,
        )));
        for body in &section.body {
            match body {
                Body::Bullets(items) => {
                    for item in items {
                        lines.push(Line::from(vec![
                            Span::styled("   • ", Style::default().fg(Color::DarkGray)),
                            Span::raw(item.clone()),
                        ]));
                    }
                }
                Body::Paragraph(text) => {
                    lines.push(Line::from(Span::styled(
                        format!("   {}", text),
                        Style::default().fg(Color::Gray),
                    )));
                }
            }
        }
        if !section.body.is_empty() {
            lines.push(Line::from(""));
        }
    }
    lines
}
