//! Drive the dashboard through key and mouse events, without a terminal

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use recruit_deck::input::{handle_key, handle_mouse};
use recruit_deck::ui::{self, layout};
use recruit_deck::{App, Tab};

const SIZE: Rect = Rect {
    x: 0,
    y: 0,
    width: 100,
    height: 20,
};

fn key(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn ctrl(app: &mut App, ch: char) {
    handle_key(app, KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        key(app, KeyCode::Char(ch));
    }
}

fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
    handle_mouse(
        app,
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        },
        SIZE,
    );
}

fn click(app: &mut App, column: u16, row: u16) {
    mouse(app, MouseEventKind::Down(MouseButton::Left), column, row);
}

fn ui_areas(app: &App) -> layout::UiAreas {
    layout::areas(SIZE, app.notes_width, app.notes_toggle_label())
}

/// Draw once so the page knows its scroll bounds, returning the screen rows.
fn draw(app: &mut App) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(SIZE.width, SIZE.height)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    (0..SIZE.height)
        .map(|y| {
            (0..SIZE.width)
                .map(|x| buffer.get(x, y).symbol().to_string())
                .collect()
        })
        .collect()
}

fn note_texts(app: &App) -> Vec<String> {
    app.notes.notes().iter().map(|n| n.text.clone()).collect()
}

#[test]
fn test_notes_added_in_order_from_keyboard() {
    let mut app = App::new();
    key(&mut app, KeyCode::Char('n'));
    assert!(app.notes_open());

    type_text(&mut app, "Check India CPM");
    key(&mut app, KeyCode::Enter);
    type_text(&mut app, "Review budget");
    key(&mut app, KeyCode::Enter);

    assert_eq!(note_texts(&app), vec!["Check India CPM", "Review budget"]);
    assert_eq!(app.notes.input(), "");
}

#[test]
fn test_blank_input_adds_nothing() {
    let mut app = App::new();
    key(&mut app, KeyCode::Char('n'));

    key(&mut app, KeyCode::Enter);
    type_text(&mut app, " ");
    key(&mut app, KeyCode::Enter);
    assert!(app.notes.is_empty());

    app.notes.set_input("\n");
    ctrl(&mut app, 'a');
    assert!(app.notes.is_empty());
}

#[test]
fn test_enter_and_add_button_agree() {
    let mut by_enter = App::new();
    key(&mut by_enter, KeyCode::Char('n'));
    type_text(&mut by_enter, "Review budget");
    key(&mut by_enter, KeyCode::Enter);

    let mut by_click = App::new();
    key(&mut by_click, KeyCode::Char('n'));
    type_text(&mut by_click, "Review budget");
    let add = ui_areas(&by_click).notes.add_button;
    click(&mut by_click, add.x, add.y);

    assert_eq!(note_texts(&by_enter), note_texts(&by_click));
    assert_eq!(by_enter.notes.input(), by_click.notes.input());
    assert!(by_click.notes_open());
}

#[test]
fn test_delete_selected_keeps_order() {
    let mut app = App::new();
    key(&mut app, KeyCode::Char('n'));
    for text in ["A", "B", "C"] {
        type_text(&mut app, text);
        key(&mut app, KeyCode::Enter);
    }

    // The newest note is selected after each add
    assert_eq!(app.notes.selected(), Some(2));
    key(&mut app, KeyCode::Up);
    key(&mut app, KeyCode::Delete);
    assert_eq!(note_texts(&app), vec!["A", "C"]);

    ctrl(&mut app, 'd');
    assert_eq!(note_texts(&app), vec!["A"]);
}

#[test]
fn test_click_marker_deletes_row() {
    let mut app = App::new();
    key(&mut app, KeyCode::Char('n'));
    for text in ["A", "B", "C"] {
        type_text(&mut app, text);
        key(&mut app, KeyCode::Enter);
    }

    let list = ui_areas(&app).notes.list;
    // Clicking the text selects, clicking the marker deletes
    click(&mut app, list.x + 4, list.y + 1);
    assert_eq!(app.notes.selected(), Some(1));
    click(&mut app, list.x, list.y + 1);
    assert_eq!(note_texts(&app), vec!["A", "C"]);

    // Below the last row nothing happens
    click(&mut app, list.x, list.y + 5);
    assert_eq!(note_texts(&app), vec!["A", "C"]);
}

#[test]
fn test_newest_note_visible_when_list_overflows() {
    let mut app = App::new();
    key(&mut app, KeyCode::Char('n'));
    let list = ui_areas(&app).notes.list;
    let count = list.height as usize + 3;
    for i in 0..count {
        type_text(&mut app, &format!("note{i:02}"));
        key(&mut app, KeyCode::Enter);
    }
    assert_eq!(app.notes.len(), count);

    let newest = format!("note{:02}", count - 1);
    let screen = draw(&mut app);
    let row = screen
        .iter()
        .position(|line| line.contains(&format!("× {newest}")))
        .expect("newest note rendered");
    assert_eq!(row as u16, list.bottom() - 1);
    assert!(!screen.iter().any(|line| line.contains("note00")));

    // Hit-testing follows the scrolled list
    click(&mut app, list.x, list.bottom() - 1);
    assert_eq!(app.notes.len(), count - 1);
    assert!(!note_texts(&app).contains(&newest));
}

#[test]
fn test_panel_close_paths_release_scroll_lock() {
    let mut app = App::new();
    assert!(!app.scroll_locked());

    key(&mut app, KeyCode::Char('n'));
    assert!(app.scroll_locked());
    key(&mut app, KeyCode::Esc);
    assert!(!app.notes_open());
    assert!(!app.scroll_locked());

    key(&mut app, KeyCode::Char('n'));
    ctrl(&mut app, 'n');
    assert!(!app.scroll_locked());

    let toggle = ui_areas(&app).toggle_button;
    click(&mut app, toggle.x, toggle.y);
    assert!(app.notes_open());
    let close = ui_areas(&app).notes.close_button;
    click(&mut app, close.x, close.y);
    assert!(!app.notes_open());
    assert!(!app.scroll_locked());

    key(&mut app, KeyCode::Char('n'));
    click(&mut app, 0, 10);
    assert!(!app.notes_open());
    assert!(!app.scroll_locked());
}

#[test]
fn test_notes_survive_close_and_reopen() {
    let mut app = App::new();
    key(&mut app, KeyCode::Char('n'));
    type_text(&mut app, "Keep me");
    key(&mut app, KeyCode::Enter);
    key(&mut app, KeyCode::Esc);
    key(&mut app, KeyCode::Char('n'));
    assert_eq!(note_texts(&app), vec!["Keep me"]);
}

#[test]
fn test_page_scroll_suspended_while_notes_open() {
    let mut app = App::new();
    key(&mut app, KeyCode::Char('4'));
    assert_eq!(app.current_tab, Tab::Regions);
    draw(&mut app);

    key(&mut app, KeyCode::Char('j'));
    assert_eq!(app.page.offset(), 1);

    key(&mut app, KeyCode::Char('n'));
    key(&mut app, KeyCode::Char('j'));
    mouse(&mut app, MouseEventKind::ScrollDown, 0, 10);
    assert_eq!(app.page.offset(), 1);
    assert_eq!(app.notes.input(), "j");

    key(&mut app, KeyCode::Esc);
    mouse(&mut app, MouseEventKind::ScrollDown, 0, 10);
    assert_eq!(app.page.offset(), 4);
}

#[test]
fn test_tab_selection() {
    let mut app = App::new();
    key(&mut app, KeyCode::Char('3'));
    assert_eq!(app.current_tab, Tab::Campaign);
    key(&mut app, KeyCode::Char('3'));
    assert_eq!(app.current_tab, Tab::Campaign);

    key(&mut app, KeyCode::Char(']'));
    assert_eq!(app.current_tab, Tab::Regions);
    key(&mut app, KeyCode::Left);
    assert_eq!(app.current_tab, Tab::Campaign);

    let bar = ui_areas(&app).tab_bar;
    click(&mut app, bar.x + 1, bar.y);
    assert_eq!(app.current_tab, Tab::Overview);
}

#[test]
fn test_tab_change_resets_scroll() {
    let mut app = App::new();
    key(&mut app, KeyCode::Char('4'));
    draw(&mut app);
    key(&mut app, KeyCode::Char('G'));
    assert!(app.page.offset() > 0);

    key(&mut app, KeyCode::Char('4'));
    assert!(app.page.offset() > 0);
    key(&mut app, KeyCode::Char('5'));
    assert_eq!(app.page.offset(), 0);
}

#[test]
fn test_command_line() {
    let mut app = App::new();
    key(&mut app, KeyCode::Char(':'));
    type_text(&mut app, "timeline");
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.current_tab, Tab::Timeline);

    key(&mut app, KeyCode::Char(':'));
    type_text(&mut app, "note Check India CPM");
    key(&mut app, KeyCode::Enter);
    assert_eq!(note_texts(&app), vec!["Check India CPM"]);
    assert!(!app.notes_open());

    key(&mut app, KeyCode::Char('1'));
    key(&mut app, KeyCode::Char(':'));
    key(&mut app, KeyCode::Up);
    key(&mut app, KeyCode::Enter);
    assert_eq!(note_texts(&app), vec!["Check India CPM", "Check India CPM"]);

    key(&mut app, KeyCode::Char(':'));
    key(&mut app, KeyCode::Up);
    assert_eq!(app.command.input, "note Check India CPM");
    key(&mut app, KeyCode::Esc);

    key(&mut app, KeyCode::Char(':'));
    type_text(&mut app, "quit");
    key(&mut app, KeyCode::Esc);
    assert!(!app.should_quit);

    key(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_help_swallows_keys() {
    let mut app = App::new();
    key(&mut app, KeyCode::Char('?'));
    assert!(app.help_open);
    key(&mut app, KeyCode::Char('n'));
    assert!(!app.notes_open());
    key(&mut app, KeyCode::Esc);
    assert!(!app.help_open);
}
