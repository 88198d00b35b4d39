//! Render the dashboard into a test backend and inspect the screen

use ratatui::backend::TestBackend;
use ratatui::Terminal;

use recruit_deck::content;
use recruit_deck::ui::{self, layout};
use recruit_deck::{App, Tab};

const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

fn render(app: &mut App) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    (0..HEIGHT)
        .map(|y| {
            (0..WIDTH)
                .map(|x| buffer.get(x, y).symbol().to_string())
                .collect()
        })
        .collect()
}

fn body_text(app: &mut App) -> String {
    let screen = render(app);
    let areas = layout::areas(
        ratatui::layout::Rect::new(0, 0, WIDTH, HEIGHT),
        app.notes_width,
        app.notes_toggle_label(),
    );
    screen[areas.body.y as usize..areas.body.bottom() as usize].join("\n")
}

#[test]
fn test_each_tab_shows_only_its_block() {
    for tab in Tab::ALL {
        let mut app = App::new();
        app.select_tab(tab);
        let body = body_text(&mut app);

        let own = content::for_tab(tab);
        assert!(body.contains(own.title), "{:?} missing its title", tab);
        let first_heading = &own.sections[0].heading;
        assert!(body.contains(first_heading.as_str()), "{:?} missing {first_heading}", tab);

        for other in Tab::ALL.into_iter().filter(|t| *t != tab) {
            let other_title = content::for_tab(other).title;
            assert!(
                !body.contains(other_title),
                "{:?} shows {other_title}",
                tab
            );
        }
    }
}

#[test]
fn test_selecting_same_tab_twice_is_idempotent() {
    let mut app = App::new();
    app.select_tab(Tab::Regions);
    let first = render(&mut app);
    app.select_tab(Tab::Regions);
    let second = render(&mut app);
    assert_eq!(first, second);
    assert_eq!(app.current_tab, Tab::Regions);
}

#[test]
fn test_regions_list_every_country() {
    let mut app = App::new();
    app.select_tab(Tab::Regions);
    let body = body_text(&mut app);
    for region in content::REGIONS {
        for country in region.countries {
            assert!(body.contains(country), "missing {country}");
        }
        assert!(body.contains(region.focus));
    }
}

#[test]
fn test_timeline_shows_phase_bar() {
    let mut app = App::new();
    app.select_tab(Tab::Timeline);
    let body = body_text(&mut app);
    assert!(body.contains("15-day test phase"));
    assert!(body.contains("Day 8"));
    assert!(body.contains('█'));
}

#[test]
fn test_header_and_toggle_label() {
    let mut app = App::new();
    let screen = render(&mut app).join("\n");
    assert!(screen.contains("International Student Recruitment Strategy"));
    assert!(screen.contains("University of Bolton"));
    assert!(screen.contains("[ Open Notes ]"));
    assert!(!screen.contains("Add a note..."));

    app.open_notes();
    let screen = render(&mut app).join("\n");
    assert!(screen.contains("[ Close Notes ]"));
    assert!(screen.contains("Add a note..."));
    assert!(screen.contains("[Add]"));
    assert!(screen.contains("[x]"));
}

#[test]
fn test_notes_rows_in_insertion_order() {
    let mut app = App::new();
    app.open_notes();
    app.notes.add_note("Check India CPM");
    app.notes.add_note("Review budget");
    let screen = render(&mut app);

    let first = screen.iter().position(|row| row.contains("× Check India CPM"));
    let second = screen.iter().position(|row| row.contains("× Review budget"));
    assert!(first.is_some() && second.is_some());
    assert!(first < second);
    assert!(screen.iter().any(|row| row.contains("2 notes")));
}

#[test]
fn test_status_line_reports_lock() {
    let mut app = App::new();
    let screen = render(&mut app);
    assert!(screen.iter().any(|row| row.contains("Scroll line 1")));

    app.open_notes();
    let screen = render(&mut app);
    assert!(screen.iter().any(|row| row.contains("Scroll locked")));

    app.close_notes();
    let screen = render(&mut app);
    assert!(screen.iter().any(|row| row.contains("Scroll line 1")));
}
