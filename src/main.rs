use std::io::{self, Stdout, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use recruit_deck::{config, input, logging, ui, App};

#[derive(Debug, Parser)]
#[command(
    name = "recruit-deck",
    version,
    about = "International student recruitment strategy dashboard with a scratch notes panel"
)]
struct Args {
    /// Config file (default: $XDG_CONFIG_HOME/recruit-deck/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable mouse capture
    #[arg(long)]
    no_mouse: bool,

    /// Log file (default: $XDG_DATA_HOME/recruit-deck/recruit-deck.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(log_path) = args.log_file.clone().or_else(config::log_path) {
        logging::init(&log_path);
    }

    let config = match args.config.as_deref() {
        Some(path) => config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => config::load(),
    };
    let mouse = config.mouse && !args.no_mouse;
    let tick_rate = Duration::from_millis(config.tick_rate_ms.max(10));
    tracing::info!(mouse, tick_ms = tick_rate.as_millis() as u64, "starting");

    let mut terminal = setup_terminal(mouse)?;

    let app = App::with_config(&config);
    let res = run_app(&mut terminal, app, tick_rate);

    restore_terminal(terminal.backend_mut(), mouse)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("{err:?}");
        eprintln!("{err:?}");
    }
    tracing::info!("exited");

    Ok(())
}

/// Enter raw mode and the alternate screen. Anything already switched on is
/// undone again if a later step fails.
fn setup_terminal(mouse: bool) -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let terminal = enter_terminal(&mut stdout, mouse)
        .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)));
    match terminal {
        Ok(terminal) => Ok(terminal),
        Err(err) => {
            if let Err(restore_err) = restore_terminal(&mut io::stdout(), mouse) {
                tracing::warn!("failed to restore terminal: {restore_err}");
            }
            Err(err).context("setting up terminal")
        }
    }
}

fn enter_terminal<W: Write>(out: &mut W, mouse: bool) -> io::Result<()> {
    execute!(out, EnterAlternateScreen)?;
    if mouse {
        execute!(out, EnableMouseCapture)?;
    }
    Ok(())
}

fn restore_terminal<W: Write>(out: &mut W, mouse: bool) -> io::Result<()> {
    disable_raw_mode()?;
    if mouse {
        execute!(out, DisableMouseCapture)?;
    }
    execute!(out, LeaveAlternateScreen)?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(&mut app, key),
                Event::Mouse(mouse) => {
                    if let Some(size) = terminal_rect() {
                        input::handle_mouse(&mut app, mouse, size);
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn terminal_rect() -> Option<Rect> {
    let (width, height) = crossterm::terminal::size().ok()?;
    Some(Rect {
        x: 0,
        y: 0,
        width,
        height,
    })
}
