//! build_tui - Interactive TUI for assembling character builds

mod app;
mod theme;
mod ui;

use app::App;
use build_core::{default_dataset, BuildConstants, CharacterBuild};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use theme::{FileThemeStore, MemoryThemeStore, ThemeStore};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<(), Box<dyn Error>> {
    let _guard = setup_logging();

    // Optional constants file: build_tui [constants.toml]
    let constants = match std::env::args().nth(1) {
        Some(path) => BuildConstants::load(Path::new(&path))?,
        None => BuildConstants::default(),
    };
    tracing::info!(
        level_cap = constants.level_cap,
        points_per_level = constants.points_per_level,
        "starting build calculator"
    );

    let build = CharacterBuild::new(Arc::new(default_dataset()), constants);
    let theme_store: Box<dyn ThemeStore> = match FileThemeStore::default_location() {
        Some(store) => {
            tracing::info!(path = %store.path().display(), "theme preferences");
            Box::new(store)
        }
        None => Box::new(MemoryThemeStore::default()),
    };
    let mut app = App::new(build, theme_store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result.map_err(Into::into)
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
            (KeyCode::Tab, _) => app.next_tab(),
            (KeyCode::BackTab, _) => app.prev_tab(),
            (KeyCode::Char(c), _) if c.is_ascii_digit() => app.on_digit(c),
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
            (KeyCode::Left, _) | (KeyCode::Char('h'), _) | (KeyCode::Char('-'), _) => {
                app.on_left()
            }
            (KeyCode::Right, _) | (KeyCode::Char('l'), _) | (KeyCode::Char('+'), _) => {
                app.on_right()
            }
            (KeyCode::Enter, _) => app.on_enter(),
            (KeyCode::Backspace, _) => app.on_backspace(),
            (KeyCode::Esc, _) => app.on_escape(),
            (KeyCode::Char('u'), _) => app.clear_current(),
            (KeyCode::Char('t'), _) => app.toggle_theme(),
            (KeyCode::Char('x'), _) => app.export_summary(),
            (KeyCode::Char('r'), _) => app.reset(),
            (KeyCode::Char('?'), _) => app.toggle_help(),
            _ => {}
        }
    }
    Ok(())
}

/// Log to a file in the platform data dir; the terminal belongs to the UI
fn setup_logging() -> Option<WorkerGuard> {
    let log_dir = log_directory()?;
    if let Err(err) = std::fs::create_dir_all(&log_dir) {
        eprintln!("logging disabled: cannot create {}: {}", log_dir.display(), err);
        return None;
    }

    let file_appender = tracing_appender::rolling::never(&log_dir, "build_tui.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Log file: {}/build_tui.log", log_dir.display());
    Some(guard)
}

fn log_directory() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("arcane_build").join("logs"))
}
