//! Terminal UI for rewind.

mod app;
mod input;
mod ui;

pub use app::{App, Control, Focus};
pub use input::move_cursor;
pub use ui::draw;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use tracing::{error, info, instrument};

use crate::config::GameConfig;

/// Runs the interactive game until the user quits.
pub fn run_tui(config: &GameConfig) -> Result<()> {
    let size = config.tui_size()?;

    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(%size, "Starting rewind TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        restore_terminal(&mut stdout)?;
        return Err(e.into());
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            restore_terminal(&mut io::stdout())?;
            return Err(e.into());
        }
    };

    let mut app = App::new(size);
    let res = run_app(&mut terminal, &mut app);

    restore_terminal(terminal.backend_mut())?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Leaves raw mode, the alternate screen, and mouse capture.
fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, DisableMouseCapture)
}

/// Draw and dispatch input until the app asks to quit.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let mut cells = Vec::new();
        terminal.draw(|frame| cells = draw(frame, app))?;
        app.set_cell_areas(cells);

        match event::read()? {
            Event::Key(key) => {
                if app.handle_key(key) == Control::Quit {
                    info!(snapshots = app.game().len(), "Leaving TUI");
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }
}
