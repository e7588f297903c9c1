//! Terminal User Interface (TUI) module
//!
//! Renders the list screen and turns key presses and mouse clicks into
//! list operations.

use std::io::{self, Stderr};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::{debug, info};

pub mod action;
pub mod app;
pub mod constants;
pub mod event_handler;
pub mod ui;

use crate::config::ScreenConfig;
use crate::errors::Result;
use app::App;
use ui::ui;

type TuiTerminal = Terminal<CrosstermBackend<Stderr>>;

/// Run the TUI application
pub fn run_tui(config: &ScreenConfig, seed: Option<u64>) -> Result<()> {
    let mut terminal = setup_terminal()?;

    let mut app = App::new(config, seed);
    info!(
        "List screen opened: title={:?}, rows={}",
        app.title,
        app.row_count()
    );
    let res = run_app(&mut terminal, &mut app);

    restore_terminal();
    terminal.show_cursor()?;

    res
}

fn setup_terminal() -> Result<TuiTerminal> {
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr);
    Ok(Terminal::new(backend)?)
}

/// Leave the alternate screen and raw mode
///
/// Errors are ignored; this also runs from the panic hook.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stderr = io::stderr();
    let _ = execute!(stderr, LeaveAlternateScreen, DisableMouseCapture);
}

/// Main application loop
fn run_app(terminal: &mut TuiTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        let event = event::read()?;
        let mut action = event_handler::handle_event(app, &event);

        // Action chain: apply until no follow-up action
        while !action.is_noop() {
            if action.should_quit() {
                info!("Leaving list screen");
                return Ok(());
            }
            debug!("Dispatching {:?}", action);
            action = app.update(action);
        }
    }
}
