// UI submodules
mod common;
mod exiting;
mod help;
mod main_screen;
pub mod widgets;

pub use common::{draw_footer, draw_navigation_bar, draw_status_bar};
pub use exiting::draw_exiting_screen;
pub use help::draw_help_screen;
pub use main_screen::draw_main_screen;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navigation bar
            Constraint::Min(3),    // List
            Constraint::Length(3), // Status
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    draw_navigation_bar(frame, app, main_chunks[0]);

    // The list stays visible underneath the overlays
    draw_main_screen(frame, app, main_chunks[1]);
    match app.current_screen {
        CurrentScreen::Main => {}
        CurrentScreen::Help => draw_help_screen(frame, main_chunks[1], &app.shuffle_label),
        CurrentScreen::Exiting => draw_exiting_screen(frame, app, main_chunks[1]),
    }

    draw_status_bar(frame, app, main_chunks[2]);
    draw_footer(frame, app, main_chunks[3]);
}
