//! Event handlers for overlay screens
//!
//! Handles: Help, Exiting

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::action::Action;

/// Handle help screen input
pub fn handle_help_screen(key_code: KeyCode) -> Action {
    match key_code {
        KeyCode::Esc
        | KeyCode::Enter
        | KeyCode::Char('q')
        | KeyCode::Char('Q')
        | KeyCode::Char('?')
        | KeyCode::Char('h')
        | KeyCode::Char('H') => Action::GoBack,
        _ => Action::Noop,
    }
}

/// Handle exiting confirmation screen input
pub fn handle_exiting_screen(key_code: KeyCode) -> Action {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => Action::ConfirmExit,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::GoBack,
        _ => Action::Noop,
    }
}
