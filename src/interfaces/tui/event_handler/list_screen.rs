//! Event handler for the list screen

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::action::Action;

/// Handle main screen input
pub fn handle_main_screen(key_code: KeyCode) -> Action {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Action::MoveDown,
        KeyCode::Home | KeyCode::Char('g') => Action::JumpTop,
        KeyCode::End | KeyCode::Char('G') => Action::JumpBottom,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::Enter | KeyCode::Char(' ') => Action::TapCursor,
        KeyCode::Char('s') | KeyCode::Char('S') => Action::Shuffle,
        KeyCode::Char('c') | KeyCode::Char('C') => Action::ClearMessages,
        KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('H') => Action::ShowHelp,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::RequestExit,
        _ => Action::Noop,
    }
}
