//! Event handling for TUI
//!
//! Translates terminal events into actions, organized by screen:
//! - list_screen: Main
//! - overlay_screens: Help, Exiting
//! - mouse: clicks on rows and on the Shuffle button, wheel scrolling

use ratatui::crossterm::event::{Event, KeyEventKind};

use crate::interfaces::tui::action::Action;
use crate::interfaces::tui::app::{App, CurrentScreen};

mod list_screen;
mod mouse;
mod overlay_screens;

use list_screen::*;
use mouse::*;
use overlay_screens::*;

/// Map a terminal event to an action based on the current screen
pub fn handle_event(app: &App, event: &Event) -> Action {
    match event {
        // Windows reports both Press and Release
        Event::Key(key) if key.kind == KeyEventKind::Press => match app.current_screen {
            CurrentScreen::Main => handle_main_screen(key.code),
            CurrentScreen::Help => handle_help_screen(key.code),
            CurrentScreen::Exiting => handle_exiting_screen(key.code),
        },
        Event::Mouse(mouse) if app.current_screen == CurrentScreen::Main => {
            handle_mouse_event(app, mouse)
        }
        _ => Action::Noop,
    }
}
