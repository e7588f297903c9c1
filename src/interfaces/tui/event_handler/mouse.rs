//! Mouse handling for the list screen
//!
//! Hit testing uses the areas recorded by the last render.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::interfaces::tui::action::Action;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::WHEEL_SCROLL_STEP;

pub fn handle_mouse_event(app: &App, mouse: &MouseEvent) -> Action {
    let position = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.layout.shuffle_button.contains(position) {
                return Action::Shuffle;
            }
            let rows = app.layout.list_rows;
            if rows.contains(position) {
                let row = app.scroll_offset + usize::from(mouse.row - rows.y);
                return Action::TapRow(row);
            }
            Action::Noop
        }
        MouseEventKind::ScrollDown => Action::Scroll(WHEEL_SCROLL_STEP),
        MouseEventKind::ScrollUp => Action::Scroll(-WHEEL_SCROLL_STEP),
        _ => Action::Noop,
    }
}
