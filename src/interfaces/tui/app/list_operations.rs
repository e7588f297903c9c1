//! List operations and action dispatch

use tracing::{debug, info};

use super::state::{App, CurrentScreen};
use crate::interfaces::tui::action::Action;
use crate::list::{Change, DiffSummary, TapOutcome};

impl App {
    /// Apply one action, returning the follow-up action (or `Noop`)
    pub fn update(&mut self, action: Action) -> Action {
        match action {
            Action::MoveUp => self.move_cursor_up(),
            Action::MoveDown => self.move_cursor_down(),
            Action::PageUp => self.page_up(),
            Action::PageDown => self.page_down(),
            Action::JumpTop => self.jump_to_top(),
            Action::JumpBottom => self.jump_to_bottom(),
            Action::Scroll(delta) => self.scroll_by(delta),
            Action::TapCursor => return self.tap_row(self.cursor),
            Action::TapRow(row) => {
                if row < self.row_count() {
                    self.cursor = row;
                    self.adjust_scroll_offset();
                }
                return self.tap_row(row);
            }
            Action::Shuffle => return self.shuffle(),
            Action::ShowStatus(message) => self.set_status(message),
            Action::ClearMessages => self.clear_messages(),
            Action::ShowHelp => self.current_screen = CurrentScreen::Help,
            Action::GoBack => self.current_screen = CurrentScreen::Main,
            Action::RequestExit => self.current_screen = CurrentScreen::Exiting,
            Action::ConfirmExit => {
                info!("Exit confirmed");
                return Action::Quit;
            }
            Action::Quit | Action::Noop => {}
        }
        Action::Noop
    }

    /// Toggle the selection of `row`; selecting moves the item to the front
    pub fn tap_row(&mut self, row: usize) -> Action {
        match self.list.tap(row) {
            TapOutcome::Selected { item, changes } => {
                self.mark_changed(&changes);
                self.recently_changed.insert(item.clone());
                Action::ShowStatus(format!(
                    "Selected {} · {}",
                    item,
                    DiffSummary::of(&changes)
                ))
            }
            TapOutcome::Deselected { item } => {
                self.recently_changed.clear();
                self.recently_changed.insert(item.clone());
                Action::ShowStatus(format!("Deselected {}", item))
            }
            TapOutcome::Ignored => {
                debug!("Tap on row {} ignored", row);
                Action::Noop
            }
        }
    }

    pub fn shuffle(&mut self) -> Action {
        let changes = self.list.shuffle();
        self.mark_changed(&changes);
        Action::ShowStatus(format!("Shuffled · {}", DiffSummary::of(&changes)))
    }

    fn mark_changed(&mut self, changes: &[Change]) {
        self.recently_changed = changes
            .iter()
            .filter(|c| !matches!(c, Change::Delete { .. }))
            .map(|c| c.item().to_string())
            .collect();
    }
}
