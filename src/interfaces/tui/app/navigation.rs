//! Navigation and scrolling logic

use super::state::App;
use crate::interfaces::tui::constants::PAGE_SCROLL_STEP;

impl App {
    pub fn move_cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        self.adjust_scroll_offset();
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor < self.row_count().saturating_sub(1) {
            self.cursor += 1;
        }
        self.adjust_scroll_offset();
    }

    pub fn jump_to_top(&mut self) {
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.cursor = self.row_count().saturating_sub(1);
        self.adjust_scroll_offset();
    }

    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(PAGE_SCROLL_STEP);
        self.adjust_scroll_offset();
    }

    pub fn page_down(&mut self) {
        let max_index = self.row_count().saturating_sub(1);
        self.cursor = (self.cursor + PAGE_SCROLL_STEP).min(max_index);
        self.adjust_scroll_offset();
    }

    /// Scroll the viewport (mouse wheel), dragging the cursor along if it
    /// would leave the visible window
    pub fn scroll_by(&mut self, delta: isize) {
        let vh = self.last_visible_height.max(1);
        let max_offset = self.row_count().saturating_sub(vh);
        self.scroll_offset = self
            .scroll_offset
            .saturating_add_signed(delta)
            .min(max_offset);

        if self.cursor < self.scroll_offset {
            self.cursor = self.scroll_offset;
        } else if self.cursor >= self.scroll_offset + vh {
            self.cursor = self.scroll_offset + vh - 1;
        }
    }

    /// Keep the cursor inside the visible window
    pub fn adjust_scroll_offset(&mut self) {
        let vh = self.last_visible_height.max(1);
        // cursor above the window: scroll up
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        }
        // cursor below the window: scroll down
        if self.cursor >= self.scroll_offset + vh {
            self.scroll_offset = self.cursor - vh + 1;
        }
    }
}
