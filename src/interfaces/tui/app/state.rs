//! App state definition and basic state management

use std::collections::HashSet;

use ratatui::layout::Rect;

use crate::config::ScreenConfig;
use crate::list::{ListScreen, number_dataset};

/// Screen currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Main,
    Help,
    Exiting,
}

/// Areas recorded during the last render, used for mouse hit testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Rows of the list, without borders
    pub list_rows: Rect,
    pub shuffle_button: Rect,
}

pub struct App {
    pub list: ListScreen,
    pub current_screen: CurrentScreen,

    // Navigation bar
    pub title: String,
    pub shuffle_label: String,

    // UI state
    pub cursor: usize,
    pub scroll_offset: usize,
    pub last_visible_height: usize,
    pub layout: ScreenLayout,
    pub status_message: String,

    /// Items touched by the last applied diff
    pub recently_changed: HashSet<String>,
}

impl App {
    pub fn new(config: &ScreenConfig, seed: Option<u64>) -> App {
        let list = ListScreen::with_dataset(number_dataset(config.max_value), seed);
        Self::with_list(list, config)
    }

    pub fn with_list(list: ListScreen, config: &ScreenConfig) -> App {
        App {
            list,
            current_screen: CurrentScreen::Main,
            title: config.title.clone(),
            shuffle_label: config.shuffle_label.clone(),
            cursor: 0,
            scroll_offset: 0,
            last_visible_height: 1,
            layout: ScreenLayout::default(),
            status_message: String::new(),
            recently_changed: HashSet::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.list.row_count()
    }

    pub fn is_recently_changed(&self, item: &str) -> bool {
        self.recently_changed.contains(item)
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = message;
    }

    pub fn clear_messages(&mut self) {
        self.status_message.clear();
        self.recently_changed.clear();
    }
}
