//! Render snapshot
//!
//! Immutable description of the section/item layout handed to the renderer.

use super::diff::{Change, diff};

/// The only section the list screen uses
pub const MAIN_SECTION: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    section: u32,
    items: Vec<String>,
}

impl Snapshot {
    pub fn new(items: &[String]) -> Self {
        Self {
            section: MAIN_SECTION,
            items: items.to_vec(),
        }
    }

    pub fn section(&self) -> u32 {
        self.section
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_at(&self, row: usize) -> Option<&str> {
        self.items.get(row).map(String::as_str)
    }

    pub fn position_of(&self, item: &str) -> Option<usize> {
        self.items.iter().position(|i| i == item)
    }

    /// Changes needed to go from `self` to `next`
    pub fn diff_to(&self, next: &Snapshot) -> Vec<Change> {
        diff(&self.items, &next.items)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new(&[])
    }
}
