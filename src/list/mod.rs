//! List screen controller
//!
//! Owns the ordered item list, the selection (in selection order) and the
//! render snapshot. Every mutation rebuilds the snapshot and reports the
//! diff against the previous one so the presentation layer can apply it.
//!
//! Items are identified by value. The built-in dataset has no duplicates;
//! a dataset with duplicate values would make taps and diffs ambiguous.

mod dataset;
pub mod diff;
mod snapshot;

pub use dataset::{DEFAULT_MAX_VALUE, number_dataset};
pub use diff::{Change, DiffSummary};
pub use snapshot::{MAIN_SECTION, Snapshot};

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use tracing::debug;

/// Result of tapping a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapOutcome {
    /// Item became selected and moved to the front
    Selected { item: String, changes: Vec<Change> },
    /// Item was deselected; order is unchanged
    Deselected { item: String },
    /// Row did not resolve to a live item
    Ignored,
}

impl TapOutcome {
    pub fn item(&self) -> Option<&str> {
        match self {
            TapOutcome::Selected { item, .. } | TapOutcome::Deselected { item } => Some(item),
            TapOutcome::Ignored => None,
        }
    }

    pub fn changes(&self) -> &[Change] {
        match self {
            TapOutcome::Selected { changes, .. } => changes,
            _ => &[],
        }
    }
}

pub struct ListScreen {
    items: Vec<String>,
    selected: Vec<String>,
    snapshot: Snapshot,
    rng: StdRng,
}

impl ListScreen {
    /// Screen over the built-in `0..=30` dataset
    pub fn new() -> Self {
        Self::with_dataset(number_dataset(DEFAULT_MAX_VALUE), None)
    }

    /// Screen over `items`; `seed` makes shuffles reproducible
    pub fn with_dataset(items: Vec<String>, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        let snapshot = Snapshot::new(&items);
        debug!("List screen initialized with {} items", items.len());

        Self {
            items,
            selected: Vec::new(),
            snapshot,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_dataset(number_dataset(DEFAULT_MAX_VALUE), Some(seed))
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Selected items in selection order
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn row_count(&self) -> usize {
        self.items.len()
    }

    pub fn item_at(&self, row: usize) -> Option<&str> {
        self.snapshot.item_at(row)
    }

    pub fn is_selected(&self, item: &str) -> bool {
        self.selected.iter().any(|s| s == item)
    }

    /// Toggle selection of the item shown at `row`
    ///
    /// Selecting moves the item to the front; deselecting leaves the order
    /// alone. A stale row is ignored.
    pub fn tap(&mut self, row: usize) -> TapOutcome {
        let Some(item) = self.item_at(row).map(str::to_owned) else {
            debug!("Ignoring tap on stale row {}", row);
            return TapOutcome::Ignored;
        };

        if self.is_selected(&item) {
            self.selected.retain(|s| s != &item);
            debug!("Deselected {}", item);
            return TapOutcome::Deselected { item };
        }

        self.selected.push(item.clone());
        if let Some(pos) = self.items.iter().position(|i| i == &item) {
            let moved = self.items.remove(pos);
            self.items.insert(0, moved);
        }
        let changes = self.rebuild_snapshot();
        debug!("Selected {} ({})", item, DiffSummary::of(&changes));

        TapOutcome::Selected { item, changes }
    }

    /// Replace the order with a uniformly random permutation
    ///
    /// Selection membership is untouched.
    pub fn shuffle(&mut self) -> Vec<Change> {
        self.items.shuffle(&mut self.rng);
        let changes = self.rebuild_snapshot();
        debug!("Shuffled list ({})", DiffSummary::of(&changes));
        changes
    }

    fn rebuild_snapshot(&mut self) -> Vec<Change> {
        let next = Snapshot::new(&self.items);
        let changes = self.snapshot.diff_to(&next);
        self.snapshot = next;
        changes
    }
}

impl Default for ListScreen {
    fn default() -> Self {
        Self::new()
    }
}
