//! Snapshot diffing
//!
//! Computes the structural edits that turn one ordered sequence of
//! identity-comparable items into another:
//! - `Delete` for items that only exist in the old sequence
//! - `Insert` for items that only exist in the new sequence
//! - `Move` for common items whose relative order changed
//!
//! Common items lying on a longest increasing subsequence of their old
//! positions (taken in new order) keep their place, so the number of moves
//! is minimal.

use std::collections::HashMap;
use std::fmt;

/// A single structural edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// Item removed; `index` is its position in the old sequence
    Delete { item: String, index: usize },
    /// Item added; `index` is its position in the new sequence
    Insert { item: String, index: usize },
    /// Item repositioned; `from` is old position, `to` is new position
    Move { item: String, from: usize, to: usize },
}

impl Change {
    pub fn item(&self) -> &str {
        match self {
            Change::Delete { item, .. } | Change::Insert { item, .. } | Change::Move { item, .. } => {
                item
            }
        }
    }

    pub fn is_move(&self) -> bool {
        matches!(self, Change::Move { .. })
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::Delete { item, index } => write!(f, "delete {} @{}", item, index),
            Change::Insert { item, index } => write!(f, "insert {} @{}", item, index),
            Change::Move { item, from, to } => write!(f, "move {} {}->{}", item, from, to),
        }
    }
}

/// Counts per change kind, used for status messages and logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub inserts: usize,
    pub deletes: usize,
    pub moves: usize,
}

impl DiffSummary {
    pub fn of(changes: &[Change]) -> Self {
        changes.iter().fold(Self::default(), |mut acc, change| {
            match change {
                Change::Delete { .. } => acc.deletes += 1,
                Change::Insert { .. } => acc.inserts += 1,
                Change::Move { .. } => acc.moves += 1,
            }
            acc
        })
    }

    pub fn total(&self) -> usize {
        self.inserts + self.deletes + self.moves
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "no changes");
        }

        let mut parts = Vec::new();
        for (count, noun) in [
            (self.moves, "move"),
            (self.inserts, "insert"),
            (self.deletes, "delete"),
        ] {
            if count > 0 {
                let plural = if count == 1 { "" } else { "s" };
                parts.push(format!("{} {}{}", count, noun, plural));
            }
        }
        write!(f, "{}", parts.join(", "))
    }
}

/// Compute the changes that transform `old` into `new`
///
/// Items are matched by value. When a value occurs more than once only its
/// first occurrence takes part in the matching.
pub fn diff<S: AsRef<str>>(old: &[S], new: &[S]) -> Vec<Change> {
    let old_pos = first_positions(old);
    let new_pos = first_positions(new);

    let mut changes = Vec::new();

    for (index, item) in old.iter().enumerate() {
        let item = item.as_ref();
        if !new_pos.contains_key(item) {
            changes.push(Change::Delete {
                item: item.to_string(),
                index,
            });
        }
    }

    // common items in new order, with their old positions
    let mut common: Vec<(usize, usize)> = Vec::new(); // (new index, old index)
    for (index, item) in new.iter().enumerate() {
        let item = item.as_ref();
        match old_pos.get(item) {
            Some(&from) if new_pos.get(item) == Some(&index) => common.push((index, from)),
            Some(_) => {}
            None => changes.push(Change::Insert {
                item: item.to_string(),
                index,
            }),
        }
    }

    let old_indices: Vec<usize> = common.iter().map(|&(_, from)| from).collect();
    let stable = longest_increasing_subsequence(&old_indices);

    let mut keep = stable.into_iter().peekable();
    for (i, &(to, from)) in common.iter().enumerate() {
        if keep.peek() == Some(&i) {
            keep.next();
            continue;
        }
        changes.push(Change::Move {
            item: new[to].as_ref().to_string(),
            from,
            to,
        });
    }

    changes
}

/// Apply `changes` produced by [`diff`] to `old`, yielding the new sequence
///
/// Returns `None` if the changes do not describe a consistent target
/// layout for `old` (a slot left empty or claimed twice).
pub fn apply<S: AsRef<str>>(old: &[S], changes: &[Change]) -> Option<Vec<String>> {
    let mut deleted = vec![false; old.len()];
    let mut moved = vec![false; old.len()];
    let mut placed: Vec<(usize, String)> = Vec::new();

    for change in changes {
        match change {
            Change::Delete { index, .. } => *deleted.get_mut(*index)? = true,
            Change::Move { item, from, to } => {
                *moved.get_mut(*from)? = true;
                placed.push((*to, item.clone()));
            }
            Change::Insert { item, index } => placed.push((*index, item.clone())),
        }
    }

    let stationary: Vec<String> = old
        .iter()
        .enumerate()
        .filter(|(i, _)| !deleted[*i] && !moved[*i])
        .map(|(_, item)| item.as_ref().to_string())
        .collect();

    let len = stationary.len() + placed.len();
    let mut slots: Vec<Option<String>> = vec![None; len];
    for (index, item) in placed {
        let slot = slots.get_mut(index)?;
        if slot.is_some() {
            return None;
        }
        *slot = Some(item);
    }

    // stationary items fill the gaps in their old relative order
    let mut rest = stationary.into_iter();
    for slot in slots.iter_mut().filter(|slot| slot.is_none()) {
        *slot = rest.next();
    }

    slots.into_iter().collect()
}

fn first_positions<S: AsRef<str>>(items: &[S]) -> HashMap<&str, usize> {
    let mut positions = HashMap::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        positions.entry(item.as_ref()).or_insert(index);
    }
    positions
}

/// Indices (into `seq`) of one longest strictly increasing subsequence
fn longest_increasing_subsequence(seq: &[usize]) -> Vec<usize> {
    // tails[k] = index into seq of the smallest tail of an increasing run of length k + 1
    let mut tails: Vec<usize> = Vec::new();
    let mut prev: Vec<Option<usize>> = vec![None; seq.len()];

    for (i, &value) in seq.iter().enumerate() {
        let pos = tails.partition_point(|&t| seq[t] < value);
        if pos > 0 {
            prev[i] = Some(tails[pos - 1]);
        }
        if pos == tails.len() {
            tails.push(i);
        } else {
            tails[pos] = i;
        }
    }

    let mut result = Vec::with_capacity(tails.len());
    let mut cursor = tails.last().copied();
    while let Some(i) = cursor {
        result.push(i);
        cursor = prev[i];
    }
    result.reverse();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lis_picks_longest_run() {
        let seq = [3, 0, 1, 4, 2, 5];
        let lis = longest_increasing_subsequence(&seq);
        assert_eq!(lis.len(), 4);
        let values: Vec<usize> = lis.iter().map(|&i| seq[i]).collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_lis_empty() {
        assert!(longest_increasing_subsequence(&[]).is_empty());
    }

    #[test]
    fn test_identical_sequences_have_no_changes() {
        let items = ["a", "b", "c"];
        assert!(diff(&items, &items).is_empty());
    }

    #[test]
    fn test_summary_display() {
        let changes = vec![
            Change::Move {
                item: "5".into(),
                from: 5,
                to: 0,
            },
            Change::Insert {
                item: "x".into(),
                index: 1,
            },
        ];
        let summary = DiffSummary::of(&changes);
        assert_eq!(summary.to_string(), "1 move, 1 insert");
        assert_eq!(DiffSummary::default().to_string(), "no changes");
    }

    #[test]
    fn test_apply_rejects_out_of_range_index() {
        let old = ["a", "b"];
        let changes = vec![Change::Delete {
            item: "z".into(),
            index: 7,
        }];
        assert_eq!(apply(&old, &changes), None);
    }
}
