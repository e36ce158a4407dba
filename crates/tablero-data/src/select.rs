//! Row selection tracking.

use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Tracks which rows of the currently rendered page are checked.
///
/// Positions are relative to the page subset that was on screen when the
/// user clicked; they are only meaningful within the render cycle that
/// produced them. Changing the filter, sort, or page does not remap
/// positions — hosts that need identity-stable selection should key their
/// own bookkeeping off the materialized records they receive on every
/// selection change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionTracker {
    positions: BTreeSet<usize>,
}

impl SelectionTracker {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select every row of a page with `page_len` rows.
    pub fn select_all(&mut self, page_len: usize) {
        self.positions = (0..page_len).collect();
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.positions.clear();
    }

    /// Set one position's checked state. Repeating the same call is a no-op.
    pub fn toggle(&mut self, position: usize, checked: bool) {
        if checked {
            self.positions.insert(position);
        } else {
            self.positions.remove(&position);
        }
    }

    /// Check whether a position is selected.
    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        self.positions.contains(&position)
    }

    /// Number of selected positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Select-all checkbox state: checked iff the whole (non-empty) page is
    /// selected. Deliberately binary — partial selection reads as unchecked.
    #[must_use]
    pub fn is_all_selected(&self, page_len: usize) -> bool {
        page_len > 0 && self.positions.len() == page_len
    }

    /// Iterate selected positions in ascending order.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions.iter().copied()
    }

    /// Materialize the selected rows out of the current page subset.
    ///
    /// Positions past the end of the slice are skipped; a stale selection
    /// can therefore never index out of bounds.
    #[must_use]
    pub fn materialize(&self, page_rows: &[Record]) -> Vec<Record> {
        self.positions
            .iter()
            .filter_map(|&i| page_rows.get(i).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all_size() {
        let mut sel = SelectionTracker::new();
        sel.select_all(7);
        assert_eq!(sel.len(), 7);
        assert!(sel.is_all_selected(7));
        assert!(!sel.is_all_selected(8));
    }

    #[test]
    fn test_clear() {
        let mut sel = SelectionTracker::new();
        sel.select_all(5);
        sel.clear();
        assert!(sel.is_empty());
        assert_eq!(sel.len(), 0);
    }

    #[test]
    fn test_all_selected_requires_non_empty() {
        let sel = SelectionTracker::new();
        assert!(!sel.is_all_selected(0));
    }

    #[test]
    fn test_toggle_idempotent() {
        let mut sel = SelectionTracker::new();
        sel.toggle(3, true);
        sel.toggle(3, true);
        assert_eq!(sel.len(), 1);
        assert!(sel.contains(3));

        sel.toggle(3, false);
        sel.toggle(3, false);
        assert!(sel.is_empty());
    }

    #[test]
    fn test_positions_ordered() {
        let mut sel = SelectionTracker::new();
        sel.toggle(5, true);
        sel.toggle(1, true);
        sel.toggle(3, true);
        assert_eq!(sel.positions().collect::<Vec<_>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_materialize() {
        let rows = vec![
            Record::new().field("name", "A"),
            Record::new().field("name", "B"),
            Record::new().field("name", "C"),
        ];
        let mut sel = SelectionTracker::new();
        sel.toggle(0, true);
        sel.toggle(2, true);

        let picked = sel.materialize(&rows);
        assert_eq!(picked.len(), 2);
        assert_eq!(picked[0].get("name"), rows[0].get("name"));
        assert_eq!(picked[1].get("name"), rows[2].get("name"));
    }

    #[test]
    fn test_materialize_skips_stale_positions() {
        let rows = vec![Record::new().field("name", "A")];
        let mut sel = SelectionTracker::new();
        sel.toggle(0, true);
        sel.toggle(9, true); // Stale position from a larger page
        assert_eq!(sel.materialize(&rows).len(), 1);
    }
}
