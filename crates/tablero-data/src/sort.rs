//! Sort engine with tri-state per-column direction cycling.

use crate::record::Record;
use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest first
    Ascending,
    /// Largest first
    Descending,
}

/// Current sort configuration of a table.
///
/// `direction: None` means unsorted: rows keep their filtered order. The
/// state is only ever mutated through [`SortState::toggled`], which cycles
/// ascending → descending → none per column and starts any newly selected
/// column at ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// Column key the sort applies to ("" when never sorted)
    pub key: String,
    /// Active direction; `None` reverts to the unsorted order
    pub direction: Option<SortDirection>,
}

impl SortState {
    /// The unsorted state.
    #[must_use]
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// Check whether a sort is in effect.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.direction.is_some() && !self.key.is_empty()
    }

    /// Result of a header click on `key`.
    ///
    /// Cycling is independent of any other column's prior state:
    /// - different key → ascending on the new key
    /// - same key, unsorted → ascending
    /// - same key, ascending → descending
    /// - same key, descending → unsorted
    #[must_use]
    pub fn toggled(&self, key: &str) -> Self {
        let direction = if self.key == key {
            match self.direction {
                None => Some(SortDirection::Ascending),
                Some(SortDirection::Ascending) => Some(SortDirection::Descending),
                Some(SortDirection::Descending) => None,
            }
        } else {
            Some(SortDirection::Ascending)
        };
        Self {
            key: key.to_string(),
            direction,
        }
    }
}

/// Stable-sort an index vector by the records' values at `key`.
///
/// Ties (equal values, missing fields, mixed variants) keep their relative
/// order thanks to the stable sort, so an unsortable column degrades to the
/// incoming order rather than scrambling it.
pub fn sort_indices(records: &[Record], indices: &mut [usize], key: &str, direction: SortDirection) {
    indices.sort_by(|&a, &b| {
        let va = records.get(a).map_or(crate::CellValue::Empty, |r| r.get_or_empty(key));
        let vb = records.get(b).map_or(crate::CellValue::Empty, |r| r.get_or_empty(key));
        let ordering = va.compare(&vb);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
