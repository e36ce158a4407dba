//! Full-row substring search.

use crate::record::Record;

/// Filter records by a search query, returning surviving indexes in order.
///
/// An empty query is the identity: every index `0..records.len()` survives.
/// Otherwise a record survives iff any field's display text contains the
/// query, case-insensitively. The query is matched against all fields, not
/// just the columns a table happens to show.
#[must_use]
pub fn filter_indices(records: &[Record], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..records.len()).collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            record
                .values()
                .any(|value| value.display().to_lowercase().contains(&needle))
        })
        .map(|(i, _)| i)
        .collect()
}
