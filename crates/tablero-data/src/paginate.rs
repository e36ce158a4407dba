//! Page math and the page-window algorithm.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Total page count for a sequence of `len` items.
///
/// Never less than 1: an empty sequence still renders as one (empty) page.
#[must_use]
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Index range of one page, clamped to the sequence bounds.
///
/// `page` is 1-based and is itself clamped into `[1, total_pages]`, so a
/// request past the end yields the last page rather than an empty slice.
#[must_use]
pub fn page_range(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let page = page.clamp(1, total_pages(len, page_size));
    let start = ((page - 1) * page_size).min(len);
    let end = (start + page_size).min(len);
    start..end
}

/// One entry in a pagination control's button row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageItem {
    /// A numbered page button (1-based)
    Page(usize),
    /// A collapsed run of pages
    Ellipsis,
}

/// Compute the bounded page-number window for a pagination control.
///
/// With `total` pages fitting inside `max_visible`, every page number is
/// listed. Otherwise the window always contains page 1 and page `total`,
/// the pages adjacent to `current`, and at most two ellipsis markers for
/// the collapsed runs on either side. Total item count is bounded
/// regardless of `total`.
#[must_use]
pub fn page_window(current: usize, total: usize, max_visible: usize) -> Vec<PageItem> {
    let max_visible = max_visible.max(1);
    let total = total.max(1);
    let current = current.clamp(1, total);

    if total <= max_visible {
        return (1..=total).map(PageItem::Page).collect();
    }

    let mut items = vec![PageItem::Page(1)];

    let window_start = current.saturating_sub(1).max(2);
    let window_end = (current + 1).min(total - 1);

    if window_start > 2 {
        items.push(PageItem::Ellipsis);
    }
    for page in window_start..=window_end {
        items.push(PageItem::Page(page));
    }
    if window_end < total - 1 {
        items.push(PageItem::Ellipsis);
    }

    items.push(PageItem::Page(total));
    items
}
