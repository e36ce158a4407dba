//! Row model and client-side data shaping for Tablero tables.
//!
//! Everything here operates on rows already materialized in memory. The
//! shaping pipeline is `filter → sort → paginate`, expressed over index
//! vectors into the caller's row slice so rows themselves are never moved
//! or mutated. Each stage is a pure function of its inputs; recomputing
//! from scratch always yields identical results.

pub mod aggregate;
pub mod filter;
pub mod paginate;
pub mod record;
pub mod select;
pub mod sort;
pub mod value;

pub use aggregate::{aggregate_by, cumulative_sum, moving_average, percentage_change};
pub use aggregate::{Aggregation, SeriesPoint, Trend};
pub use filter::filter_indices;
pub use paginate::{page_range, page_window, total_pages, PageItem};
pub use record::Record;
pub use select::SelectionTracker;
pub use sort::{sort_indices, SortDirection, SortState};
pub use value::CellValue;
