//! Tablero: composable data table and pagination widgets.
//!
//! Tablero lets a product team assemble dashboard pages from ready-made,
//! configurable pieces. The heart of the library is the data table
//! subsystem: a [`widgets::BasicTable`] for plain rendering, an
//! [`widgets::AdvancedTable`] that composes search, sorting, selection, and
//! pagination over in-memory rows, and a standalone
//! [`widgets::PaginationControl`].
//!
//! # Example
//!
//! ```
//! use tablero::data::Record;
//! use tablero::widgets::{AdvancedTable, TableColumn};
//!
//! let table = AdvancedTable::new()
//!     .column(TableColumn::new("name", "Name").sortable())
//!     .column(TableColumn::new("role", "Role"))
//!     .row(Record::new().field("name", "Ada").field("role", "Engineer"))
//!     .row(Record::new().field("name", "Grace").field("role", "Admiral"))
//!     .page_size(10);
//!
//! assert_eq!(table.view().filtered_len, 2);
//! ```

pub use tablero_core as core;
pub use tablero_data as data;
pub use tablero_widgets as widgets;

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use tablero_core::{
        Canvas, Color, Constraints, Event, Key, MouseButton, Point, Rect, RecordingCanvas, Size,
        Widget,
    };
    pub use tablero_data::{CellValue, Record, SelectionTracker, SortDirection, SortState};
    pub use tablero_widgets::{
        AdvancedTable, BasicTable, EmptyState, PaginationControl, TableColumn,
    };
}
