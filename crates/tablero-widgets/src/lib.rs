//! Table, pagination, and empty-state widgets for Tablero.

pub mod advanced_table;
pub mod basic_table;
pub mod column;
pub mod empty_state;
pub mod pagination_control;

pub use advanced_table::{
    ActionProvider, AdvancedTable, RowAction, RowActionInvoked, SearchChanged, TablePageChanged,
    TableSelectionChanged, TableSortChanged, TableView,
};
pub use basic_table::{BasicTable, RowClicked};
pub use column::{CellRenderer, TableColumn, TextAlign};
pub use empty_state::{EmptyState, EmptyStateActionInvoked};
pub use pagination_control::{ControlSize, PageChangeRequested, PaginationControl};
