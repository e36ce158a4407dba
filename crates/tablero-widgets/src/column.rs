//! Column configuration shared by the table widgets.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tablero_data::Record;

/// Minimum width a column can be configured to.
const MIN_COLUMN_WIDTH: f32 = 24.0;

/// Width used for columns that don't specify one.
pub(crate) const DEFAULT_COLUMN_WIDTH: f32 = 120.0;

/// Which horizontal band of a table a point falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColumnHit {
    /// The leading selection-checkbox column
    Checkbox,
    /// A data column, by index
    Column(usize),
    /// The trailing actions column
    Actions,
}

/// Strategy for rendering one cell's content.
///
/// Receives the row and its index within the visible subset and returns the
/// text to display. When a column carries a renderer, the raw field value is
/// never read for display — only for search and sort.
pub type CellRenderer = Arc<dyn Fn(&Record, usize) -> String + Send + Sync>;

/// Text alignment within a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Column definition for a table.
#[derive(Clone, Serialize, Deserialize)]
pub struct TableColumn {
    /// Column key (field name in the row data)
    pub key: String,
    /// Display header
    pub header: String,
    /// Column width (None = default)
    pub width: Option<f32>,
    /// Text alignment
    pub align: TextAlign,
    /// Whether clicking the header toggles sorting
    pub sortable: bool,
    /// Whether the column participates in filtering (informational; the
    /// filter engine always matches against all fields)
    pub filterable: bool,
    /// Optional cell content override
    #[serde(skip)]
    pub cell: Option<CellRenderer>,
}

impl TableColumn {
    /// Create a new column.
    #[must_use]
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            width: None,
            align: TextAlign::Left,
            sortable: false,
            filterable: false,
            cell: None,
        }
    }

    /// Set column width.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width.max(MIN_COLUMN_WIDTH));
        self
    }

    /// Set text alignment.
    #[must_use]
    pub const fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Make the column sortable.
    #[must_use]
    pub const fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Mark the column as filterable.
    #[must_use]
    pub const fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    /// Set a cell content renderer.
    #[must_use]
    pub fn cell<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&Record, usize) -> String + Send + Sync + 'static,
    {
        self.cell = Some(Arc::new(renderer));
        self
    }

    /// Effective width of the column.
    #[must_use]
    pub fn resolved_width(&self) -> f32 {
        self.width.unwrap_or(DEFAULT_COLUMN_WIDTH)
    }

    /// Display text for one cell of this column.
    #[must_use]
    pub fn display_value(&self, record: &Record, index: usize) -> String {
        match &self.cell {
            Some(renderer) => renderer(record, index),
            None => record.get_or_empty(&self.key).display(),
        }
    }
}

impl std::fmt::Debug for TableColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableColumn")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("cell", &self.cell.as_ref().map(|_| "<renderer>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let col = TableColumn::new("name", "Name");
        assert_eq!(col.key, "name");
        assert_eq!(col.header, "Name");
        assert!(col.width.is_none());
        assert!(!col.sortable);
        assert!(!col.filterable);
        assert!(col.cell.is_none());
        assert_eq!(col.resolved_width(), DEFAULT_COLUMN_WIDTH);
    }

    #[test]
    fn test_builder() {
        let col = TableColumn::new("price", "Price")
            .width(150.0)
            .align(TextAlign::Right)
            .sortable()
            .filterable();
        assert_eq!(col.width, Some(150.0));
        assert_eq!(col.align, TextAlign::Right);
        assert!(col.sortable);
        assert!(col.filterable);
    }

    #[test]
    fn test_width_floor() {
        let col = TableColumn::new("id", "ID").width(5.0);
        assert_eq!(col.width, Some(MIN_COLUMN_WIDTH));
    }

    #[test]
    fn test_display_value_raw_field() {
        let col = TableColumn::new("name", "Name");
        let record = Record::new().field("name", "Ada");
        assert_eq!(col.display_value(&record, 0), "Ada");
    }

    #[test]
    fn test_display_value_missing_field_is_blank() {
        let col = TableColumn::new("missing", "Missing");
        let record = Record::new().field("name", "Ada");
        assert_eq!(col.display_value(&record, 0), "");
    }

    #[test]
    fn test_display_value_renderer_overrides_field() {
        let col = TableColumn::new("name", "Name")
            .cell(|record, index| format!("{}#{index}", record.get_or_empty("name").display()));
        let record = Record::new().field("name", "Ada");
        assert_eq!(col.display_value(&record, 3), "Ada#3");
    }

    #[test]
    fn test_serde_skips_renderer() {
        let col = TableColumn::new("x", "X").sortable().cell(|_, _| "hi".into());
        let json = serde_json::to_string(&col).unwrap();
        let back: TableColumn = serde_json::from_str(&json).unwrap();
        assert!(back.sortable);
        assert!(back.cell.is_none());
    }

    #[test]
    fn test_debug_does_not_panic_with_renderer() {
        let col = TableColumn::new("x", "X").cell(|_, _| String::new());
        let s = format!("{col:?}");
        assert!(s.contains("renderer"));
    }
}
