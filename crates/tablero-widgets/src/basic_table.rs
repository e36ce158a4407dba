//! `BasicTable` widget: plain tabular rendering with no data shaping.

use crate::column::TableColumn;
use serde::{Deserialize, Serialize};
use std::any::Any;
use tablero_core::{
    widget::{AccessibleRole, LayoutResult, TextStyle},
    Brick, BrickAssertion, BrickBudget, BrickVerification, Canvas, Color, Constraints, Event,
    MouseButton, Point, Rect, Size, TypeId, Widget,
};
use tablero_data::Record;

/// Height of the placeholder row shown when there is no data.
const EMPTY_ROW_HEIGHT: f32 = 96.0;

/// Message emitted when a row is clicked.
#[derive(Debug, Clone, PartialEq)]
pub struct RowClicked {
    /// Index of the clicked row
    pub index: usize,
    /// The clicked row's record
    pub record: Record,
}

/// A table that renders rows exactly as given: no search, no sorting, no
/// pagination. Row order is the caller's order.
#[derive(Clone, Serialize, Deserialize)]
pub struct BasicTable {
    /// Column definitions
    columns: Vec<TableColumn>,
    /// Row data
    rows: Vec<Record>,
    /// Alternate row backgrounds
    striped: bool,
    /// Highlight the hovered row
    hoverable: bool,
    /// Tighter row spacing
    compact: bool,
    /// Message shown when there are no rows
    empty_message: String,
    /// Header background color
    header_bg: Color,
    /// Row background color
    row_bg: Color,
    /// Alternate row background color
    row_alt_bg: Color,
    /// Hovered row background color
    hover_bg: Color,
    /// Border color
    border_color: Color,
    /// Text color
    text_color: Color,
    /// Header text color
    header_text_color: Color,
    /// Muted text color (empty message)
    muted_text_color: Color,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
    /// Row currently under the pointer
    #[serde(skip)]
    hovered_row: Option<usize>,
}

impl Default for BasicTable {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            striped: false,
            hoverable: true,
            compact: false,
            empty_message: "No data available".to_string(),
            header_bg: Color::new(0.95, 0.95, 0.95, 1.0),
            row_bg: Color::WHITE,
            row_alt_bg: Color::new(0.97, 0.97, 0.97, 1.0),
            hover_bg: Color::new(0.93, 0.95, 0.97, 1.0),
            border_color: Color::new(0.85, 0.85, 0.85, 1.0),
            text_color: Color::BLACK,
            header_text_color: Color::new(0.2, 0.2, 0.2, 1.0),
            muted_text_color: Color::new(0.45, 0.45, 0.45, 1.0),
            accessible_name_value: None,
            test_id_value: None,
            bounds: Rect::default(),
            hovered_row: None,
        }
    }
}

impl BasicTable {
    /// Create a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Add multiple columns.
    #[must_use]
    pub fn columns(mut self, columns: impl IntoIterator<Item = TableColumn>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Add a row.
    #[must_use]
    pub fn row(mut self, row: Record) -> Self {
        self.rows.push(row);
        self
    }

    /// Add multiple rows.
    #[must_use]
    pub fn rows(mut self, rows: impl IntoIterator<Item = Record>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Enable striped row backgrounds.
    #[must_use]
    pub const fn striped(mut self, striped: bool) -> Self {
        self.striped = striped;
        self
    }

    /// Enable hover highlighting.
    #[must_use]
    pub const fn hoverable(mut self, hoverable: bool) -> Self {
        self.hoverable = hoverable;
        self
    }

    /// Use compact row spacing.
    #[must_use]
    pub const fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Set the message shown when there are no rows.
    #[must_use]
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Replace all rows, keeping configuration.
    pub fn set_rows(&mut self, rows: Vec<Record>) {
        self.rows = rows;
        self.hovered_row = None;
    }

    /// Get row count.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the row currently under the pointer.
    #[must_use]
    pub const fn hovered_row(&self) -> Option<usize> {
        self.hovered_row
    }

    fn row_height(&self) -> f32 {
        if self.compact {
            32.0
        } else {
            40.0
        }
    }

    fn header_height(&self) -> f32 {
        if self.compact {
            36.0
        } else {
            44.0
        }
    }

    fn total_width(&self) -> f32 {
        self.columns
            .iter()
            .map(TableColumn::resolved_width)
            .sum::<f32>()
            .max(100.0)
    }

    fn total_height(&self) -> f32 {
        let body = if self.rows.is_empty() {
            EMPTY_ROW_HEIGHT
        } else {
            self.rows.len() as f32 * self.row_height()
        };
        self.header_height() + body
    }

    fn row_rect(&self, index: usize) -> Rect {
        Rect::new(
            self.bounds.x,
            (index as f32).mul_add(self.row_height(), self.bounds.y + self.header_height()),
            self.bounds.width,
            self.row_height(),
        )
    }

    fn row_at(&self, position: &Point) -> Option<usize> {
        (0..self.rows.len()).find(|&i| self.row_rect(i).contains_point(position))
    }

    fn paint_header(&self, canvas: &mut dyn Canvas) {
        let header_rect = Rect::new(
            self.bounds.x,
            self.bounds.y,
            self.bounds.width,
            self.header_height(),
        );
        canvas.fill_rect(header_rect, self.header_bg);

        let style = TextStyle {
            size: 14.0,
            color: self.header_text_color,
            weight: tablero_core::FontWeight::Semibold,
            ..TextStyle::default()
        };
        let mut x = self.bounds.x;
        for col in &self.columns {
            canvas.draw_text(
                &col.header,
                Point::new(x + 8.0, self.bounds.y + self.header_height() / 2.0),
                &style,
            );
            x += col.resolved_width();
        }
    }

    fn paint_rows(&self, canvas: &mut dyn Canvas) {
        let style = TextStyle {
            size: 14.0,
            color: self.text_color,
            ..TextStyle::default()
        };

        for (i, record) in self.rows.iter().enumerate() {
            let rect = self.row_rect(i);
            let bg = if self.hoverable && self.hovered_row == Some(i) {
                self.hover_bg
            } else if self.striped && i % 2 == 1 {
                self.row_alt_bg
            } else {
                self.row_bg
            };
            canvas.fill_rect(rect, bg);

            let mut x = rect.x;
            for col in &self.columns {
                let width = col.resolved_width();
                let cell_rect = Rect::new(x, rect.y, width, rect.height);
                canvas.push_clip(cell_rect);
                canvas.draw_text(
                    &col.display_value(record, i),
                    Point::new(x + 8.0, rect.y + rect.height / 2.0),
                    &style,
                );
                canvas.pop_clip();
                x += width;
            }
        }
    }

    fn paint_empty(&self, canvas: &mut dyn Canvas) {
        let rect = Rect::new(
            self.bounds.x,
            self.bounds.y + self.header_height(),
            self.bounds.width,
            EMPTY_ROW_HEIGHT,
        );
        canvas.fill_rect(rect, self.row_bg);
        let style = TextStyle {
            size: 14.0,
            color: self.muted_text_color,
            ..TextStyle::default()
        };
        canvas.draw_text(&self.empty_message, rect.center(), &style);
    }
}

impl Widget for BasicTable {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(self.total_width(), self.total_height()))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        self.paint_header(canvas);
        if self.rows.is_empty() {
            self.paint_empty(canvas);
        } else {
            self.paint_rows(canvas);
        }
        canvas.stroke_rect(
            Rect::new(
                self.bounds.x,
                self.bounds.y,
                self.bounds.width,
                self.total_height().min(self.bounds.height),
            ),
            self.border_color,
            1.0,
        );
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::MouseMove { position } => {
                self.hovered_row = self.row_at(position);
                None
            }
            Event::MouseLeave => {
                self.hovered_row = None;
                None
            }
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                let index = self.row_at(position)?;
                Some(Box::new(RowClicked {
                    index,
                    record: self.rows[index].clone(),
                }))
            }
            _ => None,
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Table
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}

impl Brick for BasicTable {
    fn brick_name(&self) -> &'static str {
        "BasicTable"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        &[
            BrickAssertion::MaxLatencyMs(16),
            BrickAssertion::ContrastRatio(4.5),
        ]
    }

    fn budget(&self) -> BrickBudget {
        BrickBudget::uniform(16)
    }

    fn verify(&self) -> BrickVerification {
        let mut verification = BrickVerification::default();
        for assertion in self.assertions() {
            match assertion {
                BrickAssertion::ContrastRatio(required) => {
                    let ratio = self.text_color.contrast_ratio(&self.row_bg);
                    if ratio >= *required {
                        verification.passed.push(assertion.clone());
                    } else {
                        verification
                            .failed
                            .push((assertion.clone(), format!("{ratio:.2}:1")));
                    }
                }
                other => verification.passed.push(other.clone()),
            }
        }
        verification
    }
}
