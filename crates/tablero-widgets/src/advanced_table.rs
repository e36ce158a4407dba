//! `AdvancedTable` widget: searchable, sortable, selectable, paginated table.
//!
//! The controller recomputes its row view as `filter → sort → paginate` from
//! current state on every render cycle. All three stages are pure functions
//! over index vectors, so recomputing is always safe and always consistent
//! with the latest data, even after the caller replaces rows wholesale.

use crate::column::{ColumnHit, TableColumn};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::sync::Arc;
use tablero_core::{
    widget::{AccessibleRole, LayoutResult, TextStyle},
    Brick, BrickAssertion, BrickBudget, BrickVerification, Canvas, Color, Constraints, Event, Key,
    MouseButton, Point, Rect, Size, TypeId, Widget,
};
use tablero_data::{
    filter_indices, page_range, sort_indices, total_pages, Record, SelectionTracker, SortDirection,
    SortState,
};

const SEARCH_HEIGHT: f32 = 36.0;
const SEARCH_MAX_WIDTH: f32 = 320.0;
const SECTION_GAP: f32 = 12.0;
const HEADER_HEIGHT: f32 = 44.0;
const ROW_HEIGHT: f32 = 40.0;
const EMPTY_ROW_HEIGHT: f32 = 96.0;
const CHECKBOX_COL_WIDTH: f32 = 40.0;
const ACTIONS_COL_WIDTH: f32 = 40.0;
const CHECKBOX_SIZE: f32 = 16.0;
const FOOTER_HEIGHT: f32 = 36.0;
const FOOTER_BUTTON: f32 = 28.0;
const FOOTER_BUTTON_GAP: f32 = 4.0;
const MENU_WIDTH: f32 = 160.0;
const MENU_ITEM_HEIGHT: f32 = 32.0;

/// Rows painted in loading mode, regardless of data or page size.
const LOADING_PLACEHOLDER_ROWS: usize = 5;

/// Per-row action entry shown in the trailing actions menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowAction {
    /// Menu label
    pub label: String,
    /// Action identifier reported back to the host
    pub action: String,
}

impl RowAction {
    /// Create a new action entry.
    #[must_use]
    pub fn new(label: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: action.into(),
        }
    }
}

/// Strategy producing the action entries for one row.
pub type ActionProvider = Arc<dyn Fn(&Record) -> Vec<RowAction> + Send + Sync>;

/// Message emitted when the search query changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchChanged {
    /// The new query
    pub query: String,
}

/// Message emitted when table sorting changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSortChanged {
    /// Column key being sorted
    pub column: String,
    /// New direction; `None` reverts to the unsorted order
    pub direction: Option<SortDirection>,
}

/// Message emitted on every selection mutation, carrying the materialized
/// rows at the selected positions of the current page.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSelectionChanged {
    /// Selected rows, in page order
    pub rows: Vec<Record>,
}

/// Message emitted when the visible page changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TablePageChanged {
    /// New 1-based page
    pub page: usize,
}

/// Message emitted when a row action is invoked from the actions menu.
#[derive(Debug, Clone, PartialEq)]
pub struct RowActionInvoked {
    /// Action identifier of the chosen entry
    pub action: String,
    /// The row the menu belonged to
    pub record: Record,
}

/// The row view computed for one render cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Indexes (into the full row slice) of the visible page subset
    pub indices: Vec<usize>,
    /// Row count after filtering (before pagination)
    pub filtered_len: usize,
    /// Total page count (at least 1)
    pub total_pages: usize,
    /// Effective 1-based page, clamped into range
    pub page: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FooterButton {
    Previous,
    Page(usize),
    Next,
}

/// Searchable, sortable, selectable, paginated data table.
#[derive(Clone, Serialize, Deserialize)]
pub struct AdvancedTable {
    /// Column definitions
    columns: Vec<TableColumn>,
    /// Row data
    rows: Vec<Record>,
    /// Show the search box
    searchable: bool,
    /// Placeholder shown in the empty search box
    search_placeholder: String,
    /// Show per-row selection checkboxes
    selectable: bool,
    /// Paginate the row view
    pagination: bool,
    /// Rows per page
    page_size: usize,
    /// Message shown when the filtered view is empty
    empty_message: String,
    /// Render placeholder rows and ignore input
    loading: bool,
    /// Per-row action entries (None = no actions column)
    #[serde(skip)]
    actions: Option<ActionProvider>,
    /// Current search query
    search_query: String,
    /// Current sort state
    sort: SortState,
    /// Current selection (positions within the visible page)
    selection: SelectionTracker,
    /// Current 1-based page
    current_page: usize,
    /// Header background color
    header_bg: Color,
    /// Row background color
    row_bg: Color,
    /// Alternate row background color
    row_alt_bg: Color,
    /// Selected row background color
    selected_bg: Color,
    /// Border color
    border_color: Color,
    /// Text color
    text_color: Color,
    /// Header text color
    header_text_color: Color,
    /// Muted text color (placeholders, summary, ellipses)
    muted_text_color: Color,
    /// Accent color (checkboxes, active page button)
    accent_color: Color,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
    /// Whether the search box has focus
    #[serde(skip)]
    search_focused: bool,
    /// Page-relative row whose actions menu is open
    #[serde(skip)]
    open_menu: Option<usize>,
}

impl Default for AdvancedTable {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            searchable: true,
            search_placeholder: "Search...".to_string(),
            selectable: false,
            pagination: true,
            page_size: 10,
            empty_message: "No data available".to_string(),
            loading: false,
            actions: None,
            search_query: String::new(),
            sort: SortState::unsorted(),
            selection: SelectionTracker::new(),
            current_page: 1,
            header_bg: Color::new(0.95, 0.95, 0.95, 1.0),
            row_bg: Color::WHITE,
            row_alt_bg: Color::new(0.97, 0.97, 0.97, 1.0),
            selected_bg: Color::new(0.9, 0.95, 1.0, 1.0),
            border_color: Color::new(0.85, 0.85, 0.85, 1.0),
            text_color: Color::BLACK,
            header_text_color: Color::new(0.2, 0.2, 0.2, 1.0),
            muted_text_color: Color::new(0.45, 0.45, 0.45, 1.0),
            accent_color: Color::new(0.2, 0.47, 0.96, 1.0),
            accessible_name_value: None,
            test_id_value: None,
            bounds: Rect::default(),
            search_focused: false,
            open_menu: None,
        }
    }
}

impl AdvancedTable {
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

    /// Show or hide the search box.
    #[must_use]
    pub const fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// Set the search placeholder text.
    #[must_use]
    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    /// Enable row selection checkboxes.
    #[must_use]
    pub const fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Enable or disable pagination. Disabled means one page with all rows.
    #[must_use]
    pub const fn pagination(mut self, pagination: bool) -> Self {
        self.pagination = pagination;
        self
    }

    /// Set rows per page.
    #[must_use]
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Set the message shown when the filtered view is empty.
    #[must_use]
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Set loading mode.
    #[must_use]
    pub const fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set the per-row action provider.
    #[must_use]
    pub fn actions<F>(mut self, provider: F) -> Self
    where
        F: Fn(&Record) -> Vec<RowAction> + Send + Sync + 'static,
    {
        self.actions = Some(Arc::new(provider));
        self
    }

    /// Set the accent color (checkboxes, active page button).
    #[must_use]
    pub const fn accent_color(mut self, color: Color) -> Self {
        self.accent_color = color;
        self
    }

    /// Set the text color.
    #[must_use]
    pub const fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set the selected row background color.
    #[must_use]
    pub const fn selected_bg(mut self, color: Color) -> Self {
        self.selected_bg = color;
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

    // ----- state accessors -----

    /// Current search query.
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Current sort state.
    #[must_use]
    pub const fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Current selection.
    #[must_use]
    pub const fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    /// Effective 1-based page, clamped into the current view's range.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.view().page
    }

    /// Check loading mode.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Total row count before filtering.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    // ----- state transitions -----

    /// Replace all rows, keeping search/sort/page state. The effective page
    /// is clamped into the new view's range.
    pub fn set_rows(&mut self, rows: Vec<Record>) {
        self.rows = rows;
        self.open_menu = None;
    }

    /// Set the search query. Always resets to page 1 so a shrinking result
    /// set can never leave the view pointing past its end.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.current_page = 1;
    }

    /// Toggle sorting on a column key. The page is deliberately preserved;
    /// only filter changes reset pagination.
    pub fn toggle_sort(&mut self, key: &str) {
        self.sort = self.sort.toggled(key);
    }

    /// Jump to a page, clamped into `[1, total_pages]`.
    pub fn set_page(&mut self, page: usize) {
        let view = self.view();
        self.current_page = page.clamp(1, view.total_pages);
    }

    /// Advance one page (no-op on the last page).
    pub fn next_page(&mut self) {
        self.set_page(self.current_page().saturating_add(1));
    }

    /// Go back one page (no-op on the first page).
    pub fn previous_page(&mut self) {
        self.set_page(self.current_page().saturating_sub(1));
    }

    /// Set loading mode.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Select every row of the current page. Returns the materialized rows.
    pub fn select_all(&mut self) -> Vec<Record> {
        let page = self.page_records(&self.view());
        self.selection.select_all(page.len());
        self.selection.materialize(&page)
    }

    /// Clear the selection.
    pub fn deselect_all(&mut self) {
        self.selection.clear();
    }

    /// Set one page-relative position's checked state. Returns the
    /// materialized rows after the change.
    pub fn toggle_row(&mut self, position: usize, checked: bool) -> Vec<Record> {
        self.selection.toggle(position, checked);
        let page = self.page_records(&self.view());
        self.selection.materialize(&page)
    }

    // ----- view computation -----

    /// Compute the current row view: filter → sort → paginate.
    #[must_use]
    pub fn view(&self) -> TableView {
        let mut indices = filter_indices(&self.rows, &self.search_query);
        if let (true, Some(direction)) = (self.sort.is_active(), self.sort.direction) {
            sort_indices(&self.rows, &mut indices, &self.sort.key, direction);
        }
        let filtered_len = indices.len();

        if !self.pagination {
            return TableView {
                indices,
                filtered_len,
                total_pages: 1,
                page: 1,
            };
        }

        let pages = total_pages(filtered_len, self.page_size);
        let page = self.current_page.clamp(1, pages);
        let range = page_range(filtered_len, page, self.page_size);
        TableView {
            indices: indices[range].to_vec(),
            filtered_len,
            total_pages: pages,
            page,
        }
    }

    /// Materialized records of the current page, in view order.
    #[must_use]
    pub fn visible_records(&self) -> Vec<Record> {
        self.page_records(&self.view())
    }

    fn page_records(&self, view: &TableView) -> Vec<Record> {
        view.indices.iter().map(|&i| self.rows[i].clone()).collect()
    }

    // ----- geometry -----

    fn search_rect(&self) -> Rect {
        Rect::new(
            self.bounds.x,
            self.bounds.y,
            self.bounds.width.min(SEARCH_MAX_WIDTH),
            SEARCH_HEIGHT,
        )
    }

    fn table_top(&self) -> f32 {
        if self.searchable {
            self.bounds.y + SEARCH_HEIGHT + SECTION_GAP
        } else {
            self.bounds.y
        }
    }

    fn header_rect(&self) -> Rect {
        Rect::new(self.bounds.x, self.table_top(), self.bounds.width, HEADER_HEIGHT)
    }

    fn row_rect(&self, index: usize) -> Rect {
        Rect::new(
            self.bounds.x,
            (index as f32).mul_add(ROW_HEIGHT, self.table_top() + HEADER_HEIGHT),
            self.bounds.width,
            ROW_HEIGHT,
        )
    }

    fn body_height(&self, view: &TableView) -> f32 {
        if self.loading {
            LOADING_PLACEHOLDER_ROWS as f32 * ROW_HEIGHT
        } else if view.indices.is_empty() {
            EMPTY_ROW_HEIGHT
        } else {
            view.indices.len() as f32 * ROW_HEIGHT
        }
    }

    fn has_footer(&self, view: &TableView) -> bool {
        self.pagination && !self.loading && view.total_pages > 1
    }

    fn footer_rect(&self, view: &TableView) -> Rect {
        Rect::new(
            self.bounds.x,
            self.table_top() + HEADER_HEIGHT + self.body_height(view) + SECTION_GAP,
            self.bounds.width,
            FOOTER_HEIGHT,
        )
    }

    fn hit_column(&self, x: f32) -> Option<ColumnHit> {
        let mut left = self.bounds.x;
        if self.selectable {
            if x < left + CHECKBOX_COL_WIDTH {
                return Some(ColumnHit::Checkbox);
            }
            left += CHECKBOX_COL_WIDTH;
        }
        for (i, col) in self.columns.iter().enumerate() {
            let width = col.resolved_width();
            if x < left + width {
                return Some(ColumnHit::Column(i));
            }
            left += width;
        }
        if self.actions.is_some() && x < left + ACTIONS_COL_WIDTH {
            return Some(ColumnHit::Actions);
        }
        None
    }

    /// Page numbers shown in the embedded footer: a plain window of up to 5
    /// buttons centered on the current page, without ellipsis collapsing
    /// (the standalone `PaginationControl` does the collapsed variant).
    fn footer_pages(page: usize, pages: usize) -> Vec<usize> {
        let count = pages.min(5);
        (0..count)
            .map(|i| {
                if pages <= 5 || page <= 3 {
                    i + 1
                } else if page >= pages - 2 {
                    pages - 4 + i
                } else {
                    page - 2 + i
                }
            })
            .collect()
    }

    fn footer_buttons(&self, view: &TableView) -> Vec<(Rect, FooterButton)> {
        if !self.has_footer(view) {
            return Vec::new();
        }
        let footer = self.footer_rect(view);
        let pages = Self::footer_pages(view.page, view.total_pages);
        let slots = pages.len() + 2;
        let step = FOOTER_BUTTON + FOOTER_BUTTON_GAP;
        let mut x = self.bounds.x + self.bounds.width - slots as f32 * step;
        let y = footer.y + (footer.height - FOOTER_BUTTON) / 2.0;

        let mut buttons = vec![(
            Rect::new(x, y, FOOTER_BUTTON, FOOTER_BUTTON),
            FooterButton::Previous,
        )];
        x += step;
        for page in pages {
            buttons.push((
                Rect::new(x, y, FOOTER_BUTTON, FOOTER_BUTTON),
                FooterButton::Page(page),
            ));
            x += step;
        }
        buttons.push((
            Rect::new(x, y, FOOTER_BUTTON, FOOTER_BUTTON),
            FooterButton::Next,
        ));
        buttons
    }

    fn menu_items(&self, record: &Record) -> Vec<RowAction> {
        self.actions.as_ref().map_or_else(Vec::new, |f| f(record))
    }

    fn menu_rect(&self, row: usize, item_count: usize) -> Rect {
        let anchor = self.row_rect(row);
        Rect::new(
            self.bounds.x + self.bounds.width - MENU_WIDTH,
            anchor.y + ROW_HEIGHT,
            MENU_WIDTH,
            item_count as f32 * MENU_ITEM_HEIGHT,
        )
    }

    // ----- event handling -----

    fn selection_message(&self, view: &TableView) -> Box<dyn Any + Send> {
        Box::new(TableSelectionChanged {
            rows: self.selection.materialize(&self.page_records(view)),
        })
    }

    fn handle_mouse_down(&mut self, position: Point) -> Option<Box<dyn Any + Send>> {
        let view = self.view();

        // An open actions menu captures the click: inside picks an item,
        // anywhere else dismisses.
        if let Some(row) = self.open_menu.take() {
            return self.menu_click(row, &view, position);
        }

        if self.searchable {
            self.search_focused = self.search_rect().contains_point(&position);
            if self.search_focused {
                return None;
            }
        }

        if self.header_rect().contains_point(&position) {
            return self.header_click(position.x, &view);
        }

        if !view.indices.is_empty() {
            for i in 0..view.indices.len() {
                if self.row_rect(i).contains_point(&position) {
                    return self.row_click(i, &view, position.x);
                }
            }
        }

        for (rect, button) in self.footer_buttons(&view) {
            if rect.contains_point(&position) {
                return self.footer_click(button, &view);
            }
        }

        None
    }

    fn menu_click(
        &mut self,
        row: usize,
        view: &TableView,
        position: Point,
    ) -> Option<Box<dyn Any + Send>> {
        let record = view.indices.get(row).map(|&i| self.rows[i].clone())?;
        let items = self.menu_items(&record);
        let rect = self.menu_rect(row, items.len());
        if !rect.contains_point(&position) {
            return None;
        }
        let index = ((position.y - rect.y) / MENU_ITEM_HEIGHT) as usize;
        let item = items.get(index)?;
        Some(Box::new(RowActionInvoked {
            action: item.action.clone(),
            record,
        }))
    }

    fn header_click(&mut self, x: f32, view: &TableView) -> Option<Box<dyn Any + Send>> {
        match self.hit_column(x)? {
            ColumnHit::Checkbox => {
                let page_len = view.indices.len();
                if self.selection.is_all_selected(page_len) {
                    self.selection.clear();
                } else {
                    self.selection.select_all(page_len);
                }
                Some(self.selection_message(view))
            }
            ColumnHit::Column(i) if self.columns[i].sortable => {
                self.sort = self.sort.toggled(&self.columns[i].key);
                Some(Box::new(TableSortChanged {
                    column: self.sort.key.clone(),
                    direction: self.sort.direction,
                }))
            }
            ColumnHit::Column(_) | ColumnHit::Actions => None,
        }
    }

    fn row_click(&mut self, row: usize, view: &TableView, x: f32) -> Option<Box<dyn Any + Send>> {
        match self.hit_column(x)? {
            ColumnHit::Checkbox => {
                let checked = !self.selection.contains(row);
                self.selection.toggle(row, checked);
                Some(self.selection_message(view))
            }
            ColumnHit::Actions => {
                self.open_menu = Some(row);
                None
            }
            ColumnHit::Column(_) => None,
        }
    }

    fn footer_click(
        &mut self,
        button: FooterButton,
        view: &TableView,
    ) -> Option<Box<dyn Any + Send>> {
        let target = match button {
            FooterButton::Previous => view.page.saturating_sub(1).max(1),
            FooterButton::Next => (view.page + 1).min(view.total_pages),
            FooterButton::Page(p) => p,
        };
        if target == view.page {
            return None;
        }
        self.current_page = target;
        Some(Box::new(TablePageChanged { page: target }))
    }

    fn handle_search_key(&mut self, key: Key) -> Option<Box<dyn Any + Send>> {
        match key {
            Key::Backspace => {
                self.search_query.pop()?;
                self.current_page = 1;
                Some(Box::new(SearchChanged {
                    query: self.search_query.clone(),
                }))
            }
            Key::Escape => {
                self.search_focused = false;
                None
            }
            _ => None,
        }
    }

    // ----- painting -----

    fn paint_search(&self, canvas: &mut dyn Canvas) {
        let rect = self.search_rect();
        canvas.fill_rect(rect, self.row_bg);
        let border = if self.search_focused {
            self.accent_color
        } else {
            self.border_color
        };
        canvas.stroke_rect(rect, border, 1.0);

        let (text, color) = if self.search_query.is_empty() {
            (self.search_placeholder.as_str(), self.muted_text_color)
        } else {
            (self.search_query.as_str(), self.text_color)
        };
        canvas.draw_text(
            text,
            Point::new(rect.x + 10.0, rect.y + rect.height / 2.0),
            &TextStyle {
                size: 14.0,
                color,
                ..TextStyle::default()
            },
        );

        if self.selectable && !self.selection.is_empty() {
            canvas.draw_text(
                &format!("{} selected", self.selection.len()),
                Point::new(rect.x + rect.width + SECTION_GAP, rect.y + rect.height / 2.0),
                &TextStyle {
                    size: 13.0,
                    color: self.muted_text_color,
                    ..TextStyle::default()
                },
            );
        }
    }

    fn paint_checkbox(&self, canvas: &mut dyn Canvas, center: Point, checked: bool) {
        let half = CHECKBOX_SIZE / 2.0;
        let rect = Rect::new(center.x - half, center.y - half, CHECKBOX_SIZE, CHECKBOX_SIZE);
        if checked {
            canvas.fill_rect(rect, self.accent_color);
            // Check mark as two strokes.
            canvas.draw_line(
                Point::new(rect.x + 3.0, center.y),
                Point::new(center.x - 1.0, rect.y + CHECKBOX_SIZE - 4.0),
                Color::WHITE,
                2.0,
            );
            canvas.draw_line(
                Point::new(center.x - 1.0, rect.y + CHECKBOX_SIZE - 4.0),
                Point::new(rect.x + CHECKBOX_SIZE - 3.0, rect.y + 4.0),
                Color::WHITE,
                2.0,
            );
        } else {
            canvas.fill_rect(rect, self.row_bg);
            canvas.stroke_rect(rect, self.border_color, 1.0);
        }
    }

    fn paint_sort_indicator(&self, canvas: &mut dyn Canvas, x: f32, cy: f32, column_key: &str) {
        let active = self.sort.is_active() && self.sort.key == column_key;
        let up = Some(SortDirection::Ascending);
        let down = Some(SortDirection::Descending);

        let up_color = if active && self.sort.direction == up {
            self.header_text_color
        } else {
            self.muted_text_color
        };
        let down_color = if active && self.sort.direction == down {
            self.header_text_color
        } else {
            self.muted_text_color
        };

        canvas.fill_polygon(
            &[
                Point::new(x, cy - 2.0),
                Point::new(x + 8.0, cy - 2.0),
                Point::new(x + 4.0, cy - 8.0),
            ],
            up_color,
        );
        canvas.fill_polygon(
            &[
                Point::new(x, cy + 2.0),
                Point::new(x + 8.0, cy + 2.0),
                Point::new(x + 4.0, cy + 8.0),
            ],
            down_color,
        );
    }

    fn paint_header(&self, canvas: &mut dyn Canvas, view: &TableView) {
        let rect = self.header_rect();
        canvas.fill_rect(rect, self.header_bg);
        let cy = rect.y + rect.height / 2.0;

        let mut x = rect.x;
        if self.selectable {
            self.paint_checkbox(
                canvas,
                Point::new(x + CHECKBOX_COL_WIDTH / 2.0, cy),
                self.selection.is_all_selected(view.indices.len()),
            );
            x += CHECKBOX_COL_WIDTH;
        }

        let style = TextStyle {
            size: 14.0,
            color: self.header_text_color,
            weight: tablero_core::FontWeight::Semibold,
            ..TextStyle::default()
        };
        for col in &self.columns {
            let width = col.resolved_width();
            canvas.draw_text(&col.header, Point::new(x + 8.0, cy), &style);
            if col.sortable {
                self.paint_sort_indicator(canvas, x + width - 16.0, cy, &col.key);
            }
            x += width;
        }
    }

    fn paint_loading_rows(&self, canvas: &mut dyn Canvas) {
        let placeholder = self.row_bg.lerp(&self.muted_text_color, 0.25);
        for i in 0..LOADING_PLACEHOLDER_ROWS {
            let rect = self.row_rect(i);
            canvas.fill_rect(rect, self.row_bg);

            let mut x = rect.x;
            if self.selectable {
                canvas.fill_rect(
                    Rect::new(
                        x + (CHECKBOX_COL_WIDTH - CHECKBOX_SIZE) / 2.0,
                        rect.y + (ROW_HEIGHT - CHECKBOX_SIZE) / 2.0,
                        CHECKBOX_SIZE,
                        CHECKBOX_SIZE,
                    ),
                    placeholder,
                );
                x += CHECKBOX_COL_WIDTH;
            }
            for col in &self.columns {
                let width = col.resolved_width();
                canvas.fill_rect(
                    Rect::new(x + 8.0, rect.y + ROW_HEIGHT / 2.0 - 6.0, width * 0.6, 12.0),
                    placeholder,
                );
                x += width;
            }
        }
    }

    fn paint_empty(&self, canvas: &mut dyn Canvas) {
        let rect = Rect::new(
            self.bounds.x,
            self.table_top() + HEADER_HEIGHT,
            self.bounds.width,
            EMPTY_ROW_HEIGHT,
        );
        canvas.fill_rect(rect, self.row_bg);
        canvas.draw_text(
            &self.empty_message,
            rect.center(),
            &TextStyle {
                size: 14.0,
                color: self.muted_text_color,
                ..TextStyle::default()
            },
        );
    }

    fn paint_rows(&self, canvas: &mut dyn Canvas, view: &TableView) {
        let style = TextStyle {
            size: 14.0,
            color: self.text_color,
            ..TextStyle::default()
        };

        for (i, &record_index) in view.indices.iter().enumerate() {
            let record = &self.rows[record_index];
            let rect = self.row_rect(i);
            let bg = if self.selection.contains(i) {
                self.selected_bg
            } else if i % 2 == 1 {
                self.row_alt_bg
            } else {
                self.row_bg
            };
            canvas.fill_rect(rect, bg);
            let cy = rect.y + rect.height / 2.0;

            let mut x = rect.x;
            if self.selectable {
                self.paint_checkbox(
                    canvas,
                    Point::new(x + CHECKBOX_COL_WIDTH / 2.0, cy),
                    self.selection.contains(i),
                );
                x += CHECKBOX_COL_WIDTH;
            }
            for col in &self.columns {
                let width = col.resolved_width();
                let cell_rect = Rect::new(x, rect.y, width, rect.height);
                canvas.push_clip(cell_rect);
                canvas.draw_text(
                    &col.display_value(record, i),
                    Point::new(x + 8.0, cy),
                    &style,
                );
                canvas.pop_clip();
                x += width;
            }
            if self.actions.is_some() {
                let cx = x + ACTIONS_COL_WIDTH / 2.0;
                for offset in [-5.0, 0.0, 5.0] {
                    canvas.fill_circle(Point::new(cx + offset, cy), 1.5, self.muted_text_color);
                }
            }
        }
    }

    fn paint_footer(&self, canvas: &mut dyn Canvas, view: &TableView) {
        if !self.has_footer(view) {
            return;
        }
        let footer = self.footer_rect(view);
        let start = (view.page - 1) * self.page_size + 1;
        let end = (view.page * self.page_size).min(view.filtered_len);
        canvas.draw_text(
            &format!("Showing {start} to {end} of {}", view.filtered_len),
            Point::new(footer.x, footer.y + footer.height / 2.0),
            &TextStyle {
                size: 13.0,
                color: self.muted_text_color,
                ..TextStyle::default()
            },
        );

        for (rect, button) in self.footer_buttons(view) {
            let cy = rect.y + rect.height / 2.0;
            match button {
                FooterButton::Previous | FooterButton::Next => {
                    let at_boundary = match button {
                        FooterButton::Previous => view.page == 1,
                        _ => view.page == view.total_pages,
                    };
                    let color = if at_boundary {
                        self.muted_text_color
                    } else {
                        self.text_color
                    };
                    canvas.stroke_rect(rect, self.border_color, 1.0);
                    let glyph = if button == FooterButton::Previous {
                        "\u{2039}"
                    } else {
                        "\u{203a}"
                    };
                    canvas.draw_text(
                        glyph,
                        Point::new(rect.center().x - 3.0, cy),
                        &TextStyle {
                            size: 14.0,
                            color,
                            ..TextStyle::default()
                        },
                    );
                }
                FooterButton::Page(page) => {
                    let current = page == view.page;
                    if current {
                        canvas.fill_rect(rect, self.accent_color);
                    }
                    canvas.draw_text(
                        &page.to_string(),
                        Point::new(rect.center().x - 4.0, cy),
                        &TextStyle {
                            size: 13.0,
                            color: if current { Color::WHITE } else { self.text_color },
                            ..TextStyle::default()
                        },
                    );
                }
            }
        }
    }

    fn paint_menu(&self, canvas: &mut dyn Canvas, row: usize, view: &TableView) {
        let Some(&record_index) = view.indices.get(row) else {
            return;
        };
        let items = self.menu_items(&self.rows[record_index]);
        if items.is_empty() {
            return;
        }
        let rect = self.menu_rect(row, items.len());
        canvas.fill_rect(rect, self.row_bg);
        canvas.stroke_rect(rect, self.border_color, 1.0);

        let style = TextStyle {
            size: 14.0,
            color: self.text_color,
            ..TextStyle::default()
        };
        for (i, item) in items.iter().enumerate() {
            let item_y = (i as f32).mul_add(MENU_ITEM_HEIGHT, rect.y);
            if i > 0 {
                canvas.draw_line(
                    Point::new(rect.x, item_y),
                    Point::new(rect.x + rect.width, item_y),
                    self.border_color,
                    1.0,
                );
            }
            canvas.draw_text(
                &item.label,
                Point::new(rect.x + 10.0, item_y + MENU_ITEM_HEIGHT / 2.0),
                &style,
            );
        }
    }

    fn total_width(&self) -> f32 {
        let mut width: f32 = self
            .columns
            .iter()
            .map(TableColumn::resolved_width)
            .sum();
        if self.selectable {
            width += CHECKBOX_COL_WIDTH;
        }
        if self.actions.is_some() {
            width += ACTIONS_COL_WIDTH;
        }
        width.max(100.0)
    }

    fn total_height(&self, view: &TableView) -> f32 {
        let mut height = HEADER_HEIGHT + self.body_height(view);
        if self.searchable {
            height += SEARCH_HEIGHT + SECTION_GAP;
        }
        if self.has_footer(view) {
            height += SECTION_GAP + FOOTER_HEIGHT;
        }
        height
    }
}

impl Widget for AdvancedTable {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let view = self.view();
        constraints.constrain(Size::new(self.total_width(), self.total_height(&view)))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let view = self.view();
        if self.searchable {
            self.paint_search(canvas);
        }
        self.paint_header(canvas, &view);
        if self.loading {
            self.paint_loading_rows(canvas);
        } else if view.indices.is_empty() {
            self.paint_empty(canvas);
        } else {
            self.paint_rows(canvas, &view);
        }
        canvas.stroke_rect(
            Rect::new(
                self.bounds.x,
                self.table_top(),
                self.bounds.width,
                HEADER_HEIGHT + self.body_height(&view),
            ),
            self.border_color,
            1.0,
        );
        self.paint_footer(canvas, &view);
        if let Some(row) = self.open_menu {
            self.paint_menu(canvas, row, &view);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        // Loading mode: controls stay visible but inert.
        if self.loading {
            return None;
        }

        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => self.handle_mouse_down(*position),
            Event::TextInput { text } if self.search_focused && self.searchable => {
                self.search_query.push_str(text);
                self.current_page = 1;
                Some(Box::new(SearchChanged {
                    query: self.search_query.clone(),
                }))
            }
            Event::KeyDown { key } if self.search_focused => self.handle_search_key(*key),
            Event::KeyDown { key: Key::Escape } => {
                self.open_menu = None;
                None
            }
            Event::FocusOut => {
                self.search_focused = false;
                None
            }
            _ => None,
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn is_focusable(&self) -> bool {
        self.searchable
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

impl Brick for AdvancedTable {
    fn brick_name(&self) -> &'static str {
        "AdvancedTable"
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

#[cfg(test)]
mod tests {
    use super::*;
    use tablero_core::RecordingCanvas;
    use tablero_data::CellValue;

    fn people(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| {
                Record::new()
                    .field("name", format!("Person {i:02}"))
                    .field("score", i as i64)
            })
            .collect()
    }

    fn table(n: usize) -> AdvancedTable {
        AdvancedTable::new()
            .column(TableColumn::new("name", "Name").width(140.0).sortable())
            .column(TableColumn::new("score", "Score").width(80.0).sortable())
            .rows(people(n))
    }

    fn visible_names(t: &AdvancedTable) -> Vec<String> {
        t.visible_records()
            .iter()
            .map(|r| r.get_or_empty("name").display())
            .collect()
    }

    // ===== View chain =====

    #[test]
    fn test_default_view_is_first_page_insertion_order() {
        let t = table(23);
        let view = t.view();
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.page, 1);
        assert_eq!(view.filtered_len, 23);
        assert_eq!(view.indices, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_pagination_disabled_is_one_page() {
        let t = table(23).pagination(false);
        let view = t.view();
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.indices.len(), 23);
    }

    #[test]
    fn test_last_page_is_partial() {
        let mut t = table(23);
        t.set_page(3);
        assert_eq!(t.view().indices.len(), 3);
    }

    #[test]
    fn test_set_page_clamps() {
        let mut t = table(23);
        t.set_page(4);
        assert_eq!(t.current_page(), 3);
        t.set_page(0);
        assert_eq!(t.current_page(), 1);
    }

    #[test]
    fn test_search_filters_and_resets_page() {
        let mut t = table(23);
        t.set_page(3);
        t.set_search("Person 1");
        // Person 10 through Person 19
        assert_eq!(t.current_page(), 1);
        assert_eq!(t.view().filtered_len, 10);
    }

    #[test]
    fn test_search_no_match_is_empty_single_page() {
        let mut t = table(23);
        t.set_search("does-not-exist");
        let view = t.view();
        assert_eq!(view.filtered_len, 0);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.page, 1);
        assert!(view.indices.is_empty());
    }

    #[test]
    fn test_sort_preserves_page() {
        let mut t = table(23);
        t.set_page(2);
        t.toggle_sort("name");
        assert_eq!(t.current_page(), 2);
    }

    #[test]
    fn test_sort_cycle_through_view() {
        let mut t = AdvancedTable::new()
            .column(TableColumn::new("name", "Name").sortable())
            .rows(vec![
                Record::new().field("name", "B"),
                Record::new().field("name", "A"),
                Record::new().field("name", "C"),
            ]);

        t.toggle_sort("name");
        assert_eq!(visible_names(&t), vec!["A", "B", "C"]);
        t.toggle_sort("name");
        assert_eq!(visible_names(&t), vec!["C", "B", "A"]);
        t.toggle_sort("name");
        assert_eq!(visible_names(&t), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_set_rows_reflected_immediately() {
        let mut t = table(5);
        t.set_rows(people(2));
        assert_eq!(t.view().filtered_len, 2);
        assert_eq!(t.row_count(), 2);
    }

    // ===== Selection =====

    #[test]
    fn test_select_all_and_clear() {
        let mut t = table(23).selectable(true);
        let selected = t.select_all();
        assert_eq!(selected.len(), 10);
        assert!(t.selection().is_all_selected(10));

        t.deselect_all();
        assert!(t.selection().is_empty());
    }

    #[test]
    fn test_toggle_row_materializes() {
        let mut t = table(5).selectable(true);
        let selected = t.toggle_row(2, true);
        assert_eq!(selected.len(), 1);
        assert_eq!(
            selected[0].get("name"),
            Some(&CellValue::Text("Person 02".into()))
        );
    }

    // ===== Events =====

    fn laid_out(mut t: AdvancedTable) -> AdvancedTable {
        t.layout(Rect::new(0.0, 0.0, 400.0, 600.0));
        t
    }

    #[test]
    fn test_header_click_sorts() {
        let mut t = laid_out(table(23));
        // Header row sits below search (36 + 12); click in the first column.
        let msg = t.event(&Event::MouseDown {
            position: Point::new(50.0, 48.0 + 22.0),
            button: MouseButton::Left,
        });
        let sort = msg
            .expect("sort message")
            .downcast::<TableSortChanged>()
            .expect("TableSortChanged");
        assert_eq!(sort.column, "name");
        assert_eq!(sort.direction, Some(SortDirection::Ascending));
    }

    #[test]
    fn test_select_all_click_emits_materialized_rows() {
        let mut t = laid_out(table(23).selectable(true));
        let msg = t.event(&Event::MouseDown {
            position: Point::new(20.0, 48.0 + 22.0), // checkbox column, header row
            button: MouseButton::Left,
        });
        let changed = msg
            .expect("selection message")
            .downcast::<TableSelectionChanged>()
            .expect("TableSelectionChanged");
        assert_eq!(changed.rows.len(), 10);
    }

    #[test]
    fn test_row_checkbox_click_toggles() {
        let mut t = laid_out(table(5).selectable(true));
        // First body row: search (36) + gap (12) + header (44) → y = 92..132
        let pos = Point::new(20.0, 100.0);
        let msg = t.event(&Event::MouseDown {
            position: pos,
            button: MouseButton::Left,
        });
        let changed = msg
            .expect("selection message")
            .downcast::<TableSelectionChanged>()
            .expect("TableSelectionChanged");
        assert_eq!(changed.rows.len(), 1);

        // Clicking again unchecks.
        let msg = t.event(&Event::MouseDown {
            position: pos,
            button: MouseButton::Left,
        });
        let changed = msg
            .expect("selection message")
            .downcast::<TableSelectionChanged>()
            .expect("TableSelectionChanged");
        assert!(changed.rows.is_empty());
    }

    #[test]
    fn test_search_typing_resets_page_and_emits() {
        let mut t = laid_out(table(23));
        t.set_page(3);

        // Focus the search box, then type.
        t.event(&Event::MouseDown {
            position: Point::new(50.0, 18.0),
            button: MouseButton::Left,
        });
        let msg = t.event(&Event::TextInput {
            text: "Person".into(),
        });
        let search = msg
            .expect("search message")
            .downcast::<SearchChanged>()
            .expect("SearchChanged");
        assert_eq!(search.query, "Person");
        assert_eq!(t.current_page(), 1);
    }

    #[test]
    fn test_backspace_edits_query() {
        let mut t = laid_out(table(5));
        t.event(&Event::MouseDown {
            position: Point::new(50.0, 18.0),
            button: MouseButton::Left,
        });
        t.event(&Event::TextInput { text: "ab".into() });
        let msg = t.event(&Event::KeyDown {
            key: Key::Backspace,
        });
        assert!(msg.is_some());
        assert_eq!(t.search_query(), "a");
    }

    #[test]
    fn test_events_inert_while_loading() {
        let mut t = laid_out(table(23).loading(true));
        let msg = t.event(&Event::MouseDown {
            position: Point::new(50.0, 70.0),
            button: MouseButton::Left,
        });
        assert!(msg.is_none());
        assert!(t.is_loading());
    }

    #[test]
    fn test_action_menu_flow() {
        let t = table(5)
            .actions(|_| vec![RowAction::new("Edit", "edit"), RowAction::new("Delete", "delete")]);
        let mut t = laid_out(t);

        // Click the actions column of the first body row (x past both columns).
        let actions_x = 140.0 + 80.0 + 20.0;
        let msg = t.event(&Event::MouseDown {
            position: Point::new(actions_x, 100.0),
            button: MouseButton::Left,
        });
        assert!(msg.is_none()); // Menu opened, nothing invoked yet

        // Menu hangs below the row, right-aligned; pick the second item.
        let menu_x = 400.0 - MENU_WIDTH + 10.0;
        let second_item_y = 132.0 + MENU_ITEM_HEIGHT + MENU_ITEM_HEIGHT / 2.0;
        let msg = t.event(&Event::MouseDown {
            position: Point::new(menu_x, second_item_y),
            button: MouseButton::Left,
        });
        let invoked = msg
            .expect("action message")
            .downcast::<RowActionInvoked>()
            .expect("RowActionInvoked");
        assert_eq!(invoked.action, "delete");
        assert_eq!(
            invoked.record.get("name"),
            Some(&CellValue::Text("Person 00".into()))
        );
    }

    #[test]
    fn test_footer_next_click_changes_page() {
        let mut t = laid_out(table(23));
        let view = t.view();
        let buttons = t.footer_buttons(&view);
        let (next_rect, _) = buttons.last().expect("footer buttons");
        let msg = t.event(&Event::MouseDown {
            position: next_rect.center(),
            button: MouseButton::Left,
        });
        let page = msg
            .expect("page message")
            .downcast::<TablePageChanged>()
            .expect("TablePageChanged");
        assert_eq!(page.page, 2);
        assert_eq!(t.current_page(), 2);
    }

    #[test]
    fn test_footer_previous_on_first_page_is_noop() {
        let mut t = laid_out(table(23));
        let view = t.view();
        let buttons = t.footer_buttons(&view);
        let (prev_rect, _) = buttons.first().expect("footer buttons");
        let msg = t.event(&Event::MouseDown {
            position: prev_rect.center(),
            button: MouseButton::Left,
        });
        assert!(msg.is_none());
        assert_eq!(t.current_page(), 1);
    }

    // ===== Footer window =====

    #[test]
    fn test_footer_pages_windows() {
        assert_eq!(AdvancedTable::footer_pages(1, 3), vec![1, 2, 3]);
        assert_eq!(AdvancedTable::footer_pages(1, 9), vec![1, 2, 3, 4, 5]);
        assert_eq!(AdvancedTable::footer_pages(5, 9), vec![3, 4, 5, 6, 7]);
        assert_eq!(AdvancedTable::footer_pages(9, 9), vec![5, 6, 7, 8, 9]);
    }

    // ===== Painting =====

    #[test]
    fn test_paint_normal_mode() {
        let mut t = laid_out(table(23).selectable(true));
        let mut canvas = RecordingCanvas::new();
        t.layout(Rect::new(0.0, 0.0, 400.0, 600.0));
        t.paint(&mut canvas);
        assert!(canvas.has_text("Name"));
        assert!(canvas.has_text("Person 00"));
        assert!(canvas.has_text("Showing 1 to 10 of 23"));
    }

    #[test]
    fn test_paint_loading_has_no_data_text() {
        let mut t = laid_out(table(23).loading(true));
        let mut canvas = RecordingCanvas::new();
        t.layout(Rect::new(0.0, 0.0, 400.0, 600.0));
        t.paint(&mut canvas);
        assert!(canvas.has_text("Name")); // Headers stay visible
        assert!(!canvas.has_text("Person 00"));
        assert!(!canvas.has_text("Showing"));
    }

    #[test]
    fn test_paint_empty_mode() {
        let mut t = laid_out(table(23).empty_message("Nothing matched"));
        t.set_search("zzz");
        let mut canvas = RecordingCanvas::new();
        t.paint(&mut canvas);
        assert!(canvas.has_text("Nothing matched"));
    }

    #[test]
    fn test_paint_custom_cell_renderer() {
        let mut t = AdvancedTable::new()
            .column(TableColumn::new("score", "Score").cell(|r, _| {
                format!("{} pts", r.get_or_empty("score").display())
            }))
            .row(Record::new().field("score", 9));
        t.layout(Rect::new(0.0, 0.0, 300.0, 400.0));
        let mut canvas = RecordingCanvas::new();
        t.paint(&mut canvas);
        assert!(canvas.has_text("9 pts"));
        assert!(!canvas.texts().contains(&"9"));
    }

    // ===== Properties =====

    use proptest::prelude::*;

    proptest! {
        // Walking every page collects each filtered row exactly once, in
        // order, for any row count and page size.
        #[test]
        fn prop_concatenated_pages_cover_all_rows(n in 0usize..60, page_size in 1usize..12) {
            let mut t = table(n).page_size(page_size);
            let mut seen = Vec::new();
            let total = t.view().total_pages;
            for page in 1..=total {
                t.set_page(page);
                seen.extend(t.view().indices);
            }
            prop_assert_eq!(seen, (0..n).collect::<Vec<_>>());
        }

        // The effective page is always within bounds no matter what page
        // was requested before data or filters changed.
        #[test]
        fn prop_effective_page_in_range(n in 0usize..60, requested in 0usize..30) {
            let mut t = table(n);
            t.set_page(requested);
            let view = t.view();
            prop_assert!(view.page >= 1);
            prop_assert!(view.page <= view.total_pages);
        }
    }

    // ===== Brick =====

    #[test]
    fn test_brick_verify() {
        let t = table(3);
        assert_eq!(t.brick_name(), "AdvancedTable");
        assert!(t.verify().is_valid());
        assert!(t.can_render());
        assert_eq!(t.budget().total_ms, 16);
    }

    #[test]
    fn test_brick_fails_on_low_contrast() {
        let t = table(3).text_color(Color::new(0.92, 0.92, 0.92, 1.0));
        assert!(!t.can_render());
    }
}
