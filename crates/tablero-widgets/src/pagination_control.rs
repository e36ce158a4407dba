//! `PaginationControl` widget: standalone page navigation.

use serde::{Deserialize, Serialize};
use std::any::Any;
use tablero_core::{
    widget::{AccessibleRole, LayoutResult, TextStyle},
    Brick, BrickAssertion, BrickBudget, BrickVerification, Canvas, Color, Constraints, Event,
    MouseButton, Point, Rect, Size, TypeId, Widget,
};
use tablero_data::{page_window, PageItem};

const BUTTON_GAP: f32 = 4.0;
const ELLIPSIS_DOT_RADIUS: f32 = 1.5;

/// Message emitted when the user asks for a different page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChangeRequested {
    /// Requested 1-based page
    pub page: usize,
}

/// Control size variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ControlSize {
    /// 24px buttons
    Small,
    /// 32px buttons
    #[default]
    Medium,
    /// 40px buttons
    Large,
}

impl ControlSize {
    const fn button_size(self) -> f32 {
        match self {
            Self::Small => 24.0,
            Self::Medium => 32.0,
            Self::Large => 40.0,
        }
    }

    const fn font_size(self) -> f32 {
        match self {
            Self::Small => 12.0,
            Self::Medium => 14.0,
            Self::Large => 16.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    First,
    Previous,
    Item(PageItem),
    Next,
    Last,
}

/// Standalone page-number window with ellipsis collapsing.
///
/// Renders nothing when there is a single page. Navigation clamps to
/// `[1, total_pages]`; clicking a boundary button at its boundary is a no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationControl {
    /// Current 1-based page
    current_page: usize,
    /// Total page count
    total_pages: usize,
    /// Show jump-to-first/last buttons
    show_first_last: bool,
    /// Show numbered page buttons
    show_page_numbers: bool,
    /// Maximum numbered buttons before collapsing
    max_visible_pages: usize,
    /// Button size variant
    size: ControlSize,
    /// Active page button background
    active_bg: Color,
    /// Active page button text
    active_text: Color,
    /// Button text color
    text_color: Color,
    /// Disabled/ellipsis color
    muted_color: Color,
    /// Button border color
    border_color: Color,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Default for PaginationControl {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            show_first_last: false,
            show_page_numbers: true,
            max_visible_pages: 5,
            size: ControlSize::Medium,
            active_bg: Color::new(0.2, 0.47, 0.96, 1.0),
            active_text: Color::WHITE,
            text_color: Color::new(0.2, 0.2, 0.2, 1.0),
            muted_color: Color::new(0.6, 0.6, 0.6, 1.0),
            border_color: Color::new(0.85, 0.85, 0.85, 1.0),
            accessible_name_value: None,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }
}

impl PaginationControl {
    /// Create a control over `total_pages` pages, starting at page 1.
    #[must_use]
    pub fn new(total_pages: usize) -> Self {
        Self {
            total_pages: total_pages.max(1),
            ..Self::default()
        }
    }

    /// Set the current page (clamped).
    #[must_use]
    pub fn current_page(mut self, page: usize) -> Self {
        self.current_page = page.clamp(1, self.total_pages);
        self
    }

    /// Show jump-to-first/last buttons.
    #[must_use]
    pub const fn show_first_last(mut self, show: bool) -> Self {
        self.show_first_last = show;
        self
    }

    /// Show or hide the numbered page buttons.
    #[must_use]
    pub const fn show_page_numbers(mut self, show: bool) -> Self {
        self.show_page_numbers = show;
        self
    }

    /// Set the maximum numbered buttons before ellipsis collapsing.
    #[must_use]
    pub fn max_visible_pages(mut self, max: usize) -> Self {
        self.max_visible_pages = max.max(1);
        self
    }

    /// Set the size variant.
    #[must_use]
    pub const fn size(mut self, size: ControlSize) -> Self {
        self.size = size;
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

    /// Current page.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.current_page
    }

    /// Total pages.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Replace the page count, clamping the current page into range.
    pub fn set_total_pages(&mut self, total_pages: usize) {
        self.total_pages = total_pages.max(1);
        self.current_page = self.current_page.clamp(1, self.total_pages);
    }

    /// Jump to a page. Out-of-range requests clamp; returns whether the
    /// current page actually changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        let target = page.clamp(1, self.total_pages);
        let changed = target != self.current_page;
        self.current_page = target;
        changed
    }

    /// Go to the next page (no-op on the last page).
    pub fn next(&mut self) -> bool {
        self.go_to(self.current_page.saturating_add(1))
    }

    /// Go to the previous page (no-op on the first page).
    pub fn previous(&mut self) -> bool {
        self.go_to(self.current_page.saturating_sub(1).max(1))
    }

    /// Go to the first page.
    pub fn first(&mut self) -> bool {
        self.go_to(1)
    }

    /// Go to the last page.
    pub fn last(&mut self) -> bool {
        self.go_to(self.total_pages)
    }

    /// The page-number window rendered between the arrows.
    #[must_use]
    pub fn page_items(&self) -> Vec<PageItem> {
        page_window(self.current_page, self.total_pages, self.max_visible_pages)
    }

    fn slots(&self) -> Vec<Slot> {
        let mut slots = Vec::new();
        if self.show_first_last {
            slots.push(Slot::First);
        }
        slots.push(Slot::Previous);
        if self.show_page_numbers {
            slots.extend(self.page_items().into_iter().map(Slot::Item));
        }
        slots.push(Slot::Next);
        if self.show_first_last {
            slots.push(Slot::Last);
        }
        slots
    }

    fn slot_rects(&self) -> Vec<(Rect, Slot)> {
        let button = self.size.button_size();
        let y = self.bounds.y + (self.bounds.height - button) / 2.0;
        self.slots()
            .into_iter()
            .enumerate()
            .map(|(i, slot)| {
                let x = (i as f32).mul_add(button + BUTTON_GAP, self.bounds.x);
                (Rect::new(x, y, button, button), slot)
            })
            .collect()
    }

    fn slot_target(&self, slot: Slot) -> Option<usize> {
        let target = match slot {
            Slot::First => 1,
            Slot::Previous => self.current_page.saturating_sub(1).max(1),
            Slot::Next => (self.current_page + 1).min(self.total_pages),
            Slot::Last => self.total_pages,
            Slot::Item(PageItem::Page(p)) => p,
            Slot::Item(PageItem::Ellipsis) => return None,
        };
        (target != self.current_page).then_some(target)
    }
}

impl Widget for PaginationControl {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        if self.total_pages <= 1 {
            return constraints.constrain(Size::ZERO);
        }
        let button = self.size.button_size();
        let count = self.slots().len() as f32;
        constraints.constrain(Size::new(
            count.mul_add(button + BUTTON_GAP, -BUTTON_GAP),
            button,
        ))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        // A single page needs no navigation.
        if self.total_pages <= 1 {
            return;
        }

        let font = self.size.font_size();
        for (rect, slot) in self.slot_rects() {
            let center = rect.center();
            match slot {
                Slot::Item(PageItem::Ellipsis) => {
                    for offset in [-4.0, 0.0, 4.0] {
                        canvas.fill_circle(
                            Point::new(center.x + offset, center.y),
                            ELLIPSIS_DOT_RADIUS,
                            self.muted_color,
                        );
                    }
                }
                Slot::Item(PageItem::Page(page)) => {
                    let is_current = page == self.current_page;
                    if is_current {
                        canvas.fill_rect(rect, self.active_bg);
                    } else {
                        canvas.stroke_rect(rect, self.border_color, 1.0);
                    }
                    canvas.draw_text(
                        &page.to_string(),
                        Point::new(center.x - font / 4.0, center.y),
                        &TextStyle {
                            size: font,
                            color: if is_current {
                                self.active_text
                            } else {
                                self.text_color
                            },
                            ..TextStyle::default()
                        },
                    );
                }
                arrow => {
                    let glyph = match arrow {
                        Slot::First => "\u{00ab}",
                        Slot::Previous => "\u{2039}",
                        Slot::Next => "\u{203a}",
                        _ => "\u{00bb}",
                    };
                    let disabled = self.slot_target(arrow).is_none();
                    canvas.stroke_rect(rect, self.border_color, 1.0);
                    canvas.draw_text(
                        glyph,
                        Point::new(center.x - font / 4.0, center.y),
                        &TextStyle {
                            size: font,
                            color: if disabled {
                                self.muted_color
                            } else {
                                self.text_color
                            },
                            ..TextStyle::default()
                        },
                    );
                }
            }
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if self.total_pages <= 1 {
            return None;
        }
        let Event::MouseDown {
            position,
            button: MouseButton::Left,
        } = event
        else {
            return None;
        };

        for (rect, slot) in self.slot_rects() {
            if rect.contains_point(position) {
                let target = self.slot_target(slot)?;
                self.current_page = target;
                return Some(Box::new(PageChangeRequested { page: target }));
            }
        }
        None
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn is_focusable(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Navigation
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}

impl Brick for PaginationControl {
    fn brick_name(&self) -> &'static str {
        "PaginationControl"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        &[
            BrickAssertion::MaxLatencyMs(8),
            BrickAssertion::ContrastRatio(4.5),
            BrickAssertion::Focusable,
        ]
    }

    fn budget(&self) -> BrickBudget {
        BrickBudget::uniform(8)
    }

    fn verify(&self) -> BrickVerification {
        let mut verification = BrickVerification::default();
        for assertion in self.assertions() {
            match assertion {
                BrickAssertion::ContrastRatio(required) => {
                    let ratio = self.active_text.contrast_ratio(&self.active_bg);
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
