//! Widget trait and related types.
//!
//! Widgets follow a measure-layout-paint cycle:
//!
//! 1. **Measure**: compute intrinsic size given constraints
//! 2. **Layout**: position self within allocated bounds
//! 3. **Paint**: emit draw commands into a [`Canvas`]
//!
//! Input is delivered through [`Widget::event`]; a widget reacts by mutating
//! its own state and, when something the host should know about happened,
//! returning a typed message as `Box<dyn Any + Send>`.

use crate::brick::Brick;
use crate::constraints::Constraints;
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Unique identifier for a widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Create a new widget ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Type identifier for widget types (used for diffing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait that all Tablero components implement.
///
/// Every widget is also a [`Brick`]: it carries verifiable assertions
/// (contrast, latency) that the host can check before rendering.
pub trait Widget: Brick + Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size given constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Position self within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Emit draw commands for rendering.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle an input event, optionally returning a message for the host.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Check if this widget is interactive (can receive events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Check if this widget can receive keyboard focus.
    fn is_focusable(&self) -> bool {
        false
    }

    /// Get the accessible name for screen readers.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Get the accessible role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }
}

/// Canvas trait for paint operations.
///
/// A minimal abstraction over the rendering backend; the table widgets
/// reduce everything they draw to these primitives.
pub trait Canvas {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: crate::Color);

    /// Draw a stroked rectangle.
    fn stroke_rect(&mut self, rect: Rect, color: crate::Color, width: f32);

    /// Draw text.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Draw a line between two points.
    fn draw_line(&mut self, from: Point, to: Point, color: crate::Color, width: f32);

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: crate::Color);

    /// Fill a polygon.
    fn fill_polygon(&mut self, points: &[Point], color: crate::Color);

    /// Push a clip region.
    fn push_clip(&mut self, rect: Rect);

    /// Pop the clip region.
    fn pop_clip(&mut self);
}

/// Text style for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: crate::Color,
    /// Font weight
    pub weight: FontWeight,
    /// Font style
    pub style: FontStyle,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: crate::Color::BLACK,
            weight: FontWeight::Normal,
            style: FontStyle::Normal,
        }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    /// Normal (400)
    #[default]
    Normal,
    /// Medium (500)
    Medium,
    /// Semibold (600)
    Semibold,
    /// Bold (700)
    Bold,
}

/// Font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontStyle {
    /// Normal style
    #[default]
    Normal,
    /// Italic style
    Italic,
}

/// Accessible role for screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic element
    #[default]
    Generic,
    /// Button
    Button,
    /// Checkbox
    Checkbox,
    /// Text input
    TextInput,
    /// Table
    Table,
    /// Table row
    TableRow,
    /// Table cell
    TableCell,
    /// Menu
    Menu,
    /// Menu item
    MenuItem,
    /// Navigation landmark (pagination)
    Navigation,
}
