//! Draw commands.
//!
//! All rendering reduces to these primitives; a backend replays them.

use crate::widget::TextStyle;
use crate::{Color, CornerRadius, Point, Rect};
use serde::{Deserialize, Serialize};

/// Stroke style for outlines and paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Fill/stroke style for rectangles and circles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill color (None = no fill)
    pub fill: Option<Color>,
    /// Stroke style (None = no stroke)
    pub stroke: Option<StrokeStyle>,
}

impl BoxStyle {
    /// Create a box with only fill color.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    /// Create a box with only stroke.
    #[must_use]
    pub const fn stroke(style: StrokeStyle) -> Self {
        Self {
            fill: None,
            stroke: Some(style),
        }
    }
}

/// A single draw operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Rectangle (filled and/or stroked, optionally rounded)
    Rect {
        /// Bounds of the rectangle
        bounds: Rect,
        /// Corner radii
        radius: CornerRadius,
        /// Fill/stroke style
        style: BoxStyle,
    },
    /// Text run
    Text {
        /// Text content
        content: String,
        /// Baseline-left position
        position: Point,
        /// Text style
        style: TextStyle,
    },
    /// Polyline or polygon
    Path {
        /// Vertices
        points: Vec<Point>,
        /// Whether the path is closed (polygon)
        closed: bool,
        /// Stroke style; width 0 means fill
        style: StrokeStyle,
    },
    /// Circle (filled and/or stroked)
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Fill/stroke style
        style: BoxStyle,
    },
}
