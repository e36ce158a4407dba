//! Core types and traits for the Tablero widget library.
//!
//! This crate provides the foundations every Tablero widget builds on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with WCAG contrast calculations
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`], [`Key`], [`MouseButton`]
//! - The [`Widget`] trait and the [`Canvas`] paint surface
//! - [`RecordingCanvas`] for capturing draw commands in tests and hosts

mod brick;
mod canvas;
mod color;
mod constraints;
mod draw;
mod event;
mod geometry;
pub mod widget;

pub use brick::{Brick, BrickAssertion, BrickBudget, BrickVerification};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{BoxStyle, DrawCommand, StrokeStyle};
pub use event::{Event, Key, MouseButton};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use widget::{
    AccessibleRole, Canvas, FontStyle, FontWeight, LayoutResult, TextStyle, TypeId, Widget,
    WidgetId,
};
