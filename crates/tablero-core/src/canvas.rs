//! Canvas implementations.

use crate::draw::{BoxStyle, DrawCommand, StrokeStyle};
use crate::widget::{Canvas, TextStyle};
use crate::{Color, CornerRadius, Point, Rect};

/// A Canvas implementation that records draw operations as [`DrawCommand`]s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Forwarding (replay commands against a real backend)
/// - Diffing (compare render outputs)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clip_stack: Vec<Rect>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
    }

    /// Get the current clip bounds (None if no clips pushed).
    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Get the clip stack depth.
    #[must_use]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// All text runs painted so far, in paint order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Check whether some painted text run contains the given needle.
    #[must_use]
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect {
            bounds: rect,
            radius: CornerRadius::ZERO,
            style: BoxStyle::fill(color),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands.push(DrawCommand::Rect {
            bounds: rect,
            radius: CornerRadius::ZERO,
            style: BoxStyle::stroke(StrokeStyle { color, width }),
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.commands.push(DrawCommand::Path {
            points: vec![from, to],
            closed: false,
            style: StrokeStyle { color, width },
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            style: BoxStyle::fill(color),
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        // Width 0 marks a filled polygon for the backend.
        self.commands.push(DrawCommand::Path {
            points: points.to_vec(),
            closed: true,
            style: StrokeStyle { color, width: 0.0 },
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_stack.push(rect);
    }

    fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.command_count(), 0);
    }

    #[test]
    fn test_fill_rect_records_command() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(10.0, 20.0, 100.0, 50.0), Color::WHITE);

        assert_eq!(canvas.command_count(), 1);
        match &canvas.commands()[0] {
            DrawCommand::Rect { bounds, style, .. } => {
                assert_eq!(bounds.x, 10.0);
                assert_eq!(bounds.width, 100.0);
                assert_eq!(style.fill, Some(Color::WHITE));
            }
            other => panic!("Expected Rect command, got {other:?}"),
        }
    }

    #[test]
    fn test_stroke_rect_has_no_fill() {
        let mut canvas = RecordingCanvas::new();
        canvas.stroke_rect(Rect::new(0.0, 0.0, 50.0, 50.0), Color::BLACK, 2.0);

        match &canvas.commands()[0] {
            DrawCommand::Rect { style, .. } => {
                assert!(style.fill.is_none());
                assert_eq!(style.stroke.as_ref().map(|s| s.width), Some(2.0));
            }
            other => panic!("Expected Rect command, got {other:?}"),
        }
    }

    #[test]
    fn test_draw_text_and_texts_helper() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_text("Name", Point::new(0.0, 0.0), &TextStyle::default());
        canvas.draw_text("Age", Point::new(50.0, 0.0), &TextStyle::default());

        assert_eq!(canvas.texts(), vec!["Name", "Age"]);
        assert!(canvas.has_text("Nam"));
        assert!(!canvas.has_text("Email"));
    }

    #[test]
    fn test_draw_line_is_open_path() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_line(Point::ORIGIN, Point::new(10.0, 10.0), Color::BLACK, 1.5);

        match &canvas.commands()[0] {
            DrawCommand::Path {
                points,
                closed,
                style,
            } => {
                assert_eq!(points.len(), 2);
                assert!(!closed);
                assert_eq!(style.width, 1.5);
            }
            other => panic!("Expected Path command, got {other:?}"),
        }
    }

    #[test]
    fn test_fill_polygon_is_closed_path() {
        let mut canvas = RecordingCanvas::new();
        let tri = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 8.0),
        ];
        canvas.fill_polygon(&tri, Color::BLACK);

        match &canvas.commands()[0] {
            DrawCommand::Path {
                points,
                closed,
                style,
            } => {
                assert_eq!(points.len(), 3);
                assert!(closed);
                assert_eq!(style.width, 0.0);
            }
            other => panic!("Expected Path command, got {other:?}"),
        }
    }

    #[test]
    fn test_clip_stack() {
        let mut canvas = RecordingCanvas::new();
        assert!(canvas.current_clip().is_none());

        canvas.push_clip(Rect::new(0.0, 0.0, 100.0, 100.0));
        canvas.push_clip(Rect::new(10.0, 10.0, 50.0, 50.0));
        assert_eq!(canvas.clip_depth(), 2);
        assert_eq!(canvas.current_clip(), Some(Rect::new(10.0, 10.0, 50.0, 50.0)));

        canvas.pop_clip();
        assert_eq!(canvas.current_clip(), Some(Rect::new(0.0, 0.0, 100.0, 100.0)));
        canvas.pop_clip();
        canvas.pop_clip(); // Popping an empty stack is a no-op
        assert_eq!(canvas.clip_depth(), 0);
    }

    #[test]
    fn test_take_commands_clears() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_circle(Point::new(5.0, 5.0), 2.0, Color::BLACK);
        let commands = canvas.take_commands();
        assert_eq!(commands.len(), 1);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        canvas.push_clip(Rect::new(0.0, 0.0, 5.0, 5.0));
        canvas.clear();
        assert!(canvas.is_empty());
        assert_eq!(canvas.clip_depth(), 0);
    }
}
