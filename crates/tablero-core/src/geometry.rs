//! Geometric primitives: Point, Size, Rect, `CornerRadius`.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D point with x and y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Calculate area.
    #[must_use]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Check if this size can contain another size.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.width >= other.width && self.height >= other.height
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from size at origin.
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Get the origin (top-left) point.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Get the size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if a point is inside the rectangle (inclusive).
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Check if this rectangle intersects another.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// Create a new rectangle inset by the given amount on all sides.
    #[must_use]
    pub fn inset(&self, amount: f32) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            self.width - amount * 2.0,
            self.height - amount * 2.0,
        )
    }
}

/// Per-corner radii for rounded rectangles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CornerRadius {
    /// Top-left radius
    pub top_left: f32,
    /// Top-right radius
    pub top_right: f32,
    /// Bottom-right radius
    pub bottom_right: f32,
    /// Bottom-left radius
    pub bottom_left: f32,
}

impl CornerRadius {
    /// All corners square.
    pub const ZERO: Self = Self {
        top_left: 0.0,
        top_right: 0.0,
        bottom_right: 0.0,
        bottom_left: 0.0,
    };

    /// Create radii for each corner.
    #[must_use]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Same radius on every corner.
    #[must_use]
    pub const fn uniform(radius: f32) -> Self {
        Self::new(radius, radius, radius, radius)
    }

    /// Check if all corners share one radius.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.top_left == self.top_right
            && self.top_right == self.bottom_right
            && self.bottom_right == self.bottom_left
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_point_new() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(p.x, 10.0);
        assert_eq!(p.y, 20.0);
    }

    #[test]
    fn test_point_origin_default() {
        assert_eq!(Point::default(), Point::ORIGIN);
    }

    #[test]
    fn test_point_add_sub() {
        let p = Point::new(1.0, 2.0) + Point::new(3.0, 4.0);
        assert_eq!(p, Point::new(4.0, 6.0));
        let q = p - Point::new(1.0, 2.0);
        assert_eq!(q, Point::new(3.0, 4.0));
    }

    #[test]
    fn test_size_area() {
        assert_eq!(Size::new(10.0, 20.0).area(), 200.0);
        assert_eq!(Size::ZERO.area(), 0.0);
    }

    #[test]
    fn test_size_contains() {
        let s = Size::new(100.0, 100.0);
        assert!(s.contains(&Size::new(50.0, 50.0)));
        assert!(!s.contains(&Size::new(150.0, 50.0)));
    }

    #[test]
    fn test_rect_origin_and_size() {
        let r = Rect::new(10.0, 20.0, 100.0, 200.0);
        assert_eq!(r.origin(), Point::new(10.0, 20.0));
        assert_eq!(r.size(), Size::new(100.0, 200.0));
    }

    #[test]
    fn test_rect_from_size() {
        let r = Rect::from_size(Size::new(30.0, 40.0));
        assert_eq!(r, Rect::new(0.0, 0.0, 30.0, 40.0));
    }

    #[test]
    fn test_rect_center() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(r.center(), Point::new(50.0, 25.0));
    }

    #[test]
    fn test_rect_contains_point() {
        let r = Rect::new(10.0, 10.0, 100.0, 100.0);
        assert!(r.contains_point(&Point::new(50.0, 50.0)));
        assert!(r.contains_point(&Point::new(10.0, 10.0))); // Edge inclusive
        assert!(!r.contains_point(&Point::new(5.0, 50.0)));
        assert!(!r.contains_point(&Point::new(111.0, 50.0)));
    }

    #[test]
    fn test_rect_intersects() {
        let r1 = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(r1.intersects(&Rect::new(50.0, 50.0, 100.0, 100.0)));
        assert!(!r1.intersects(&Rect::new(200.0, 200.0, 100.0, 100.0)));
    }

    #[test]
    fn test_rect_inset() {
        let inset = Rect::new(10.0, 10.0, 100.0, 100.0).inset(5.0);
        assert_eq!(inset, Rect::new(15.0, 15.0, 90.0, 90.0));
    }

    #[test]
    fn test_corner_radius() {
        let uniform = CornerRadius::uniform(8.0);
        assert!(uniform.is_uniform());
        assert_eq!(uniform.top_left, 8.0);

        let custom = CornerRadius::new(1.0, 2.0, 3.0, 4.0);
        assert!(!custom.is_uniform());
        assert_eq!(custom.bottom_left, 4.0);
    }

    proptest! {
        #[test]
        fn prop_rect_contains_center(x in -1000.0f32..1000.0, y in -1000.0f32..1000.0, w in 1.0f32..1000.0, h in 1.0f32..1000.0) {
            let r = Rect::new(x, y, w, h);
            prop_assert!(r.contains_point(&r.center()));
        }

        #[test]
        fn prop_rect_intersects_self(x in -1000.0f32..1000.0, y in -1000.0f32..1000.0, w in 0.1f32..1000.0, h in 0.1f32..1000.0) {
            let r = Rect::new(x, y, w, h);
            prop_assert!(r.intersects(&r));
        }

        #[test]
        fn prop_size_area_non_negative(w in 0.0f32..1000.0, h in 0.0f32..1000.0) {
            prop_assert!(Size::new(w, h).area() >= 0.0);
        }
    }
}
