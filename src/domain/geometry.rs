//! Geometric types for text regions and press coordinates

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in view pixels
///
/// Edges are half-open: `left` and `top` are inside, `right` and `bottom`
/// are not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Create a new rectangle from coordinates
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Get the width of the rectangle (negative when inverted)
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Get the height of the rectangle (negative when inverted)
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// True for zero-area and inverted rectangles
    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Check if this rectangle contains a point
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Check if this rectangle contains a [`Point`]
    pub fn contains(&self, point: Point) -> bool {
        self.contains_point(point.x, point.y)
    }
}

/// Integer pixel position inside the view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Truncate float coordinates toward zero, the way input events are
    /// mapped onto the pixel grid
    pub fn from_f32(x: f32, y: f32) -> Self {
        Self {
            x: x as i32,
            y: y as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point_is_half_open() {
        let rect = Rect::new(0, 0, 50, 20);
        assert!(rect.contains_point(0, 0));
        assert!(rect.contains_point(49, 19));
        assert!(!rect.contains_point(50, 10));
        assert!(!rect.contains_point(10, 20));
        assert!(!rect.contains_point(-1, 5));
    }

    #[test]
    fn test_degenerate_rect_never_contains() {
        let inverted = Rect::new(50, 20, 0, 0);
        let flat = Rect::new(10, 10, 10, 30);
        assert!(inverted.is_empty());
        assert!(flat.is_empty());
        for (x, y) in [(0, 0), (10, 10), (25, 10), (49, 19)] {
            assert!(!inverted.contains_point(x, y));
            assert!(!flat.contains_point(x, y));
        }
    }

    #[test]
    fn test_point_from_f32_truncates() {
        assert_eq!(Point::from_f32(10.9, 19.99), Point::new(10, 19));
        assert_eq!(Point::from_f32(-0.5, 0.5), Point::new(0, 0));
    }

    #[test]
    fn test_rect_deserializes_from_json() {
        let rect: Rect =
            serde_json::from_str(r#"{"left":1,"top":2,"right":30,"bottom":40}"#).unwrap();
        assert_eq!(rect, Rect::new(1, 2, 30, 40));
        assert_eq!(rect.width(), 29);
        assert_eq!(rect.height(), 38);
    }
}
