//! Drawing capabilities the overlay needs from its host
//!
//! The composition code only talks to these traits, so it can run against
//! a real pixmap, a platform canvas, or a recorder in tests.

use crate::config::OverlayColor;
use crate::domain::Rect;

/// Float rectangle in surface coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// True for zero-area, inverted and non-finite rectangles
    pub fn is_empty(&self) -> bool {
        !(self.left < self.right && self.top < self.bottom)
    }
}

impl From<Rect> for RectF {
    fn from(r: Rect) -> Self {
        Self::new(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
    }
}

/// Primitive drawing operations
///
/// Implementations should treat empty rectangles as no-ops.
pub trait Surface {
    /// Stroke the outline of a rectangle
    fn stroke_rect(&mut self, rect: RectF, color: OverlayColor, stroke_width: f32);

    /// Fill a rectangle
    fn fill_rect(&mut self, rect: RectF, color: OverlayColor);

    /// Fill a rectangle with rounded corners
    fn fill_round_rect(&mut self, rect: RectF, radius: f32, color: OverlayColor);

    /// Offset all following drawing by `(dx, dy)` until the matching pop
    fn push_translation(&mut self, dx: f32, dy: f32);

    fn pop_translation(&mut self);
}

/// A laid out, wrapped block of text
pub trait TextBlock {
    /// Layout width, which is the wrap width the block was built for
    fn width(&self) -> f32;

    fn height(&self) -> f32;

    /// Draw the block with its top-left corner at the surface origin
    fn draw(&self, surface: &mut dyn Surface);
}

/// Measures and wraps text into a [`TextBlock`]
pub trait TextLayouter {
    type Block: TextBlock;

    fn layout(&self, text: &str, max_width: f32) -> Self::Block;
}
