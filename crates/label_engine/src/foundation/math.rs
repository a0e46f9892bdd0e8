//! Math utilities and types
//!
//! Provides the pixel-space geometry types the layout engine works in.

use std::cell::Cell;
use std::rc::Rc;

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Axis-aligned rectangle in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Rect {
    /// Create a rectangle from its corners
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Calculate width of the rectangle
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Calculate height of the rectangle
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// Anchor position source for a label
///
/// An anchor is resolved once per layout pass into an absolute pixel
/// coordinate. It either stands alone (`offset` only) or follows a shared
/// base point owned by the scene, plus a fixed offset from it. Following a
/// base point lets many labels track one moving object without per-frame
/// position writes.
#[derive(Debug, Clone, Default)]
pub struct Anchor {
    base: Option<Rc<Cell<Vec2>>>,
    /// Offset from the base point (or the absolute position when unbased)
    pub offset: Vec2,
}

impl Anchor {
    /// Create an anchor at a fixed pixel position
    pub const fn fixed(pos: Vec2) -> Self {
        Self {
            base: None,
            offset: pos,
        }
    }

    /// Create an anchor that follows a shared base point
    pub fn with_base(base: Rc<Cell<Vec2>>) -> Self {
        Self {
            base: Some(base),
            offset: Vec2::zeros(),
        }
    }

    /// Create an anchor that follows a shared base point at a fixed offset
    pub fn with_base_offset(base: Rc<Cell<Vec2>>, offset: Vec2) -> Self {
        Self {
            base: Some(base),
            offset,
        }
    }

    /// Resolve the anchor into an absolute pixel position
    pub fn resolve(&self) -> Vec2 {
        match &self.base {
            Some(base) => base.get() + self.offset,
            None => self.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_dimensions() {
        let rect = Rect::new(Vec2::new(10.0, 20.0), Vec2::new(110.0, 70.0));

        assert_eq!(rect.width(), 100.0);
        assert_eq!(rect.height(), 50.0);
    }

    #[test]
    fn test_fixed_anchor_resolves_to_offset() {
        let anchor = Anchor::fixed(Vec2::new(32.0, 48.0));
        assert_eq!(anchor.resolve(), Vec2::new(32.0, 48.0));
    }

    #[test]
    fn test_based_anchor_follows_base() {
        let base = Rc::new(Cell::new(Vec2::new(100.0, 100.0)));
        let anchor = Anchor::with_base_offset(Rc::clone(&base), Vec2::new(4.0, -4.0));

        assert_eq!(anchor.resolve(), Vec2::new(104.0, 96.0));

        base.set(Vec2::new(10.0, 20.0));
        assert_eq!(anchor.resolve(), Vec2::new(14.0, 16.0));
    }
}
