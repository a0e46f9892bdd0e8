//! Draw target seam

use crate::font::FontId;
use crate::foundation::math::Vec2;

/// Destination surface for text draw primitives
///
/// The layout engine resolves every draw into one or more `draw_text` calls
/// with integral pixel origins. `text` may contain embedded `\n` separators
/// when the label is left-aligned (the fast path hands the whole block to
/// the primitive); implementations must advance by their own line height for
/// those. `color` is a premultiplied-alpha RGBA multiplier.
pub trait TextTarget {
    /// Paint `text` with its top-left visual corner at `pos`
    fn draw_text(&mut self, text: &str, font: FontId, pos: Vec2, color: [f32; 4]);
}
