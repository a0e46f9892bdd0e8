//! Font metrics collaborator
//!
//! The layout engine never touches glyph bitmaps; it only needs pixel
//! measurements. This module defines the [`FontMetrics`] seam the engine
//! reads through, plus [`FontCache`], a production implementation backed by
//! the `fontdue` library that interns font faces behind copyable handles.

use std::cell::RefCell;

use fontdue::{Font, FontSettings};

/// Result type for font operations
pub type FontResult<T> = Result<T, FontError>;

/// Errors that can occur during font operations
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// Failed to parse font data
    #[error("Failed to load font: {0}")]
    LoadError(String),
}

/// Opaque handle to an interned font face
///
/// Handles are minted by the metrics provider (see [`FontCache::intern`])
/// and stay valid for the provider's lifetime. Passing a handle to a
/// provider that did not mint it is a caller contract violation and panics
/// at the provider boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(u16);

impl FontId {
    /// Create a handle from its raw index
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Raw index of this handle
    pub const fn raw(self) -> u16 {
        self.0
    }
}

/// Read-only metric queries the layout engine needs from a font face
pub trait FontMetrics {
    /// Pixel bounding box of `text`, which may contain `\n` separators
    fn measure(&self, font: FontId, text: &str) -> (f32, f32);

    /// Distance from the baseline to the top of capital letters
    fn cap_height(&self, font: FontId) -> f32;

    /// Vertical advance between the baselines of consecutive lines
    fn line_height(&self, font: FontId) -> f32;
}

/// Per-face data kept by the cache
struct FontInfo {
    font: Font,
    px: f32,
    cap_height: f32,
    line_height: f32,
}

/// Shared font cache backed by `fontdue`
///
/// The cache is owned by the scene and shared read-mostly by many labels,
/// so interning uses interior mutability rather than `&mut self`.
#[derive(Default)]
pub struct FontCache {
    fonts: RefCell<Vec<FontInfo>>,
}

impl FontCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse TrueType/OpenType font bytes and intern the face at `px` size
    pub fn load(&self, font_data: &[u8], px: f32) -> FontResult<FontId> {
        let font = Font::from_bytes(font_data, FontSettings::default())
            .map_err(|e| FontError::LoadError(format!("fontdue error: {e}")))?;
        Ok(self.intern(font, px))
    }

    /// Intern an already-parsed face at `px` size and return its handle
    pub fn intern(&self, font: Font, px: f32) -> FontId {
        let line_height = font
            .horizontal_line_metrics(px)
            .map_or(px, |m| m.new_line_size);
        // The capital-H glyph height stands in for the face's cap height.
        let cap_height = font.metrics('H', px).height as f32;

        let mut fonts = self.fonts.borrow_mut();
        let id = FontId(fonts.len() as u16);
        fonts.push(FontInfo {
            font,
            px,
            cap_height,
            line_height,
        });

        log::info!("Interned font {} at {}px", id.raw(), px);
        id
    }

    /// Number of interned faces
    pub fn len(&self) -> usize {
        self.fonts.borrow().len()
    }

    /// Whether the cache holds no faces
    pub fn is_empty(&self) -> bool {
        self.fonts.borrow().is_empty()
    }
}

impl FontMetrics for FontCache {
    fn measure(&self, font: FontId, text: &str) -> (f32, f32) {
        let fonts = self.fonts.borrow();
        let info = &fonts[font.raw() as usize];

        // Tight pixel bounds: union of glyph boxes, with line baselines
        // spaced by the face's line height. Screen space is y-down.
        let mut min_x = 0.0f32;
        let mut min_y = 0.0f32;
        let mut max_x = 0.0f32;
        let mut max_y = 0.0f32;
        let mut any = false;

        let mut baseline = 0.0f32;
        for line in text.split('\n') {
            let mut cursor = 0.0f32;
            for ch in line.chars() {
                let m = info.font.metrics(ch, info.px);
                let x0 = cursor + m.xmin as f32;
                let x1 = x0 + m.width as f32;
                let y0 = baseline - (m.ymin as f32 + m.height as f32);
                let y1 = baseline - m.ymin as f32;

                if any {
                    min_x = min_x.min(x0);
                    min_y = min_y.min(y0);
                    max_x = max_x.max(x1);
                    max_y = max_y.max(y1);
                } else {
                    (min_x, min_y, max_x, max_y) = (x0, y0, x1, y1);
                    any = true;
                }

                cursor += m.advance_width;
            }
            baseline += info.line_height;
        }

        if any {
            (max_x - min_x, max_y - min_y)
        } else {
            (0.0, 0.0)
        }
    }

    fn cap_height(&self, font: FontId) -> f32 {
        self.fonts.borrow()[font.raw() as usize].cap_height
    }

    fn line_height(&self, font: FontId) -> f32 {
        self.fonts.borrow()[font.raw() as usize].line_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_id_round_trip() {
        let id = FontId::new(7);
        assert_eq!(id.raw(), 7);
    }

    #[test]
    fn test_load_rejects_garbage_bytes() {
        let cache = FontCache::new();
        let result = cache.load(&[0xde, 0xad, 0xbe, 0xef], 16.0);

        assert!(matches!(result, Err(FontError::LoadError(_))));
        assert!(cache.is_empty());
    }
}
