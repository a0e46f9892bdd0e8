//! Color multiplier types

/// RGBA color multiplier applied uniformly to all glyphs of a label
///
/// Components are in the `0.0..=1.0` range with straight (non-premultiplied)
/// alpha. Renderers consume the premultiplied form, see
/// [`ColorScale::to_premultiplied`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorScale {
    /// Red multiplier
    pub r: f32,
    /// Green multiplier
    pub g: f32,
    /// Blue multiplier
    pub b: f32,
    /// Alpha multiplier
    pub a: f32,
}

impl ColorScale {
    /// Identity multiplier (opaque white)
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Create a color scale from straight-alpha components
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to the renderer-native premultiplied-alpha form
    pub fn to_premultiplied(self) -> [f32; 4] {
        [self.r * self.a, self.g * self.a, self.b * self.a, self.a]
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::WHITE
    }
}
