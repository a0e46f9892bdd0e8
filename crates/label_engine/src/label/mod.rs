//! Text label layout
//!
//! Computes where each line of a label's text lands on screen and the
//! rectangle the label occupies, then emits one draw primitive per placed
//! piece of text. Font measurement and actual painting happen behind the
//! [`FontMetrics`] and [`TextTarget`] seams.

mod flags;

pub use flags::{AlignHorizontal, AlignVertical, GrowHorizontal, GrowVertical};

use std::rc::Rc;

use crate::font::{FontId, FontMetrics};
use crate::foundation::math::{Anchor, Rect, Vec2};
use crate::render::{ColorScale, TextTarget};

use flags::LabelFlags;

/// A text label positioned relative to an anchor
///
/// A label owns its display state (text, color multiplier, alignment and
/// growth policies, explicit size, visibility) and re-derives its layout
/// from that state on every draw. The only cache carried across draws is
/// the measured text bounds, refreshed synchronously whenever the text
/// changes.
///
/// # Layout Coordinate System
///
/// - Screen space is y-down; the anchor resolves to a pixel coordinate
/// - The anchor marks the text's top-left before growth and alignment
///   adjustments move it
/// - Draw origins handed to the target are rounded to whole pixels
pub struct Label {
    color_scale: ColorScale,
    premul_color: [f32; 4],

    text: String,

    /// Anchor position source; resolved once per layout pass
    pub anchor: Anchor,

    metrics: Rc<dyn FontMetrics>,

    flags: LabelFlags,
    font: FontId,
    width: u16,
    height: u16,
    bounds_width: u16,
    bounds_height: u16,
}

impl Label {
    /// Create an empty, visible label bound to one font face for its life
    ///
    /// The metrics provider is the shared collaborator that minted `font`;
    /// it is injected here rather than reached through ambient state.
    pub fn new(metrics: Rc<dyn FontMetrics>, font: FontId) -> Self {
        Self {
            color_scale: ColorScale::WHITE,
            premul_color: ColorScale::WHITE.to_premultiplied(),
            text: String::new(),
            anchor: Anchor::default(),
            metrics,
            flags: LabelFlags::new(),
            font,
            width: 0,
            height: 0,
            bounds_width: 0,
            bounds_height: 0,
        }
    }

    /// Current color multiplier
    pub fn color_scale(&self) -> ColorScale {
        self.color_scale
    }

    /// Assign a new color multiplier
    pub fn set_color_scale(&mut self, cs: ColorScale) {
        if self.color_scale == cs {
            return;
        }
        self.color_scale = cs;
        self.premul_color = cs.to_premultiplied();
    }

    /// Shorthand for the alpha component of the color multiplier
    pub fn alpha(&self) -> f32 {
        self.color_scale.a
    }

    /// Change only the alpha component of the color multiplier
    pub fn set_alpha(&mut self, a: f32) {
        if self.color_scale.a == a {
            return;
        }
        self.color_scale.a = a;
        self.premul_color = self.color_scale.to_premultiplied();
    }

    /// Mark this label as dead for its owning scene
    ///
    /// Disposal is advisory: the label keeps functioning afterwards and the
    /// owner decides when to stop drawing and drop it.
    pub fn dispose(&mut self) {
        self.flags.set_disposed();
    }

    /// Whether [`Label::dispose`] has been called
    pub fn is_disposed(&self) -> bool {
        self.flags.is_disposed()
    }

    /// Explicit container size; `(0, 0)` means auto-size from text bounds
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Set the explicit container size
    ///
    /// `(0, 0)` switches the label to auto-size mode; any other pair fixes
    /// the container on both axes.
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Vertical alignment of the text block
    pub fn align_vertical(&self) -> AlignVertical {
        self.flags.align_vertical()
    }

    /// Set the vertical alignment of the text block
    pub fn set_align_vertical(&mut self, align: AlignVertical) {
        self.flags.set_align_vertical(align);
    }

    /// Horizontal alignment of each text line
    pub fn align_horizontal(&self) -> AlignHorizontal {
        self.flags.align_horizontal()
    }

    /// Set the horizontal alignment of each text line
    pub fn set_align_horizontal(&mut self, align: AlignHorizontal) {
        self.flags.set_align_horizontal(align);
    }

    /// Horizontal growth policy
    pub fn grow_horizontal(&self) -> GrowHorizontal {
        self.flags.grow_horizontal()
    }

    /// Set the horizontal growth policy
    pub fn set_grow_horizontal(&mut self, grow: GrowHorizontal) {
        self.flags.set_grow_horizontal(grow);
    }

    /// Vertical growth policy
    pub fn grow_vertical(&self) -> GrowVertical {
        self.flags.grow_vertical()
    }

    /// Set the vertical growth policy
    pub fn set_grow_vertical(&mut self, grow: GrowVertical) {
        self.flags.set_grow_vertical(grow);
    }

    /// Whether draw calls paint anything
    pub fn is_visible(&self) -> bool {
        self.flags.is_visible()
    }

    /// Show or hide the label
    pub fn set_visibility(&mut self, visible: bool) {
        self.flags.set_visible(visible);
    }

    /// Current text content
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text content
    ///
    /// The text's pixel bounds are re-measured immediately; every later
    /// layout pass works from this cache.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();

        let (w, h) = self.metrics.measure(self.font, &self.text);
        self.bounds_width = w.round() as u16;
        self.bounds_height = h.round() as u16;
    }

    /// Container rectangle at the label's current position, without drawing
    pub fn bounds_rect(&self) -> Rect {
        let mut pos = self.anchor.resolve();
        self.container_rect(&mut pos)
    }

    /// Paint the label onto `target`
    pub fn draw(&self, target: &mut dyn TextTarget) {
        self.draw_with_offset(target, Vec2::zeros());
    }

    /// Paint the label onto `target`, shifting every emitted line by `offset`
    pub fn draw_with_offset(&self, target: &mut dyn TextTarget, offset: Vec2) {
        if !self.is_visible() || self.text.is_empty() {
            return;
        }

        let mut pos = self.anchor.resolve();

        // The dot position (baseline) is not a top-left corner; shift down
        // by the cap height so pos marks the text's visual top.
        pos.y += self.metrics.cap_height(self.font);

        let num_lines = self.text.matches('\n').count() + 1;

        let container = self.container_rect(&mut pos);

        match self.align_vertical() {
            AlignVertical::Top => {}
            AlignVertical::Center => {
                pos.y += (container.height() - self.estimate_height(num_lines)) / 2.0;
            }
            AlignVertical::Bottom => {
                pos.y += container.height() - self.estimate_height(num_lines);
            }
        }

        if self.align_horizontal() == AlignHorizontal::Left {
            // Left alignment needs no per-line measurement; hand the whole
            // block to the primitive, embedded newlines and all.
            let draw_pos = Vec2::new(pos.x.round(), pos.y.round()) + offset;
            target.draw_text(&self.text, self.font, draw_pos, self.premul_color);
            return;
        }

        let mut offset_y = 0.0;
        for line in self.text.split('\n') {
            let (line_width, _) = self.metrics.measure(self.font, line);
            let offset_x = match self.align_horizontal() {
                AlignHorizontal::Center => (container.width() - line_width) / 2.0,
                AlignHorizontal::Right => container.width() - line_width,
                AlignHorizontal::Left => 0.0,
            };
            // Round only after all offset math so error never compounds
            // across lines.
            let draw_pos =
                Vec2::new((pos.x + offset_x).round(), (pos.y + offset_y).round()) + offset;
            target.draw_text(line, self.font, draw_pos, self.premul_color);
            offset_y += self.metrics.line_height(self.font);
        }
    }

    /// Derive the container rectangle and adjust `pos` to the draw anchor
    ///
    /// `pos` comes in as the resolved anchor and leaves as the position
    /// subsequent line-offset math must start from; growth policies that
    /// extend the container's min edge shift it.
    fn container_rect(&self, pos: &mut Vec2) -> Rect {
        let mut rect = Rect::default();

        let bounds_width = f32::from(self.bounds_width);
        let bounds_height = f32::from(self.bounds_height);
        let fixed_width = f32::from(self.width);
        let fixed_height = f32::from(self.height);

        if self.width == 0 && self.height == 0 {
            // Auto-sized container.
            match self.grow_horizontal() {
                GrowHorizontal::Right => {
                    rect.min.x = pos.x;
                    rect.max.x = pos.x + bounds_width;
                }
                GrowHorizontal::Left => {
                    rect.min.x = pos.x - bounds_width;
                    rect.max.x = pos.x;
                    pos.x -= bounds_width;
                }
                GrowHorizontal::Both => {
                    rect.min.x = pos.x - bounds_width / 2.0;
                    rect.max.x = pos.x + bounds_width / 2.0;
                    pos.x -= bounds_width / 2.0;
                }
                GrowHorizontal::None => {
                    log::warn!("GrowHorizontal::None has no extent in auto-size mode, growing right");
                    rect.min.x = pos.x;
                    rect.max.x = pos.x + bounds_width;
                }
            }
            match self.grow_vertical() {
                GrowVertical::Down => {
                    rect.min.y = pos.y;
                    rect.max.y = pos.y + bounds_height;
                }
                GrowVertical::Up => {
                    rect.min.y = pos.y - bounds_height;
                    rect.max.y = pos.y;
                    pos.y -= bounds_height;
                }
                GrowVertical::Both => {
                    rect.min.y = pos.y - bounds_height / 2.0;
                    rect.max.y = pos.y + bounds_height / 2.0;
                    pos.y -= bounds_height / 2.0;
                }
                GrowVertical::None => {
                    log::warn!("GrowVertical::None has no extent in auto-size mode, growing down");
                    rect.min.y = pos.y;
                    rect.max.y = pos.y + bounds_height;
                }
            }
        } else {
            rect = Rect::new(*pos, *pos + Vec2::new(fixed_width, fixed_height));
            let delta = bounds_width - fixed_width;
            if delta > 0.0 {
                match self.grow_horizontal() {
                    GrowHorizontal::Right => {
                        rect.max.x += delta;
                    }
                    GrowHorizontal::Left => {
                        rect.min.x -= delta;
                        pos.x -= delta;
                    }
                    GrowHorizontal::Both => {
                        rect.min.x -= delta / 2.0;
                        rect.max.x += delta / 2.0;
                        pos.x -= delta / 2.0;
                    }
                    GrowHorizontal::None => {
                        // Text overflows the fixed width at draw time.
                    }
                }
            }
            let delta = bounds_height - fixed_height;
            if delta > 0.0 {
                match self.grow_vertical() {
                    GrowVertical::Down => {
                        rect.max.y += delta;
                    }
                    GrowVertical::Up => {
                        rect.min.y -= delta;
                        pos.y -= delta;
                    }
                    GrowVertical::Both => {
                        rect.min.y -= delta / 2.0;
                        rect.max.y += delta / 2.0;
                        pos.y -= delta / 2.0;
                    }
                    GrowVertical::None => {
                        // Text overflows the fixed height at draw time.
                    }
                }
            }
        }

        rect
    }

    /// Estimated pixel height of a block of `num_lines` lines
    ///
    /// The cap height anchors the first line; each further line adds a full
    /// line height.
    fn estimate_height(&self, num_lines: usize) -> f32 {
        let mut estimated = self.metrics.cap_height(self.font);
        if num_lines >= 2 {
            estimated += (num_lines as f32 - 1.0) * self.metrics.line_height(self.font);
        }
        estimated
    }
}
