//! # Label Engine
//!
//! A 2D text-label layout engine for scene graphs and game UIs.
//!
//! ## Features
//!
//! - **Growth Policies**: Per-axis container growth (right/left/both,
//!   down/up/both) in both auto-sized and fixed-size modes
//! - **Alignment**: Horizontal left/center/right and vertical
//!   top/center/bottom placement of multi-line text
//! - **Packed State**: Alignment, growth, visibility, and disposal flags
//!   stored in a single `u16` per label
//! - **Narrow Collaborator Seams**: Font metrics and the line-draw primitive
//!   are traits; a `fontdue`-backed metrics provider is included
//!
//! ## Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//! use label_engine::prelude::*;
//!
//! // Fixed-advance metrics; any `FontMetrics` implementation works here,
//! // including the bundled fontdue-backed `FontCache`.
//! struct Mono;
//!
//! impl FontMetrics for Mono {
//!     fn measure(&self, _font: FontId, text: &str) -> (f32, f32) {
//!         let widest = text.split('\n').map(str::len).max().unwrap_or(0);
//!         let lines = text.split('\n').count();
//!         (widest as f32 * 8.0, 10.0 + (lines as f32 - 1.0) * 16.0)
//!     }
//!     fn cap_height(&self, _font: FontId) -> f32 { 10.0 }
//!     fn line_height(&self, _font: FontId) -> f32 { 16.0 }
//! }
//!
//! let metrics: Rc<dyn FontMetrics> = Rc::new(Mono);
//! let mut label = Label::new(metrics, FontId::new(0));
//! label.set_text("score: 1250");
//! label.set_grow_horizontal(GrowHorizontal::Both);
//!
//! let rect = label.bounds_rect();
//! assert_eq!(rect.width(), 11.0 * 8.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]

pub mod font;
pub mod foundation;
pub mod label;
pub mod render;

pub use font::{FontCache, FontError, FontId, FontMetrics, FontResult};
pub use label::{AlignHorizontal, AlignVertical, GrowHorizontal, GrowVertical, Label};
pub use render::{ColorScale, TextTarget};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        font::{FontCache, FontError, FontId, FontMetrics, FontResult},
        foundation::math::{Anchor, Rect, Vec2},
        label::{AlignHorizontal, AlignVertical, GrowHorizontal, GrowVertical, Label},
        render::{ColorScale, TextTarget},
    };
}
