//! Rendering collaborator seams
//!
//! Color multipliers and the line-draw primitive the layout engine emits to.

pub mod color;
pub mod target;

pub use color::*;
pub use target::*;
