//! Label layout demo
//!
//! Lays out a handful of labels and prints the draw calls a frame would
//! issue. Runs with built-in fixed metrics by default; pass a TTF path to
//! measure with a real font through the fontdue-backed cache:
//!
//! ```text
//! cargo run -p label_demo [path/to/font.ttf]
//! ```

use std::error::Error;
use std::rc::Rc;

use label_engine::prelude::*;

/// Fixed-advance metrics so the demo needs no font file
struct TerminalMetrics;

impl FontMetrics for TerminalMetrics {
    fn measure(&self, _font: FontId, text: &str) -> (f32, f32) {
        if text.is_empty() {
            return (0.0, 0.0);
        }
        let widest = text.split('\n').map(str::len).max().unwrap_or(0);
        let lines = text.split('\n').count();
        (widest as f32 * 8.0, 11.0 + (lines as f32 - 1.0) * 18.0)
    }

    fn cap_height(&self, _font: FontId) -> f32 {
        11.0
    }

    fn line_height(&self, _font: FontId) -> f32 {
        18.0
    }
}

/// Draw target that prints each primitive instead of painting it
#[derive(Default)]
struct ConsoleTarget {
    calls: usize,
}

impl TextTarget for ConsoleTarget {
    fn draw_text(&mut self, text: &str, _font: FontId, pos: Vec2, color: [f32; 4]) {
        self.calls += 1;
        println!(
            "  draw {:>3}: ({:>6.1}, {:>6.1}) alpha {:.2} {:?}",
            self.calls, pos.x, pos.y, color[3], text
        );
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let (metrics, font): (Rc<dyn FontMetrics>, FontId) = match std::env::args().nth(1) {
        Some(path) => {
            let cache = Rc::new(FontCache::new());
            let data = std::fs::read(&path)?;
            let font = cache.load(&data, 24.0)?;
            log::info!("Measuring with {path}");
            let metrics: Rc<dyn FontMetrics> = cache;
            (metrics, font)
        }
        None => (Rc::new(TerminalMetrics), FontId::new(0)),
    };

    let mut target = ConsoleTarget::default();

    let mut title = Label::new(Rc::clone(&metrics), font);
    title.anchor = Anchor::fixed(Vec2::new(320.0, 24.0));
    title.set_grow_horizontal(GrowHorizontal::Both);
    title.set_align_horizontal(AlignHorizontal::Center);
    title.set_text("LABEL ENGINE\ndemo scene");

    let mut score = Label::new(Rc::clone(&metrics), font);
    score.anchor = Anchor::fixed(Vec2::new(620.0, 8.0));
    score.set_grow_horizontal(GrowHorizontal::Left);
    score.set_align_horizontal(AlignHorizontal::Right);
    score.set_text("score: 1250");

    let mut status = Label::new(Rc::clone(&metrics), font);
    status.anchor = Anchor::fixed(Vec2::new(16.0, 440.0));
    status.set_size(200, 32);
    status.set_align_vertical(AlignVertical::Center);
    status.set_color_scale(ColorScale::new(0.6, 1.0, 0.6, 0.9));
    status.set_text("shields online");

    for (name, label) in [("title", &title), ("score", &score), ("status", &status)] {
        let rect = label.bounds_rect();
        println!(
            "{name}: container ({:.1}, {:.1})..({:.1}, {:.1})",
            rect.min.x, rect.min.y, rect.max.x, rect.max.y
        );
        label.draw(&mut target);
    }

    Ok(())
}
