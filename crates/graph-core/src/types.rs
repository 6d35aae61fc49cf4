// File: crates/graph-core/src/types.rs
// Summary: Shared types and constants (sizes, render options, pens).

use skia_safe as skia;

/// Default surface width in pixels.
pub const WIDTH: i32 = 700;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 700;

/// Options threaded through every drawing call of a render pass.
///
/// `anti_alias` applies to all primitives. `width`, `height` and `background`
/// are only read by the raster output helpers on [`crate::Graph`], which
/// allocate and clear a fresh target before drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub background: skia::Color,
    pub anti_alias: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            background: skia::Color::WHITE,
            anti_alias: true,
        }
    }
}

/// Stroke style for lines: color, width in pixels, and an optional dash pattern.
#[derive(Clone, Debug, PartialEq)]
pub struct Pen {
    pub color: skia::Color,
    pub width: f32,
    /// Alternating on/off lengths in pixels. `None` draws a solid stroke.
    pub dash: Option<Vec<f32>>,
}

impl Pen {
    pub fn solid(color: skia::Color, width: f32) -> Self {
        Self { color, width, dash: None }
    }

    /// One pixel on, one pixel off.
    pub fn dotted(color: skia::Color, width: f32) -> Self {
        Self { color, width, dash: Some(vec![1.0, 1.0]) }
    }

    /// Two pixels on, one pixel off.
    pub fn dashed(color: skia::Color, width: f32) -> Self {
        Self { color, width, dash: Some(vec![2.0, 1.0]) }
    }

    pub(crate) fn to_paint(&self, opts: &RenderOptions) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(opts.anti_alias);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(self.width);
        paint.set_color(self.color);
        if let Some(intervals) = self.dash.as_deref() {
            if let Some(effect) = skia::PathEffect::dash(intervals, 0.0) {
                paint.set_path_effect(effect);
            }
        }
        paint
    }
}

pub(crate) fn fill_paint(color: skia::Color, opts: &RenderOptions) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(opts.anti_alias);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}
