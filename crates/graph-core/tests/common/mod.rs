// File: crates/graph-core/tests/common/mod.rs
// Purpose: Recording drawing surface shared by the layer tests.

#![allow(dead_code)]

pub mod reference;

use graph_core::surface::text_box;
use graph_core::{DrawingSurface, Pen, RenderOptions, Result};
use skia_safe as skia;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Polyline { pen: Pen, points: Vec<(f32, f32)> },
    Polygon { color: skia::Color, points: Vec<(f32, f32)> },
    Circle { color: skia::Color, center: (f32, f32), radius: f32 },
    Text { text: String, top_left: (f32, f32) },
    Image { width: i32, height: i32, top_left: (f32, f32) },
}

/// Records every drawing call instead of rasterizing it.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<Call>,
}

fn xy(points: &[skia::Point]) -> Vec<(f32, f32)> {
    points.iter().map(|p| (p.x, p.y)).collect()
}

impl RecordingSurface {
    pub fn polylines(&self) -> Vec<&Call> {
        self.calls.iter().filter(|c| matches!(c, Call::Polyline { .. })).collect()
    }

    pub fn polygons(&self) -> Vec<Vec<(f32, f32)>> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Polygon { points, .. } => Some(points.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> Vec<(f32, f32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Circle { center, .. } => Some(*center),
                _ => None,
            })
            .collect()
    }

    pub fn images(&self) -> Vec<(f32, f32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Image { top_left, .. } => Some(*top_left),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<(String, (f32, f32))> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Text { text, top_left } => Some((text.clone(), *top_left)),
                _ => None,
            })
            .collect()
    }
}

impl DrawingSurface for RecordingSurface {
    fn draw_polyline(&mut self, pen: &Pen, points: &[skia::Point], _opts: &RenderOptions) -> Result<()> {
        self.calls.push(Call::Polyline { pen: pen.clone(), points: xy(points) });
        Ok(())
    }

    fn fill_polygon(&mut self, color: skia::Color, points: &[skia::Point], _opts: &RenderOptions) -> Result<()> {
        self.calls.push(Call::Polygon { color, points: xy(points) });
        Ok(())
    }

    fn fill_circle(&mut self, color: skia::Color, center: skia::Point, radius: f32, _opts: &RenderOptions) -> Result<()> {
        self.calls.push(Call::Circle { color, center: (center.x, center.y), radius });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        _font: &skia::Font,
        _color: skia::Color,
        top_left: skia::Point,
        _opts: &RenderOptions,
    ) -> Result<()> {
        self.calls.push(Call::Text { text: text.to_string(), top_left: (top_left.x, top_left.y) });
        Ok(())
    }

    fn measure_text(&self, text: &str, font: &skia::Font) -> skia::Rect {
        text_box(text, font)
    }

    fn draw_image(&mut self, image: &skia::Image, top_left: skia::Point, _opts: &RenderOptions) -> Result<()> {
        self.calls.push(Call::Image {
            width: image.width(),
            height: image.height(),
            top_left: (top_left.x, top_left.y),
        });
        Ok(())
    }
}
