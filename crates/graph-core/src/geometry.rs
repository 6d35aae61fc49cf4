// File: crates/graph-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use skia_safe as skia;

/// Which way an axis (or the layer bound to it) runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Orientation::Horizontal)
    }

    pub const fn is_vertical(self) -> bool {
        matches!(self, Orientation::Vertical)
    }
}

/// Pixel point in `f64`, converted to Skia's `f32` only at draw time.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PointF64 {
    pub x: f64,
    pub y: f64,
}

impl PointF64 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    pub fn to_skia(self) -> skia::Point {
        skia::Point::new(self.x as f32, self.y as f32)
    }
}

/// Pixel rectangle in `f64`, stored as left/top/right/bottom edges.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RectF64 {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl RectF64 {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { left: x, top: y, right: x + width, bottom: y + height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
    pub fn position(&self) -> PointF64 { PointF64::new(self.left, self.top) }

    /// Strictly inside on both axes; points on an edge are outside.
    pub fn contains_open(&self, p: PointF64) -> bool {
        p.x > self.left && p.x < self.right && p.y > self.top && p.y < self.bottom
    }

    /// Near/far edges along `orientation`.
    pub fn span(&self, orientation: Orientation) -> (f64, f64) {
        match orientation {
            Orientation::Horizontal => (self.left, self.right),
            Orientation::Vertical => (self.top, self.bottom),
        }
    }
}
