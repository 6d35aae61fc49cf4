// File: crates/graph-core/src/transform.rs
// Summary: Graph-unit <-> pixel conversions plus the grid region and origin every layer shares.

use crate::error::{ChartError, Result};
use crate::geometry::{Orientation, PointF64, RectF64};

/// Maps graph units to pixels.
///
/// Conversions are purely multiplicative: they never add the grid region's
/// position or the origin. Use [`CoordinateTransform::to_absolute`] when a
/// point has to land on the target image.
///
/// Graph Y grows upward while pixel Y grows downward, so the vertical
/// conversion flips sign. Both scale factors are kept strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateTransform {
    /// Pixel rectangle holding the grid, axes, and data.
    pub grid_region: RectF64,
    /// Pixel offset of graph (0, 0) from the grid region's top-left corner.
    pub origin: PointF64,
    pixels_per_unit_horizontal: f64,
    pixels_per_unit_vertical: f64,
}

impl Default for CoordinateTransform {
    fn default() -> Self {
        Self {
            grid_region: RectF64::default(),
            origin: PointF64::default(),
            pixels_per_unit_horizontal: 1.0,
            pixels_per_unit_vertical: 1.0,
        }
    }
}

impl CoordinateTransform {
    pub fn new(grid_region: RectF64, origin: PointF64, horizontal: f64, vertical: f64) -> Result<Self> {
        let mut t = Self { grid_region, origin, ..Self::default() };
        t.set_scale(horizontal, vertical)?;
        Ok(t)
    }

    /// Replace both scale factors; rejects zero, negative, and non-finite values.
    pub fn set_scale(&mut self, horizontal: f64, vertical: f64) -> Result<()> {
        let valid = |s: f64| s.is_finite() && s > 0.0;
        if !valid(horizontal) || !valid(vertical) {
            return Err(ChartError::InvalidScale { horizontal, vertical });
        }
        self.pixels_per_unit_horizontal = horizontal;
        self.pixels_per_unit_vertical = vertical;
        Ok(())
    }

    pub fn pixels_per_unit_horizontal(&self) -> f64 { self.pixels_per_unit_horizontal }
    pub fn pixels_per_unit_vertical(&self) -> f64 { self.pixels_per_unit_vertical }

    #[inline]
    pub fn to_pixels_horizontal(&self, units: f64) -> f64 {
        units * self.pixels_per_unit_horizontal
    }
    #[inline]
    pub fn to_pixels_vertical(&self, units: f64) -> f64 {
        -units * self.pixels_per_unit_vertical
    }
    #[inline]
    pub fn to_units_horizontal(&self, pixels: f64) -> f64 {
        pixels / self.pixels_per_unit_horizontal
    }
    #[inline]
    pub fn to_units_vertical(&self, pixels: f64) -> f64 {
        -pixels / self.pixels_per_unit_vertical
    }

    pub fn to_pixels(&self, units: PointF64) -> PointF64 {
        PointF64::new(self.to_pixels_horizontal(units.x), self.to_pixels_vertical(units.y))
    }

    pub fn to_units(&self, pixels: PointF64) -> PointF64 {
        PointF64::new(self.to_units_horizontal(pixels.x), self.to_units_vertical(pixels.y))
    }

    pub fn to_pixels_along(&self, orientation: Orientation, units: f64) -> f64 {
        match orientation {
            Orientation::Horizontal => self.to_pixels_horizontal(units),
            Orientation::Vertical => self.to_pixels_vertical(units),
        }
    }

    /// Absolute pixel position of graph (0, 0) on the target.
    pub fn origin_absolute(&self) -> PointF64 {
        let p = self.grid_region.position();
        PointF64::new(p.x + self.origin.x, p.y + self.origin.y)
    }

    /// Absolute pixel position of a graph-unit point on the target.
    pub fn to_absolute(&self, units: PointF64) -> PointF64 {
        let px = self.to_pixels(units);
        let o = self.origin_absolute();
        PointF64::new(o.x + px.x, o.y + px.y)
    }
}
