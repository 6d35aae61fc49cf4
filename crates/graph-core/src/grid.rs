// File: crates/graph-core/src/grid.rs
// Summary: Background grid layer; rule lines at fixed unit intervals anchored at the origin.

use skia_safe as skia;
use tracing::trace;

use crate::error::Result;
use crate::geometry::Orientation;
use crate::layer::GraphLayer;
use crate::surface::DrawingSurface;
use crate::transform::CoordinateTransform;
use crate::types::{Pen, RenderOptions};

/// Rule lines across the grid region.
///
/// "Horizontal" settings describe lines stepped along the horizontal axis
/// (vertical strokes); "vertical" settings describe lines stepped along the
/// vertical axis (horizontal strokes).
#[derive(Clone, Debug)]
pub struct Grid {
    /// Distance in graph units between lines stepped along X. `None` disables them.
    pub line_distance_horizontal: Option<f64>,
    /// Distance in graph units between lines stepped along Y. `None` disables them.
    pub line_distance_vertical: Option<f64>,
    /// Every Nth line from the origin along X uses the major pen; 0 disables.
    pub major_interval_horizontal: usize,
    /// Every Nth line from the origin along Y uses the major pen; 0 disables.
    pub major_interval_vertical: usize,
    pub horizontal_pen: Pen,
    pub major_horizontal_pen: Pen,
    pub vertical_pen: Pen,
    pub major_vertical_pen: Pen,
}

impl Default for Grid {
    fn default() -> Self {
        let gray = skia::Color::from_argb(255, 128, 128, 128);
        Self {
            line_distance_horizontal: Some(1.0),
            line_distance_vertical: Some(1.0),
            major_interval_horizontal: 5,
            major_interval_vertical: 5,
            horizontal_pen: Pen::solid(gray, 1.0),
            major_horizontal_pen: Pen::solid(gray, 2.0),
            vertical_pen: Pen::solid(gray, 1.0),
            major_vertical_pen: Pen::solid(gray, 2.0),
        }
    }
}

impl Grid {
    pub fn line_distance(&self, orientation: Orientation) -> Option<f64> {
        match orientation {
            Orientation::Horizontal => self.line_distance_horizontal,
            Orientation::Vertical => self.line_distance_vertical,
        }
    }

    fn pens(&self, orientation: Orientation) -> (&Pen, &Pen, usize) {
        match orientation {
            Orientation::Horizontal => {
                (&self.horizontal_pen, &self.major_horizontal_pen, self.major_interval_horizontal)
            }
            Orientation::Vertical => {
                (&self.vertical_pen, &self.major_vertical_pen, self.major_interval_vertical)
            }
        }
    }

    fn render_along(
        &self,
        orientation: Orientation,
        transform: &CoordinateTransform,
        surface: &mut dyn DrawingSurface,
        opts: &RenderOptions,
    ) -> Result<()> {
        let Some(distance) = self.line_distance(orientation) else { return Ok(()) };
        let interval = transform.to_pixels_along(orientation, distance).abs();
        if !interval.is_finite() || interval <= 0.0 {
            return Ok(());
        }

        let region = transform.grid_region;
        let (near, far) = region.span(orientation);
        let origin = transform.origin_absolute();
        let start = match orientation {
            Orientation::Horizontal => origin.x,
            Orientation::Vertical => origin.y,
        };
        let (minor, major, major_every) = self.pens(orientation);

        let mut draw = |pos: f64, index: usize| -> Result<()> {
            let pen = if is_major(index, major_every) { major } else { minor };
            let (a, b) = match orientation {
                Orientation::Horizontal => ((pos, region.top), (pos, region.bottom)),
                Orientation::Vertical => ((region.left, pos), (region.right, pos)),
            };
            let line = [
                skia::Point::new(a.0 as f32, a.1 as f32),
                skia::Point::new(b.0 as f32, b.1 as f32),
            ];
            surface.draw_polyline(pen, &line, opts)
        };

        // Two passes outward from the origin so lines always land on it.
        let mut drawn = 0usize;
        let mut index = 0usize;
        loop {
            let pos = start + index as f64 * interval;
            if pos > far {
                break;
            }
            if pos >= near {
                draw(pos, index)?;
                drawn += 1;
            }
            index += 1;
        }
        let mut index = 1usize;
        loop {
            let pos = start - index as f64 * interval;
            if pos < near {
                break;
            }
            if pos <= far {
                draw(pos, index)?;
                drawn += 1;
            }
            index += 1;
        }
        trace!(?orientation, interval, drawn, "grid lines");
        Ok(())
    }
}

/// Whether the line `index` steps from the origin uses the major pen.
pub fn is_major(index: usize, major_every: usize) -> bool {
    major_every > 0 && index % major_every == 0
}

impl GraphLayer for Grid {
    fn id(&self) -> &'static str { "grid" }

    fn render(
        &self,
        transform: &CoordinateTransform,
        surface: &mut dyn DrawingSurface,
        opts: &RenderOptions,
    ) -> Result<()> {
        self.render_along(Orientation::Vertical, transform, surface, opts)?;
        self.render_along(Orientation::Horizontal, transform, surface, opts)
    }
}
