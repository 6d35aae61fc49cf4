// File: crates/graph-core/src/labels.rs
// Summary: Numeric tick label layer; walks outward from the origin placing one label image per tick.

use skia_safe as skia;
use tracing::trace;

use crate::error::Result;
use crate::geometry::{Orientation, PointF64};
use crate::grid::Grid;
use crate::layer::GraphLayer;
use crate::surface::{text_box, DrawingSurface, ScratchImage};
use crate::transform::CoordinateTransform;
use crate::types::RenderOptions;

/// Turns a tick coordinate (graph units) into a ready-to-composite image.
///
/// The image's top-left corner lands on the tick, so any offset from the axis
/// has to be baked into the image as transparent padding.
pub type LabelFormatter = Box<dyn Fn(f64, &RenderOptions) -> Result<skia::Image>>;

/// Labels every tick along one axis.
pub struct TickLabels {
    pub orientation: Orientation,
    /// Distance in graph units between adjacent labels.
    pub tick_distance: f64,
    /// Also label coordinate 0.
    pub enable_for_zero: bool,
    pub format: LabelFormatter,
}

impl TickLabels {
    pub fn new(orientation: Orientation, format: LabelFormatter) -> Self {
        Self { orientation, tick_distance: 1.0, enable_for_zero: false, format }
    }

    /// Tick distance taken from the grid's interval along `orientation`, or 1 unit if unset.
    pub fn from_grid(orientation: Orientation, grid: &Grid, format: LabelFormatter) -> Self {
        let mut labels = Self::new(orientation, format);
        labels.tick_distance = grid.line_distance(orientation).unwrap_or(1.0);
        labels
    }

    /// Tick coordinates whose positions fall inside the grid region, walking
    /// away from the origin: the positive pass first, then the negative pass.
    ///
    /// A pass ends once it walks past the region edge it is heading for.
    /// Positions short of the region are skipped, so an origin outside the
    /// region still labels the grid lines that are visible.
    pub fn ticks(&self, transform: &CoordinateTransform) -> Vec<f64> {
        let spacing = self.tick_distance;
        if !spacing.is_finite() || spacing <= 0.0 {
            return Vec::new();
        }
        let (near, far) = transform.grid_region.span(self.orientation);
        let origin = transform.origin_absolute();
        let start = match self.orientation {
            Orientation::Horizontal => origin.x,
            Orientation::Vertical => origin.y,
        };
        let pixel = |value: f64| start + transform.to_pixels_along(self.orientation, value);

        let mut ticks = Vec::new();
        let mut walk = |sign: f64, first: u64| {
            // Pixel direction of this pass; vertical axes grow upward.
            let forward = pixel(sign * spacing) >= start;
            let mut step = first;
            loop {
                let value = sign * step as f64 * spacing;
                let p = pixel(value);
                let (passed, short) = if forward { (p > far, p < near) } else { (p < near, p > far) };
                if passed {
                    break;
                }
                if !short {
                    ticks.push(value);
                }
                step += 1;
            }
        };
        walk(1.0, if self.enable_for_zero { 0 } else { 1 });
        walk(-1.0, 1);
        ticks
    }

    /// Absolute pixel anchor of the label for `value`.
    pub fn anchor(&self, transform: &CoordinateTransform, value: f64) -> PointF64 {
        let origin = transform.origin_absolute();
        let offset = transform.to_pixels_along(self.orientation, value);
        match self.orientation {
            Orientation::Horizontal => PointF64::new(origin.x + offset, origin.y),
            Orientation::Vertical => PointF64::new(origin.x, origin.y + offset),
        }
    }
}

impl std::fmt::Debug for TickLabels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TickLabels")
            .field("orientation", &self.orientation)
            .field("tick_distance", &self.tick_distance)
            .field("enable_for_zero", &self.enable_for_zero)
            .finish_non_exhaustive()
    }
}

impl GraphLayer for TickLabels {
    fn id(&self) -> &'static str {
        match self.orientation {
            Orientation::Horizontal => "horizontal-tick-labels",
            Orientation::Vertical => "vertical-tick-labels",
        }
    }

    fn render(
        &self,
        transform: &CoordinateTransform,
        surface: &mut dyn DrawingSurface,
        opts: &RenderOptions,
    ) -> Result<()> {
        let ticks = self.ticks(transform);
        trace!(orientation = ?self.orientation, count = ticks.len(), "tick labels");
        for value in ticks {
            let image = (self.format)(value, opts)?;
            surface.draw_image(&image, self.anchor(transform, value).to_skia(), opts)?;
        }
        Ok(())
    }
}

/// Look of the stock numeric labels produced by [`text_labels`].
#[derive(Clone, Debug)]
pub struct TextLabelStyle {
    pub font: skia::Font,
    pub color: skia::Color,
    /// Where the text sits inside the label image, relative to the tick.
    ///
    /// Negative components are treated as zero: the image is anchored by its
    /// top-left corner, so text can only be pushed right of or below the tick.
    pub offset: PointF64,
}

/// Tick value as label text: six decimals at most, trailing zeros dropped, no `-0`.
pub fn format_tick(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded}")
}

/// Formatter drawing [`format_tick`] text into a transparent image, padded
/// by the style's (non-negative) offset.
pub fn text_labels(style: TextLabelStyle) -> LabelFormatter {
    Box::new(move |value: f64, opts: &RenderOptions| {
        let text = format_tick(value);
        let bounds = text_box(&text, &style.font);
        let dx = style.offset.x.max(0.0) as f32;
        let dy = style.offset.y.max(0.0) as f32;
        let width = (bounds.width() + dx).ceil().max(1.0) as i32;
        let height = (bounds.height() + dy).ceil().max(1.0) as i32;
        let mut scratch = ScratchImage::new(width, height)?;
        scratch
            .surface()
            .draw_text(&text, &style.font, style.color, skia::Point::new(dx, dy), opts)?;
        Ok(scratch.snapshot())
    })
}
