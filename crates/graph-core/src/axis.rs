// File: crates/graph-core/src/axis.rs
// Summary: Axis layer; axis line, arrowheads, endpoint label, and title (rotated for vertical axes).

use skia_safe as skia;
use tracing::trace;

use crate::error::Result;
use crate::geometry::{Orientation, PointF64};
use crate::layer::GraphLayer;
use crate::surface::{DrawingSurface, ScratchImage};
use crate::transform::CoordinateTransform;
use crate::types::{Pen, RenderOptions};

/// Vertical titles are turned a quarter turn clockwise and read top to bottom.
pub const VERTICAL_TITLE_ROTATION_DEGREES: f32 = 90.0;

/// Text drawn next to an axis.
#[derive(Clone, Debug)]
pub struct LabelInfo {
    pub color: skia::Color,
    pub font: skia::Font,
    pub text: String,
    /// Pixel offset applied to the label's anchor.
    pub displacement: PointF64,
}

impl LabelInfo {
    pub fn new(text: impl Into<String>, font: skia::Font, color: skia::Color) -> Self {
        Self { color, font, text: text.into(), displacement: PointF64::default() }
    }

    pub fn with_displacement(mut self, dx: f64, dy: f64) -> Self {
        self.displacement = PointF64::new(dx, dy);
        self
    }
}

/// One axis line through the origin, spanning the grid region.
///
/// Each end is inset by its margin plus the arrow length, whether or not that
/// end's arrow is drawn.
#[derive(Clone, Debug)]
pub struct Axis {
    pub orientation: Orientation,
    pub line: Pen,
    /// Arrow base width in pixels.
    pub arrow_width: f32,
    /// Arrow length in pixels, measured from the line end to the tip.
    pub arrow_length: f32,
    pub arrow_color: skia::Color,
    pub enable_positive_end_arrow: bool,
    pub positive_end_margin: f32,
    pub enable_negative_end_arrow: bool,
    pub negative_end_margin: f32,
    /// Drawn at the positive (right/top) tip, plus displacement.
    pub endpoint_label: Option<LabelInfo>,
    /// Drawn from the origin, plus displacement.
    pub title_label: Option<LabelInfo>,
}

impl Axis {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            line: Pen::solid(skia::Color::BLACK, 2.0),
            arrow_width: 4.0,
            arrow_length: 7.0,
            arrow_color: skia::Color::BLACK,
            enable_positive_end_arrow: true,
            positive_end_margin: 0.0,
            enable_negative_end_arrow: true,
            negative_end_margin: 0.0,
            endpoint_label: None,
            title_label: None,
        }
    }

    pub fn horizontal() -> Self { Self::new(Orientation::Horizontal) }
    pub fn vertical() -> Self { Self::new(Orientation::Vertical) }

    pub fn is_horizontal(&self) -> bool { self.orientation.is_horizontal() }
    pub fn is_vertical(&self) -> bool { self.orientation.is_vertical() }

    pub fn set_horizontal(&mut self, horizontal: bool) {
        self.orientation = if horizontal { Orientation::Horizontal } else { Orientation::Vertical };
    }

    pub fn set_vertical(&mut self, vertical: bool) {
        self.set_horizontal(!vertical);
    }

    /// Drawn line ends as `(negative_end, positive_end)` in absolute pixels.
    pub fn endpoints(&self, transform: &CoordinateTransform) -> (PointF64, PointF64) {
        let region = transform.grid_region;
        let origin = transform.origin_absolute();
        let arrow = self.arrow_length as f64;
        let neg = self.negative_end_margin as f64 + arrow;
        let pos = self.positive_end_margin as f64 + arrow;
        match self.orientation {
            Orientation::Horizontal => (
                PointF64::new(region.left + neg, origin.y),
                PointF64::new(region.right - pos, origin.y),
            ),
            Orientation::Vertical => (
                PointF64::new(origin.x, region.bottom - neg),
                PointF64::new(origin.x, region.top + pos),
            ),
        }
    }

    /// Positive tip (margin applied, arrow not), where the endpoint label is anchored.
    pub fn label_endpoint(&self, transform: &CoordinateTransform) -> PointF64 {
        let region = transform.grid_region;
        let origin = transform.origin_absolute();
        let margin = self.positive_end_margin as f64;
        match self.orientation {
            Orientation::Horizontal => PointF64::new(region.right - margin, origin.y),
            Orientation::Vertical => PointF64::new(origin.x, region.top + margin),
        }
    }

    /// Unit vector pointing from the origin toward the positive end, in pixels.
    fn positive_direction(&self) -> (f64, f64) {
        match self.orientation {
            Orientation::Horizontal => (1.0, 0.0),
            Orientation::Vertical => (0.0, -1.0),
        }
    }

    /// Isosceles triangle with its base centred on `end` and its tip `arrow_length` further along `dir`.
    pub fn arrowhead(&self, end: PointF64, dir: (f64, f64)) -> [PointF64; 3] {
        let len = self.arrow_length as f64;
        let half = self.arrow_width as f64 / 2.0;
        let (px, py) = (-dir.1, dir.0);
        [
            end.offset(dir.0 * len, dir.1 * len),
            end.offset(px * half, py * half),
            end.offset(-px * half, -py * half),
        ]
    }

    fn render_arrows(
        &self,
        (neg_end, pos_end): (PointF64, PointF64),
        surface: &mut dyn DrawingSurface,
        opts: &RenderOptions,
    ) -> Result<()> {
        if !(self.arrow_width > 0.0 && self.arrow_length > 0.0) {
            return Ok(());
        }
        let (dx, dy) = self.positive_direction();
        if self.enable_positive_end_arrow {
            let tri = self.arrowhead(pos_end, (dx, dy)).map(PointF64::to_skia);
            surface.fill_polygon(self.arrow_color, &tri, opts)?;
        }
        if self.enable_negative_end_arrow {
            let tri = self.arrowhead(neg_end, (-dx, -dy)).map(PointF64::to_skia);
            surface.fill_polygon(self.arrow_color, &tri, opts)?;
        }
        Ok(())
    }

    fn render_horizontal_title(
        &self,
        label: &LabelInfo,
        transform: &CoordinateTransform,
        surface: &mut dyn DrawingSurface,
        opts: &RenderOptions,
    ) -> Result<()> {
        let origin = transform.origin_absolute();
        let (_, pos_end) = self.endpoints(transform);
        let text_width = surface.measure_text(&label.text, &label.font).width() as f64;
        // Centre over the stretch of axis right of the origin.
        let centering = (pos_end.x - origin.x - text_width) / 2.0;
        let at = origin.offset(label.displacement.x + centering, label.displacement.y);
        surface.draw_text(&label.text, &label.font, label.color, at.to_skia(), opts)
    }

    /// The surface only lays text out horizontally, so the title is drawn into a
    /// square scratch image, rotated, cropped to its ink, and then composited.
    fn render_vertical_title(
        &self,
        label: &LabelInfo,
        transform: &CoordinateTransform,
        surface: &mut dyn DrawingSurface,
        opts: &RenderOptions,
    ) -> Result<()> {
        let bounds = surface.measure_text(&label.text, &label.font);
        let side = bounds.width().max(bounds.height()).ceil() as i32;
        if side <= 0 {
            return Ok(());
        }
        let mut scratch = ScratchImage::new(side, side)?;
        scratch
            .surface()
            .draw_text(&label.text, &label.font, label.color, skia::Point::new(0.0, 0.0), opts)?;
        let mut turned = scratch.rotated(VERTICAL_TITLE_ROTATION_DEGREES)?;
        let Some(mut cropped) = turned.crop_to_opaque()? else {
            trace!(text = %label.text, "vertical title has no ink");
            return Ok(());
        };
        let image = cropped.snapshot();
        let at = self.vertical_title_position(transform, label.displacement, image.width(), image.height());
        surface.draw_image(&image, at.to_skia(), opts)
    }

    /// Top-left corner for a rotated title of `width` x `height` pixels: right
    /// edge on the axis, centred on the visible span above the origin, then
    /// shifted by `displacement`.
    pub fn vertical_title_position(
        &self,
        transform: &CoordinateTransform,
        displacement: PointF64,
        width: i32,
        height: i32,
    ) -> PointF64 {
        let origin = transform.origin_absolute();
        let (_, top_end) = self.endpoints(transform);
        let visible_span = origin.y - top_end.y;
        PointF64::new(
            origin.x + displacement.x - width as f64,
            top_end.y + (visible_span - height as f64) / 2.0 + displacement.y,
        )
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::horizontal()
    }
}

impl GraphLayer for Axis {
    fn id(&self) -> &'static str {
        match self.orientation {
            Orientation::Horizontal => "horizontal-axis",
            Orientation::Vertical => "vertical-axis",
        }
    }

    fn render(
        &self,
        transform: &CoordinateTransform,
        surface: &mut dyn DrawingSurface,
        opts: &RenderOptions,
    ) -> Result<()> {
        let ends = self.endpoints(transform);
        surface.draw_polyline(&self.line, &[ends.0.to_skia(), ends.1.to_skia()], opts)?;
        self.render_arrows(ends, surface, opts)?;

        if let Some(title) = &self.title_label {
            match self.orientation {
                Orientation::Horizontal => self.render_horizontal_title(title, transform, surface, opts)?,
                Orientation::Vertical => self.render_vertical_title(title, transform, surface, opts)?,
            }
        }

        if let Some(label) = &self.endpoint_label {
            let at = self
                .label_endpoint(transform)
                .offset(label.displacement.x, label.displacement.y);
            surface.draw_text(&label.text, &label.font, label.color, at.to_skia(), opts)?;
        }
        Ok(())
    }
}
