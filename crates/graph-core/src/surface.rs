// File: crates/graph-core/src/surface.rs
// Summary: Drawing surface contract consumed by the layers, its Skia canvas adapter,
// and scoped scratch images (allocate, draw, rotate, crop to opaque pixels).

use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::types::{fill_paint, Pen, RenderOptions};

/// Rasterization primitives the layers draw through. All coordinates are absolute pixels.
pub trait DrawingSurface {
    fn draw_polyline(&mut self, pen: &Pen, points: &[skia::Point], opts: &RenderOptions) -> Result<()>;
    fn fill_polygon(&mut self, color: skia::Color, points: &[skia::Point], opts: &RenderOptions) -> Result<()>;
    fn fill_circle(&mut self, color: skia::Color, center: skia::Point, radius: f32, opts: &RenderOptions) -> Result<()>;

    /// Draw `text` with the top-left corner of its layout box at `top_left`.
    fn draw_text(
        &mut self,
        text: &str,
        font: &skia::Font,
        color: skia::Color,
        top_left: skia::Point,
        opts: &RenderOptions,
    ) -> Result<()>;

    /// Layout box `draw_text` fills when anchored at (0, 0).
    fn measure_text(&self, text: &str, font: &skia::Font) -> skia::Rect;

    fn draw_image(&mut self, image: &skia::Image, top_left: skia::Point, opts: &RenderOptions) -> Result<()>;
}

/// Layout box of `text` anchored at its top-left corner: advance (or ink extent,
/// whichever is wider) by ascent-to-descent height.
pub fn text_box(text: &str, font: &skia::Font) -> skia::Rect {
    let (advance, ink) = font.measure_str(text, None);
    let (_, metrics) = font.metrics();
    skia::Rect::from_wh(advance.max(ink.right), metrics.descent - metrics.ascent)
}

/// [`DrawingSurface`] over a borrowed Skia canvas.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        Self { canvas }
    }
}

impl DrawingSurface for SkiaSurface<'_> {
    fn draw_polyline(&mut self, pen: &Pen, points: &[skia::Point], opts: &RenderOptions) -> Result<()> {
        let Some((first, rest)) = points.split_first() else { return Ok(()) };
        if rest.is_empty() {
            return Ok(());
        }
        let mut path = skia::Path::new();
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
        self.canvas.draw_path(&path, &pen.to_paint(opts));
        Ok(())
    }

    fn fill_polygon(&mut self, color: skia::Color, points: &[skia::Point], opts: &RenderOptions) -> Result<()> {
        let Some((first, rest)) = points.split_first() else { return Ok(()) };
        let mut path = skia::Path::new();
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
        path.close();
        self.canvas.draw_path(&path, &fill_paint(color, opts));
        Ok(())
    }

    fn fill_circle(&mut self, color: skia::Color, center: skia::Point, radius: f32, opts: &RenderOptions) -> Result<()> {
        self.canvas.draw_circle(center, radius, &fill_paint(color, opts));
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        font: &skia::Font,
        color: skia::Color,
        top_left: skia::Point,
        opts: &RenderOptions,
    ) -> Result<()> {
        let (_, metrics) = font.metrics();
        // Skia anchors text at the baseline; ascent is negative.
        let baseline = skia::Point::new(top_left.x, top_left.y - metrics.ascent);
        self.canvas.draw_str(text, baseline, font, &fill_paint(color, opts));
        Ok(())
    }

    fn measure_text(&self, text: &str, font: &skia::Font) -> skia::Rect {
        text_box(text, font)
    }

    fn draw_image(&mut self, image: &skia::Image, top_left: skia::Point, opts: &RenderOptions) -> Result<()> {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(opts.anti_alias);
        self.canvas.draw_image(image, top_left, Some(&paint));
        Ok(())
    }
}

/// Transparent CPU raster used for off-target rendering.
///
/// Every operation that changes its geometry returns a new scratch image; nothing
/// is cached between calls.
pub struct ScratchImage {
    surface: skia::Surface,
}

impl ScratchImage {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::SurfaceAllocation { width, height });
        }
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(ChartError::SurfaceAllocation { width, height })?;
        surface.canvas().clear(skia::Color::TRANSPARENT);
        Ok(Self { surface })
    }

    pub fn width(&self) -> i32 { self.surface.width() }
    pub fn height(&self) -> i32 { self.surface.height() }

    /// Drawing surface targeting this image.
    pub fn surface(&mut self) -> SkiaSurface<'_> {
        SkiaSurface::new(self.surface.canvas())
    }

    pub fn snapshot(&mut self) -> skia::Image {
        self.surface.image_snapshot()
    }

    /// Rotate clockwise by `degrees` about the centre into an image sized to the
    /// rotated bounding box.
    pub fn rotated(&mut self, degrees: f32) -> Result<ScratchImage> {
        let image = self.snapshot();
        let (w, h) = (image.width() as f32, image.height() as f32);
        let (sin, cos) = degrees.to_radians().sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());
        // Trim float noise so 90-degree turns keep exact integer sizes.
        let new_w = ((w * cos + h * sin) - 1e-3).ceil().max(1.0);
        let new_h = ((w * sin + h * cos) - 1e-3).ceil().max(1.0);

        let mut out = ScratchImage::new(new_w as i32, new_h as i32)?;
        let canvas = out.surface.canvas();
        canvas.translate((new_w / 2.0, new_h / 2.0));
        canvas.rotate(degrees, None);
        canvas.draw_image(&image, (-w / 2.0, -h / 2.0), None);
        Ok(out)
    }

    /// Bounds of the pixels with non-zero alpha, or `None` when fully transparent.
    pub fn opaque_rect(&mut self) -> Result<Option<skia::IRect>> {
        let (w, h) = (self.width(), self.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok(opaque_bounds(&pixels, w as usize))
    }

    /// Crop to the bounding box of pixels with non-zero alpha.
    /// Returns `Ok(None)` when the image is fully transparent.
    pub fn crop_to_opaque(&mut self) -> Result<Option<ScratchImage>> {
        let Some(bounds) = self.opaque_rect()? else {
            return Ok(None);
        };

        let image = self.snapshot();
        let mut out = ScratchImage::new(bounds.width(), bounds.height())?;
        out.surface
            .canvas()
            .draw_image(&image, (-bounds.left as f32, -bounds.top as f32), None);
        Ok(Some(out))
    }
}

/// Inclusive bounds of pixels with alpha > 0 in a tightly packed RGBA buffer,
/// returned as a half-open `IRect`.
pub(crate) fn opaque_bounds(rgba: &[u8], width: usize) -> Option<skia::IRect> {
    if width == 0 {
        return None;
    }
    let mut bounds: Option<(usize, usize, usize, usize)> = None;
    for (i, px) in rgba.chunks_exact(4).enumerate() {
        if px[3] == 0 {
            continue;
        }
        let (x, y) = (i % width, i / width);
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((l, t, r, b)) => (l.min(x), t.min(y), r.max(x), b.max(y)),
        });
    }
    bounds.map(|(l, t, r, b)| skia::IRect::from_ltrb(l as i32, t as i32, r as i32 + 1, b as i32 + 1))
}
