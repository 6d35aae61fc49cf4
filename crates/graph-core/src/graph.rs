// File: crates/graph-core/src/graph.rs
// Summary: Graph composition root; owns the transform and layers and renders them in a fixed order,
// plus headless raster/PNG output using Skia CPU surfaces.

use skia_safe as skia;
use tracing::{debug, trace};

use crate::axis::Axis;
use crate::error::{ChartError, Result};
use crate::grid::Grid;
use crate::labels::TickLabels;
use crate::layer::GraphLayer;
use crate::series::LineSeries;
use crate::surface::{DrawingSurface, SkiaSurface};
use crate::theme::Theme;
use crate::transform::CoordinateTransform;
use crate::types::RenderOptions;

/// A Cartesian line graph.
///
/// Layers are drawn in this order: grid, vertical axis, vertical tick labels,
/// horizontal axis, horizontal tick labels, data sets, extra layers. A `None`
/// layer is skipped.
pub struct Graph {
    pub transform: CoordinateTransform,
    pub grid: Option<Grid>,
    pub vertical_axis: Option<Axis>,
    pub vertical_labels: Option<TickLabels>,
    pub horizontal_axis: Option<Axis>,
    pub horizontal_labels: Option<TickLabels>,
    pub data_sets: Vec<LineSeries>,
    pub extra_layers: Vec<Box<dyn GraphLayer>>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Self {
            transform: CoordinateTransform::default(),
            grid: Some(Grid::default()),
            vertical_axis: Some(Axis::vertical()),
            vertical_labels: None,
            horizontal_axis: Some(Axis::horizontal()),
            horizontal_labels: None,
            data_sets: Vec::new(),
            extra_layers: Vec::new(),
        }
    }

    pub fn add_series(&mut self, series: LineSeries) {
        self.data_sets.push(series);
    }

    pub fn add_layer(&mut self, layer: impl GraphLayer + 'static) {
        self.extra_layers.push(Box::new(layer));
    }

    /// Present layers in render order.
    pub fn layers(&self) -> Vec<&dyn GraphLayer> {
        let mut layers: Vec<&dyn GraphLayer> = Vec::new();
        if let Some(grid) = &self.grid {
            layers.push(grid);
        }
        if let Some(axis) = &self.vertical_axis {
            layers.push(axis);
        }
        if let Some(labels) = &self.vertical_labels {
            layers.push(labels);
        }
        if let Some(axis) = &self.horizontal_axis {
            layers.push(axis);
        }
        if let Some(labels) = &self.horizontal_labels {
            layers.push(labels);
        }
        layers.extend(self.data_sets.iter().map(|s| s as &dyn GraphLayer));
        layers.extend(self.extra_layers.iter().map(|l| &**l));
        layers
    }

    /// Draw every layer onto `surface`. The first failing layer aborts the render;
    /// whatever was drawn before it stays on the target.
    pub fn render(&self, surface: &mut dyn DrawingSurface, opts: &RenderOptions) -> Result<()> {
        let layers = self.layers();
        debug!(layers = layers.len(), "rendering graph");
        for layer in layers {
            trace!(layer = layer.id(), "render layer");
            layer.render(&self.transform, surface, opts)?;
        }
        Ok(())
    }

    /// Draw onto an existing Skia surface without clearing it.
    pub fn render_onto(&self, target: &mut skia::Surface, opts: &RenderOptions) -> Result<()> {
        let mut surface = SkiaSurface::new(target.canvas());
        self.render(&mut surface, opts)
    }

    fn render_raster(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut target = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::SurfaceAllocation { width: opts.width, height: opts.height })?;
        target.canvas().clear(opts.background);
        self.render_onto(&mut target, opts)?;
        Ok(target)
    }

    /// Render into a fresh RGBA8 buffer. Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut target = self.render_raster(opts)?;
        let (w, h) = (target.width(), target.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !target.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut target = self.render_raster(opts)?;
        let image = target.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode("PNG"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the graph to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        debug!(path = %path.display(), "wrote png");
        Ok(())
    }

    /// Recolour grid, axes, and series from `theme`; the background applies
    /// through `opts`. Tick label colours live in their formatters and are left
    /// alone: build those with [`Theme::tick_label_style`].
    pub fn apply_theme(&mut self, theme: &Theme, opts: &mut RenderOptions) {
        opts.background = theme.background;
        if let Some(grid) = &mut self.grid {
            grid.horizontal_pen.color = theme.grid_minor;
            grid.vertical_pen.color = theme.grid_minor;
            grid.major_horizontal_pen.color = theme.grid_major;
            grid.major_vertical_pen.color = theme.grid_major;
        }
        for axis in [&mut self.vertical_axis, &mut self.horizontal_axis].into_iter().flatten() {
            axis.line.color = theme.axis_line;
            axis.arrow_color = theme.axis_line;
            for label in [&mut axis.endpoint_label, &mut axis.title_label].into_iter().flatten() {
                label.color = theme.axis_label;
            }
        }
        for series in &mut self.data_sets {
            if let Some(pen) = &mut series.line {
                pen.color = theme.series_line;
            }
            series.point_color = theme.series_point;
        }
    }
}
