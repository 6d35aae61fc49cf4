// File: crates/graph-core/src/series.rs
// Summary: Data series layer; clips, sorts, and splits points into polylines with point markers.
// Notes:
// - A point flagged `break_before` ends the current polyline. It still gets a
//   marker but is not joined to either neighbour; the next point starts a new line.

use skia_safe as skia;
use tracing::debug;

use crate::error::Result;
use crate::geometry::PointF64;
use crate::layer::GraphLayer;
use crate::surface::DrawingSurface;
use crate::transform::CoordinateTransform;
use crate::types::{Pen, RenderOptions};

/// A data point in graph units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    /// Do not connect this point to the one before it.
    pub break_before: bool,
}

impl DataPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, break_before: false }
    }

    pub const fn with_break(x: f64, y: f64) -> Self {
        Self { x, y, break_before: true }
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A data point paired with its absolute pixel position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedPoint {
    pub pixel: PointF64,
    pub data: DataPoint,
}

/// One consumed stretch of points: the polyline, and the break point that ended it, if any.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Run<'a> {
    pub line: &'a [PlacedPoint],
    pub break_point: Option<&'a PlacedPoint>,
}

impl<'a> Run<'a> {
    /// Every point that receives a marker.
    pub fn markers(&self) -> impl Iterator<Item = &'a PlacedPoint> {
        self.line.iter().chain(self.break_point)
    }
}

/// Split sorted points at break markers.
///
/// Each run is the longest prefix of unflagged points (possibly empty) plus the
/// flagged point that stopped it.
pub fn split_runs(points: &[PlacedPoint]) -> Vec<Run<'_>> {
    let mut runs = Vec::new();
    let mut rest = points;
    while !rest.is_empty() {
        let n = rest.iter().take_while(|p| !p.data.break_before).count();
        let break_point = rest.get(n);
        runs.push(Run { line: &rest[..n], break_point });
        rest = &rest[n + usize::from(break_point.is_some())..];
    }
    runs
}

/// Points in graph units drawn as polylines with optional round markers.
#[derive(Clone, Debug)]
pub struct LineSeries {
    pub data: Vec<DataPoint>,
    /// Marker radius in pixels; 0 disables markers.
    pub point_radius: f32,
    pub point_color: skia::Color,
    /// `None` draws markers only.
    pub line: Option<Pen>,
}

impl Default for LineSeries {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            point_radius: 2.5,
            point_color: skia::Color::RED,
            line: Some(Pen::solid(skia::Color::RED, 1.0)),
        }
    }
}

impl LineSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: Vec<DataPoint>) -> Self {
        Self { data, ..Self::default() }
    }

    pub fn from_xy(data: &[(f64, f64)]) -> Self {
        Self::with_data(data.iter().copied().map(DataPoint::from).collect())
    }

    pub fn push(&mut self, point: DataPoint) {
        self.data.push(point);
    }

    /// Points strictly inside the grid region, sorted by graph-unit X.
    pub fn visible_points(&self, transform: &CoordinateTransform) -> Vec<PlacedPoint> {
        let region = transform.grid_region;
        let mut placed: Vec<PlacedPoint> = self
            .data
            .iter()
            .map(|&data| PlacedPoint { pixel: transform.to_absolute(PointF64::new(data.x, data.y)), data })
            .filter(|p| region.contains_open(p.pixel))
            .collect();
        placed.sort_by(|a, b| a.data.x.total_cmp(&b.data.x));
        placed
    }
}

impl GraphLayer for LineSeries {
    fn id(&self) -> &'static str { "line-series" }

    fn render(
        &self,
        transform: &CoordinateTransform,
        surface: &mut dyn DrawingSurface,
        opts: &RenderOptions,
    ) -> Result<()> {
        let visible = self.visible_points(transform);
        let runs = split_runs(&visible);
        debug!(points = self.data.len(), visible = visible.len(), runs = runs.len(), "line series");

        for run in &runs {
            if let Some(pen) = &self.line {
                let pixels: Vec<skia::Point> = run.line.iter().map(|p| p.pixel.to_skia()).collect();
                if !pixels.is_empty() {
                    surface.draw_polyline(pen, &pixels, opts)?;
                }
            }
            if self.point_radius > 0.0 {
                for p in run.markers() {
                    surface.fill_circle(self.point_color, p.pixel.to_skia(), self.point_radius, opts)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(x: f64, break_before: bool) -> PlacedPoint {
        PlacedPoint {
            pixel: PointF64::new(x, 0.0),
            data: DataPoint { x, y: 0.0, break_before },
        }
    }

    #[test]
    fn break_point_ends_line_without_joining() {
        let pts = [placed(1.0, false), placed(2.0, false), placed(3.0, true), placed(4.0, false)];
        let runs = split_runs(&pts);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].line, &pts[..2]);
        assert_eq!(runs[0].break_point, Some(&pts[2]));
        assert_eq!(runs[1].line, &pts[3..]);
        assert_eq!(runs[1].break_point, None);
        let marked: usize = runs.iter().map(|r| r.markers().count()).sum();
        assert_eq!(marked, 4);
    }

    #[test]
    fn leading_and_consecutive_breaks_give_empty_lines() {
        let pts = [placed(1.0, true), placed(2.0, true), placed(3.0, false)];
        let runs = split_runs(&pts);
        assert_eq!(runs.len(), 3);
        assert!(runs[0].line.is_empty());
        assert!(runs[1].line.is_empty());
        assert_eq!(runs[2].line.len(), 1);
    }

    #[test]
    fn empty_input_has_no_runs() {
        assert!(split_runs(&[]).is_empty());
    }

    #[test]
    fn point_equality_is_structural() {
        assert_eq!(DataPoint::new(1.0, 2.0), DataPoint::from((1.0, 2.0)));
        assert_ne!(DataPoint::new(1.0, 2.0), DataPoint::with_break(1.0, 2.0));
    }
}
