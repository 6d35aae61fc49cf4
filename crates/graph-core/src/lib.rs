// File: crates/graph-core/src/lib.rs
// Summary: Core library entry point; exports the graph composition root, its layers, and the drawing surface contract.

pub mod axis;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod grid;
pub mod labels;
pub mod layer;
pub mod series;
pub mod surface;
pub mod text;
pub mod theme;
pub mod transform;
pub mod types;

pub use axis::{Axis, LabelInfo};
pub use error::{ChartError, Result};
pub use geometry::{Orientation, PointF64, RectF64};
pub use graph::Graph;
pub use grid::Grid;
pub use labels::{format_tick, text_labels, LabelFormatter, TextLabelStyle, TickLabels};
pub use layer::GraphLayer;
pub use series::{DataPoint, LineSeries};
pub use surface::{DrawingSurface, ScratchImage, SkiaSurface};
pub use theme::Theme;
pub use transform::CoordinateTransform;
pub use types::{Pen, RenderOptions};
