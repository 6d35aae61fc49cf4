// File: crates/graph-core/tests/common/reference.rs
// Purpose: The reference graph used by the raster tests: 700x700 image, 600x600 grid, arrowed axes.

use graph_core::{Axis, CoordinateTransform, Graph, LineSeries, PointF64, RectF64};

pub fn reference_graph() -> Graph {
    let mut graph = Graph::new();
    graph.transform = CoordinateTransform::new(
        RectF64::from_xywh(50.0, 50.0, 600.0, 600.0),
        PointF64::new(300.0, 300.0),
        20.0,
        20.0,
    )
    .expect("valid scale");
    for axis in [&mut graph.horizontal_axis, &mut graph.vertical_axis].into_iter().flatten() {
        arrowed(axis);
    }
    graph.add_series(LineSeries::from_xy(&[(1.0, 1.0), (3.0, 5.0), (5.0, 6.5)]));
    graph
}

fn arrowed(axis: &mut Axis) {
    axis.negative_end_margin = 20.0;
    axis.positive_end_margin = 20.0;
    axis.arrow_length = 15.0;
    axis.arrow_width = 10.0;
}
