// File: crates/demo/src/main.rs
// Summary: Demo renders the reference graph (three points, arrowed axes, titles, tick labels) to a PNG.
// Usage: graph-demo [output.png] [theme]

use anyhow::{Context, Result};
use graph_core::text::sans;
use graph_core::{
    text_labels, theme, Axis, CoordinateTransform, DataPoint, Graph, LabelInfo, LineSeries, Orientation,
    PointF64, RectF64, RenderOptions, TickLabels,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let out = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target/out/graph.png"));
    let theme = theme::find(&std::env::args().nth(2).unwrap_or_else(|| "light".to_string()));

    let mut graph = Graph::new();
    graph.transform = CoordinateTransform::new(
        RectF64::from_xywh(50.0, 50.0, 600.0, 600.0),
        PointF64::new(300.0, 300.0),
        20.0,
        20.0,
    )?;

    graph.add_series(LineSeries::with_data(vec![
        DataPoint::new(1.0, 1.0),
        DataPoint::new(3.0, 5.0),
        DataPoint::new(5.0, 6.5),
    ]));

    let mut horizontal = Axis::horizontal();
    configure_axis(&mut horizontal);
    horizontal.endpoint_label = Some(LabelInfo::new("X", sans(12.0), theme.axis_label).with_displacement(0.0, 5.0));
    horizontal.title_label = Some(LabelInfo::new("Time", sans(16.0), theme.axis_label));
    graph.horizontal_axis = Some(horizontal);

    let mut vertical = Axis::vertical();
    configure_axis(&mut vertical);
    vertical.endpoint_label = Some(LabelInfo::new("Y", sans(12.0), theme.axis_label).with_displacement(5.0, 0.0));
    vertical.title_label = Some(LabelInfo::new("Frustration", sans(16.0), theme.axis_label));
    graph.vertical_axis = Some(vertical);

    if let Some(grid) = &graph.grid {
        let style = |offset: PointF64| theme.tick_label_style(sans(10.0), offset);
        let mut labels = TickLabels::from_grid(Orientation::Horizontal, grid, text_labels(style(PointF64::new(2.0, 3.0))));
        labels.tick_distance = 5.0;
        graph.horizontal_labels = Some(labels);
        let mut labels = TickLabels::from_grid(Orientation::Vertical, grid, text_labels(style(PointF64::new(4.0, 0.0))));
        labels.tick_distance = 5.0;
        graph.vertical_labels = Some(labels);
    }

    let mut opts = RenderOptions::default();
    graph.apply_theme(&theme, &mut opts);

    graph
        .render_to_png(&opts, &out)
        .with_context(|| format!("failed to render '{}'", out.display()))?;
    tracing::info!(path = %out.display(), theme = theme.name, "wrote graph");
    Ok(())
}

fn configure_axis(axis: &mut Axis) {
    axis.negative_end_margin = 20.0;
    axis.positive_end_margin = 20.0;
    axis.arrow_length = 15.0;
    axis.arrow_width = 10.0;
}
