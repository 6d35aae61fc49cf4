// File: crates/graph-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke tests writing a PNG and reading back RGBA pixels.

mod common;

use graph_core::{Graph, RenderOptions};

#[test]
fn render_smoke_png() {
    let graph = common::reference::reference_graph();

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    graph.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = graph.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let decoded = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((decoded.width(), decoded.height()), (700, 700));
}

#[test]
fn render_rgba8_buffer() {
    let graph = common::reference::reference_graph();
    let opts = RenderOptions { anti_alias: false, ..RenderOptions::default() };
    let (px, w, h, stride) = graph.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    let at = |x: usize, y: usize| &px[y * stride + x * 4..y * stride + x * 4 + 4];
    // Top-left is outside the grid region: opaque white background.
    assert_eq!(at(0, 0), &[255, 255, 255, 255]);
    // Data marker centred on graph (3, 5): grid offset 50 + origin 300 + (60, -100).
    assert_eq!(at(410, 250), &[255, 0, 0, 255]);
    // Axis line through the origin, away from grid majors and data.
    assert_eq!(&at(350, 360)[..3], &[0, 0, 0]);
}

#[test]
fn empty_graph_renders_background_only() {
    let mut graph = Graph::new();
    graph.grid = None;
    graph.vertical_axis = None;
    graph.horizontal_axis = None;
    let opts = RenderOptions { width: 16, height: 8, ..RenderOptions::default() };
    let (px, w, h, _) = graph.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (16, 8));
    assert!(px.chunks_exact(4).all(|p| p == [255, 255, 255, 255]));
}

#[test]
fn zero_sized_target_is_an_error() {
    let graph = Graph::new();
    let opts = RenderOptions { width: 0, ..RenderOptions::default() };
    assert!(matches!(
        graph.render_to_png_bytes(&opts),
        Err(graph_core::ChartError::SurfaceAllocation { .. })
    ));
}
