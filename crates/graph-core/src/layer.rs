// File: crates/graph-core/src/layer.rs
// Summary: Render contract shared by grid, axis, tick label, data, and user-supplied layers.

use crate::error::Result;
use crate::surface::DrawingSurface;
use crate::transform::CoordinateTransform;
use crate::types::RenderOptions;

/// One independently drawn part of a graph.
///
/// A layer reads the shared transform, issues its drawing calls, and returns.
/// It must not keep the surface past the call.
pub trait GraphLayer {
    fn id(&self) -> &'static str;

    fn render(
        &self,
        transform: &CoordinateTransform,
        surface: &mut dyn DrawingSurface,
        opts: &RenderOptions,
    ) -> Result<()>;
}
