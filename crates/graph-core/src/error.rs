// File: crates/graph-core/src/error.rs
// Summary: Error type shared by the transform, surfaces, and raster output helpers.

use thiserror::Error;

/// Errors raised while configuring or rendering a graph.
#[derive(Error, Debug)]
pub enum ChartError {
    /// Pixel-per-unit scale factors must be finite and strictly positive.
    #[error("invalid scale: {horizontal} px/unit horizontal, {vertical} px/unit vertical")]
    InvalidScale { horizontal: f64, vertical: f64 },

    /// A raster surface could not be created (zero or oversized dimensions).
    #[error("failed to allocate {width}x{height} raster surface")]
    SurfaceAllocation { width: i32, height: i32 },

    /// Pixel read-back from a raster surface failed.
    #[error("failed to read pixels from raster surface")]
    ReadPixels,

    /// Image encoding failed.
    #[error("failed to encode {0}")]
    Encode(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
