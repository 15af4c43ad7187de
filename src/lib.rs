#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod error;
pub mod frames;
pub mod image;
pub mod outline;
pub mod types;
pub mod window;

// Tool-facing modules: JSON configs and timing reports.
pub mod config;
pub mod diagnostics;

// --- High-level re-exports -------------------------------------------------

// Main entry points: one-shot generation plus the two stages.
pub use crate::outline::{
    build_contour, detect_vertices, generate_contour, is_boundary_contour, OutlineParams,
};
pub use crate::types::{Contour, Corner, Vertex, VertexSet};
pub use crate::window::{OpacityMask, PixelWindow};
pub use crate::error::OutlineError;

// Animation frames and collider storage.
pub use crate::frames::{
    generate_frames, ColliderSet, FrameBatchReport, FrameKey, FrameOutcome, FrameSpec,
    PolygonSink,
};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use sprite_outline::prelude::*;
///
/// # fn main() {
/// let (w, h) = (32usize, 32usize);
/// let alpha = vec![0u8; w * h];
/// let img = AlphaU8 { w, h, stride: w, data: &alpha };
///
/// let window = PixelWindow::covering(&img)
///     .with_centered_pivot()
///     .with_pixels_per_unit(16.0);
/// match generate_contour(&img, window, &OutlineParams::default()) {
///     Ok(contour) => println!("points={:?}", contour.positions()),
///     Err(err) => println!("no collider: {err}"),
/// }
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{AlphaF32, AlphaU8};
    pub use crate::{generate_contour, Contour, OutlineError, OutlineParams, PixelWindow};
}
