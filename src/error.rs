use crate::types::Vertex;
use serde::Serialize;
use thiserror::Error;

/// Failures of a single outline generation pass.
#[derive(Clone, Debug, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum OutlineError {
    /// The window has uniform opacity; there is nothing to outline.
    #[error("no boundary vertices found; nothing to generate")]
    EmptyInput,
    /// The ordering walk could not reach every vertex, typically because the
    /// silhouette has disconnected regions.
    #[error("contour incomplete: stuck at {last} after placing {placed} vertices, {stranded} stranded")]
    IncompleteContour {
        last: Vertex,
        stranded: usize,
        placed: usize,
    },
    #[error("invalid window geometry: {width}x{height} at {pixels_per_unit} pixels per unit")]
    InvalidGeometry {
        width: i32,
        height: i32,
        pixels_per_unit: f32,
    },
}
