//! Alpha-channel outline extraction.
//!
//! Turns the opacity of a [`PixelWindow`] into one closed polygon suitable as
//! a 2D collision shape. Two stages:
//!
//! - Boundary vertex detection: a marching-squares style scan over every grid
//!   corner of the window (plus a one-pixel margin). A corner whose 2×2 pixel
//!   neighborhood holds exactly one or three opaque pixels is a silhouette
//!   corner. The result is unordered.
//! - Contour ordering: a nearest-valid-neighbour walk. From the last placed
//!   vertex, pending vertices are ranked by distance (ties by detection order)
//!   and the first one reachable by a valid step is placed next. A step is
//!   valid only if it is axis-aligned and every unit cell along it separates
//!   an opaque pixel from a transparent one, which keeps the walk from
//!   jumping across gaps or cutting through solid interior.
//!
//! Opacity is `alpha > min_transparency` (see [`OutlineParams`]) and is sampled
//! once per pass into an [`OpacityMask`].
//!
//! Failure modes
//! - [`OutlineError::InvalidGeometry`]: non-positive window size or scale.
//! - [`OutlineError::EmptyInput`]: the window is uniformly opaque or
//!   transparent.
//! - [`OutlineError::IncompleteContour`]: the walk ran out of valid steps,
//!   usually because the silhouette is split into disjoint regions.
//!
//! Complexity
//! - Detection is O(W·H). The walk sorts the pending set once per placement,
//!   giving O(V² log V) for V vertices; V is small for sprite outlines.

mod detector;
mod params;
mod step;
mod walker;

pub use params::OutlineParams;

use crate::error::OutlineError;
use crate::image::AlphaSource;
use crate::types::{Contour, VertexSet};
use crate::window::{OpacityMask, PixelWindow};

/// Detect every boundary vertex of `window`, in row-major order.
pub fn detect_vertices<S: AlphaSource + ?Sized>(
    source: &S,
    window: PixelWindow,
    params: &OutlineParams,
) -> Result<VertexSet, OutlineError> {
    let mask = OpacityMask::build(source, window, params)?;
    Ok(detector::scan(&mask))
}

/// Order a detected vertex set into a closed contour.
pub fn build_contour<S: AlphaSource + ?Sized>(
    vertices: VertexSet,
    source: &S,
    window: PixelWindow,
    params: &OutlineParams,
) -> Result<Contour, OutlineError> {
    let mask = OpacityMask::build(source, window, params)?;
    walker::walk(vertices, &mask)
}

/// Detect and order in one pass, sampling the source once.
pub fn generate_contour<S: AlphaSource + ?Sized>(
    source: &S,
    window: PixelWindow,
    params: &OutlineParams,
) -> Result<Contour, OutlineError> {
    let mask = OpacityMask::build(source, window, params)?;
    walker::walk(detector::scan(&mask), &mask)
}

/// Whether every edge of `contour`, including the closing one, is a valid
/// boundary-following step under `params`.
pub fn is_boundary_contour<S: AlphaSource + ?Sized>(
    contour: &Contour,
    source: &S,
    window: PixelWindow,
    params: &OutlineParams,
) -> Result<bool, OutlineError> {
    let mask = OpacityMask::build(source, window, params)?;
    Ok(contour.len() >= 4
        && contour
            .edges()
            .all(|(from, to)| step::is_valid_move(&mask, from, to)))
}
