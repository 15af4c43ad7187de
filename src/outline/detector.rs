use crate::types::{Corner, VertexSet};
use crate::window::OpacityMask;
use log::debug;

/// Offsets of the 2×2 neighborhood relative to its top-left pixel.
const QUAD: [(i32, i32); 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];

/// Opaque pixels in the 2×2 block whose top-left pixel is `(gx, gy)`.
#[inline]
pub(crate) fn quad_count(mask: &OpacityMask, gx: i32, gy: i32) -> u8 {
    QUAD.iter()
        .filter(|(dx, dy)| mask.is_opaque(gx + dx, gy + dy))
        .count() as u8
}

/// Grid corner `corner` is a diagonal saddle: its 2×2 block holds two opaque
/// pixels that touch only at that corner.
#[inline]
pub(crate) fn is_saddle(mask: &OpacityMask, corner: Corner) -> bool {
    let (gx, gy) = (corner.x - 1, corner.y - 1);
    if quad_count(mask, gx, gy) != 2 {
        return false;
    }
    mask.is_opaque(gx, gy) == mask.is_opaque(gx + 1, gy + 1)
}

/// Marching-squares corner scan over grid points `[-1, w] × [-1, h]`.
///
/// A block with exactly one or three opaque pixels is a silhouette corner;
/// zero and four are uniform, and two is either a straight edge (no corner)
/// or a diagonal saddle, which is not emitted. Points are pushed
/// in row-major order, which fixes the seed and the tie-break order of the
/// walk.
///
/// A window whose pixels are all opaque or all transparent has no silhouette
/// and yields an empty set, even though its rectangle borders the margin.
pub(crate) fn scan(mask: &OpacityMask) -> VertexSet {
    let window = mask.window();
    let mut set = VertexSet::new();
    if mask.is_uniform() {
        debug!(
            "outline::detect window=({},{} {}x{}) has uniform opacity",
            window.x_offset, window.y_offset, window.width, window.height
        );
        return set;
    }
    for gy in -1..=window.height {
        for gx in -1..=window.width {
            let count = quad_count(mask, gx, gy);
            if count == 1 || count == 3 {
                set.push(window.vertex(Corner::new(gx + 1, gy + 1)));
            }
        }
    }
    debug!(
        "outline::detect window=({},{} {}x{}) opaque_px={} vertices={}",
        window.x_offset,
        window.y_offset,
        window.width,
        window.height,
        mask.opaque_count(),
        set.len()
    );
    set
}
