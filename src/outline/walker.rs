use super::step::is_valid_move;
use crate::error::OutlineError;
use crate::types::{Contour, Vertex, VertexSet};
use crate::window::OpacityMask;
use log::debug;

/// Vertex still waiting to be placed, tagged with its detection index.
#[derive(Clone, Copy, Debug)]
struct Pending {
    order: usize,
    vertex: Vertex,
}

/// Nearest-valid-neighbour walk over a detected vertex set.
///
/// Seeds with the first detected vertex, then repeatedly places the closest
/// pending vertex that is reachable by a valid step from the last placed one.
/// Candidates are ranked by (distance, detection order), so ties resolve the
/// same way on every run. Each round either places one vertex or fails, which
/// bounds the walk by the initial vertex count.
pub(crate) fn walk(vertices: VertexSet, mask: &OpacityMask) -> Result<Contour, OutlineError> {
    let total = vertices.len();
    let mut pending: Vec<Pending> = vertices
        .into_vec()
        .into_iter()
        .enumerate()
        .map(|(order, vertex)| Pending { order, vertex })
        .collect();
    if pending.is_empty() {
        return Err(OutlineError::EmptyInput);
    }

    let mut placed = Vec::with_capacity(total);
    placed.push(pending.remove(0).vertex);

    for _ in 1..total {
        let last = placed[placed.len() - 1];
        pending.sort_by_key(|p| (p.vertex.corner.distance_sq(last.corner), p.order));

        let next = pending
            .iter()
            .position(|p| is_valid_move(mask, last.corner, p.vertex.corner));
        let Some(idx) = next else {
            debug!(
                "outline::walk stuck at {} placed={} stranded={}",
                last,
                placed.len(),
                pending.len()
            );
            return Err(OutlineError::IncompleteContour {
                last,
                stranded: pending.len(),
                placed: placed.len(),
            });
        };
        placed.push(pending.remove(idx).vertex);
    }

    debug!("outline::walk placed={} vertices", placed.len());
    Ok(Contour::from_ordered(placed))
}
