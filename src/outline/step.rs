use super::detector::is_saddle;
use crate::types::Corner;
use crate::window::OpacityMask;

/// Axis-aligned move between two grid corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// Along row line `y`, covering unit cells `x0..x1`.
    Horizontal { y: i32, x0: i32, x1: i32 },
    /// Along column line `x`, covering unit cells `y0..y1`.
    Vertical { x: i32, y0: i32, y1: i32 },
}

impl Step {
    /// `None` for diagonal or zero-length moves.
    pub(crate) fn between(from: Corner, to: Corner) -> Option<Self> {
        if from == to || !from.is_aligned(to) {
            None
        } else if from.y == to.y {
            Some(Step::Horizontal {
                y: from.y,
                x0: from.x.min(to.x),
                x1: from.x.max(to.x),
            })
        } else {
            Some(Step::Vertical {
                x: from.x,
                y0: from.y.min(to.y),
                y1: from.y.max(to.y),
            })
        }
    }

    /// Grid corners strictly between the two endpoints.
    fn interior_corners(&self) -> impl Iterator<Item = Corner> {
        let (horizontal, line, lo, hi) = match *self {
            Step::Horizontal { y, x0, x1 } => (true, y, x0, x1),
            Step::Vertical { x, y0, y1 } => (false, x, y0, y1),
        };
        (lo + 1..hi).map(move |t| {
            if horizontal {
                Corner::new(t, line)
            } else {
                Corner::new(line, t)
            }
        })
    }

    /// Every unit cell of the step separates an opaque pixel from a
    /// transparent one: above vs below for horizontal steps, left vs right for
    /// vertical ones. A single uniform cell means the step cuts through empty
    /// space or solid interior and is rejected, and so does passing through a
    /// diagonal saddle, where two regions touch only at a corner.
    pub(crate) fn follows_boundary(&self, mask: &OpacityMask) -> bool {
        let separates = match *self {
            Step::Horizontal { y, x0, x1 } => {
                (x0..x1).all(|x| mask.is_opaque(x, y - 1) != mask.is_opaque(x, y))
            }
            Step::Vertical { x, y0, y1 } => {
                (y0..y1).all(|y| mask.is_opaque(x - 1, y) != mask.is_opaque(x, y))
            }
        };
        separates && !self.interior_corners().any(|c| is_saddle(mask, c))
    }
}

/// The step validity check: axis-aligned and boundary-following.
#[inline]
pub(crate) fn is_valid_move(mask: &OpacityMask, from: Corner, to: Corner) -> bool {
    Step::between(from, to).is_some_and(|step| step.follows_boundary(mask))
}
