//! Pixel windows and their thresholded opacity.
//!
//! A [`PixelWindow`] names a rectangle inside a pixel source (typically one
//! frame of a sprite atlas) together with the pivot and pixels-per-unit scale
//! used to place outline vertices in sprite space. It is a plain value and is
//! passed by copy into every stage.
//!
//! [`OpacityMask`] samples the source once per generation pass and answers the
//! binary "is this pixel opaque" question used by both the vertex detector and
//! the step validity check. The mask covers the window plus a margin so the
//! detector's 2×2 neighborhoods never leave it.
use crate::error::OutlineError;
use crate::image::AlphaSource;
use crate::outline::OutlineParams;
use crate::types::{Corner, Vertex};
use serde::{Deserialize, Serialize};

/// Rectangular region of a pixel source, plus its sprite-space transform.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelWindow {
    /// Left edge in source pixels.
    pub x_offset: i32,
    /// Top edge in source pixels.
    pub y_offset: i32,
    pub width: i32,
    pub height: i32,
    /// Pivot in pixels, relative to the window origin.
    pub pivot: [f32; 2],
    pub pixels_per_unit: f32,
}

impl PixelWindow {
    /// Window at `(x_offset, y_offset)` with zero pivot and unit scale, so
    /// vertex positions equal their grid corners.
    pub fn new(x_offset: i32, y_offset: i32, width: i32, height: i32) -> Self {
        Self {
            x_offset,
            y_offset,
            width,
            height,
            pivot: [0.0, 0.0],
            pixels_per_unit: 1.0,
        }
    }

    /// Window spanning the whole source.
    pub fn covering<S: AlphaSource + ?Sized>(source: &S) -> Self {
        let (w, h) = source.dimensions();
        Self::new(0, 0, clamp_dim(w), clamp_dim(h))
    }

    pub fn with_pivot(mut self, pivot: [f32; 2]) -> Self {
        self.pivot = pivot;
        self
    }

    /// Pivot at the window centre.
    pub fn with_centered_pivot(mut self) -> Self {
        self.pivot = [self.width as f32 * 0.5, self.height as f32 * 0.5];
        self
    }

    pub fn with_pixels_per_unit(mut self, pixels_per_unit: f32) -> Self {
        self.pixels_per_unit = pixels_per_unit;
        self
    }

    /// Reject empty windows and unusable scales.
    pub fn validate(&self) -> Result<(), OutlineError> {
        let scale_ok = self.pixels_per_unit.is_finite() && self.pixels_per_unit > 0.0;
        if self.width <= 0 || self.height <= 0 || !scale_ok {
            return Err(self.invalid());
        }
        Ok(())
    }

    /// The window rectangle lies inside a `width × height` source.
    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        let right = i64::from(self.x_offset) + i64::from(self.width);
        let bottom = i64::from(self.y_offset) + i64::from(self.height);
        self.x_offset >= 0
            && self.y_offset >= 0
            && u64::try_from(right).is_ok_and(|r| r <= width as u64)
            && u64::try_from(bottom).is_ok_and(|b| b <= height as u64)
    }

    fn invalid(&self) -> OutlineError {
        OutlineError::InvalidGeometry {
            width: self.width,
            height: self.height,
            pixels_per_unit: self.pixels_per_unit,
        }
    }

    /// Sprite-space position of a window-local grid corner.
    #[inline]
    pub fn position(&self, corner: Corner) -> [f32; 2] {
        let inv = 1.0 / self.pixels_per_unit;
        [
            (corner.x as f32 - self.pivot[0]) * inv,
            (corner.y as f32 - self.pivot[1]) * inv,
        ]
    }

    #[inline]
    pub fn vertex(&self, corner: Corner) -> Vertex {
        Vertex {
            corner,
            position: self.position(corner),
        }
    }

    /// Whether the window-local pixel `(lx, ly)` lies inside the window.
    #[inline]
    pub fn contains_local(&self, lx: i32, ly: i32) -> bool {
        lx >= 0 && ly >= 0 && lx < self.width && ly < self.height
    }
}

fn clamp_dim(v: usize) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// Pixels of margin kept on every side of the window.
///
/// The detector visits grid points `-1..=w`, whose 2×2 neighborhoods reach
/// local pixels `-1..=w + 1`.
const MASK_MARGIN_LO: i32 = 1;
const MASK_MARGIN_HI: i32 = 2;

/// Binary opacity of one window (plus margin), sampled once per pass.
#[derive(Clone, Debug)]
pub struct OpacityMask {
    window: PixelWindow,
    cols: usize,
    rows: usize,
    opaque: Vec<bool>,
}

impl OpacityMask {
    /// Threshold the window's pixels: opaque iff `alpha > min_transparency`.
    ///
    /// With `clip_to_window`, every pixel outside the window rectangle counts
    /// as transparent; otherwise margin pixels are read from the source (and
    /// pixels outside the source are transparent either way).
    ///
    /// Windows that extend past the source, or whose margin-padded size does
    /// not fit in an `i32`, are rejected as [`OutlineError::InvalidGeometry`].
    pub fn build<S: AlphaSource + ?Sized>(
        source: &S,
        window: PixelWindow,
        params: &OutlineParams,
    ) -> Result<Self, OutlineError> {
        window.validate()?;
        let (src_w, src_h) = source.dimensions();
        if !window.fits_within(src_w, src_h) {
            return Err(window.invalid());
        }
        let padded = |len: i32| {
            len.checked_add(MASK_MARGIN_LO + MASK_MARGIN_HI)
                .map(|n| n as usize)
                .ok_or_else(|| window.invalid())
        };
        let cols = padded(window.width)?;
        let rows = padded(window.height)?;
        let mut opaque = vec![false; cols * rows];

        for row in 0..rows {
            let ly = row as i32 - MASK_MARGIN_LO;
            for col in 0..cols {
                let lx = col as i32 - MASK_MARGIN_LO;
                if params.clip_to_window && !window.contains_local(lx, ly) {
                    continue;
                }
                let ax = window.x_offset.saturating_add(lx);
                let ay = window.y_offset.saturating_add(ly);
                opaque[row * cols + col] = params.is_opaque(source.alpha(ax, ay));
            }
        }

        Ok(Self {
            window,
            cols,
            rows,
            opaque,
        })
    }

    pub fn window(&self) -> PixelWindow {
        self.window
    }

    /// Opacity of window-local pixel `(lx, ly)`; transparent beyond the margin.
    #[inline]
    pub fn is_opaque(&self, lx: i32, ly: i32) -> bool {
        let col = lx + MASK_MARGIN_LO;
        let row = ly + MASK_MARGIN_LO;
        if col < 0 || row < 0 {
            return false;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.cols || row >= self.rows {
            return false;
        }
        self.opaque[row * self.cols + col]
    }

    #[inline]
    pub fn contains_local(&self, lx: i32, ly: i32) -> bool {
        self.window.contains_local(lx, ly)
    }

    /// Inclusive local pixel range covered by the mask: `(min_x, min_y, max_x, max_y)`.
    pub fn local_bounds(&self) -> (i32, i32, i32, i32) {
        (
            -MASK_MARGIN_LO,
            -MASK_MARGIN_LO,
            self.cols as i32 - MASK_MARGIN_LO - 1,
            self.rows as i32 - MASK_MARGIN_LO - 1,
        )
    }

    /// Number of opaque pixels inside the window rectangle.
    pub fn opaque_count(&self) -> usize {
        (0..self.window.height)
            .flat_map(|ly| (0..self.window.width).map(move |lx| (lx, ly)))
            .filter(|&(lx, ly)| self.is_opaque(lx, ly))
            .count()
    }

    /// All window pixels share one opacity state.
    pub fn is_uniform(&self) -> bool {
        let count = self.opaque_count();
        count == 0 || count == self.window.width as usize * self.window.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::AlphaF32;

    #[test]
    fn validate_rejects_degenerate_windows() {
        assert!(PixelWindow::new(0, 0, 4, 4).validate().is_ok());
        for window in [
            PixelWindow::new(0, 0, 0, 4),
            PixelWindow::new(0, 0, 4, -1),
            PixelWindow::new(0, 0, 4, 4).with_pixels_per_unit(0.0),
            PixelWindow::new(0, 0, 4, 4).with_pixels_per_unit(f32::NAN),
        ] {
            assert!(
                matches!(window.validate(), Err(OutlineError::InvalidGeometry { .. })),
                "expected {window:?} to be rejected"
            );
        }
    }

    #[test]
    fn position_applies_pivot_and_scale() {
        let window = PixelWindow::new(10, 20, 8, 8)
            .with_centered_pivot()
            .with_pixels_per_unit(4.0);
        assert_eq!(window.position(Corner::new(4, 4)), [0.0, 0.0]);
        assert_eq!(window.position(Corner::new(0, 8)), [-1.0, 1.0]);
    }

    #[test]
    fn mask_clips_to_window_by_default() {
        let img = AlphaF32::filled(6, 6, 1.0);
        let window = PixelWindow::new(2, 2, 2, 2);
        let clipped = OpacityMask::build(&img, window, &OutlineParams::default()).unwrap();
        assert!(clipped.is_opaque(0, 0));
        assert!(clipped.is_opaque(1, 1));
        assert!(!clipped.is_opaque(-1, 0));
        assert!(!clipped.is_opaque(2, 1));
        assert_eq!(clipped.opaque_count(), 4);

        let params = OutlineParams {
            clip_to_window: false,
            ..Default::default()
        };
        let open = OpacityMask::build(&img, window, &params).unwrap();
        assert!(open.is_opaque(-1, -1));
        assert!(open.is_opaque(3, 3));
        // Beyond the margin nothing is sampled.
        assert!(!open.is_opaque(4, 0));
        assert_eq!(open.local_bounds(), (-1, -1, 3, 3));
        assert!(open.is_uniform());
    }

    /// Source that reports a huge size and is transparent everywhere.
    struct Boundless;

    impl AlphaSource for Boundless {
        fn dimensions(&self) -> (usize, usize) {
            (usize::MAX, usize::MAX)
        }

        fn alpha(&self, _x: i32, _y: i32) -> f32 {
            0.0
        }
    }

    #[test]
    fn oversized_windows_are_rejected_before_sampling() {
        let img = AlphaF32::new(64, 64);
        let params = OutlineParams::default();
        for window in [
            PixelWindow::new(0, 0, i32::MAX, 1),
            PixelWindow::new(0, 0, 100_000, 100_000),
            PixelWindow::new(60, 0, 8, 8),
            PixelWindow::new(-1, 0, 8, 8),
        ] {
            assert!(
                matches!(
                    OpacityMask::build(&img, window, &params),
                    Err(OutlineError::InvalidGeometry { .. })
                ),
                "expected {window:?} to be rejected"
            );
        }
        assert!(OpacityMask::build(&img, PixelWindow::new(56, 56, 8, 8), &params).is_ok());

        let window = PixelWindow::new(0, 0, i32::MAX, 1);
        assert!(window.fits_within(usize::MAX, usize::MAX));
        assert!(matches!(
            OpacityMask::build(&Boundless, window, &params),
            Err(OutlineError::InvalidGeometry { width: i32::MAX, .. })
        ));
    }
}
