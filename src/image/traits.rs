/// Row-addressable single-channel image.
pub trait ImageView {
    type Pixel: AlphaPixel;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn stride(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    fn is_contiguous(&self) -> bool {
        self.stride() == self.width()
    }
}

/// Pixel types that carry an alpha value.
pub trait AlphaPixel: Copy {
    /// Alpha normalised to `[0, 1]`.
    fn to_alpha(self) -> f32;
}

impl AlphaPixel for u8 {
    #[inline]
    fn to_alpha(self) -> f32 {
        self as f32 / 255.0
    }
}

impl AlphaPixel for f32 {
    #[inline]
    fn to_alpha(self) -> f32 {
        self.clamp(0.0, 1.0)
    }
}

/// Pixel source queried by the outline stages.
///
/// Coordinates are absolute source pixels. Reads outside the source return
/// `0.0` (fully transparent) rather than failing, so callers may freely probe
/// one pixel past any edge.
pub trait AlphaSource {
    /// `(width, height)` of the source in pixels.
    fn dimensions(&self) -> (usize, usize);

    /// Alpha at `(x, y)` in `[0, 1]`.
    fn alpha(&self, x: i32, y: i32) -> f32;
}

impl<I> AlphaSource for I
where
    I: ImageView,
{
    #[inline]
    fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    #[inline]
    fn alpha(&self, x: i32, y: i32) -> f32 {
        if x < 0 || y < 0 {
            return 0.0;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width() || y >= self.height() {
            return 0.0;
        }
        self.row(y)[x].to_alpha()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{AlphaF32, AlphaU8};

    #[test]
    fn out_of_bounds_reads_are_transparent() {
        let data = vec![255u8; 4];
        let img = AlphaU8 {
            w: 2,
            h: 2,
            stride: 2,
            data: &data,
        };
        assert_eq!(img.alpha(0, 0), 1.0);
        assert_eq!(img.alpha(-1, 0), 0.0);
        assert_eq!(img.alpha(0, -1), 0.0);
        assert_eq!(img.alpha(2, 1), 0.0);
        assert_eq!(img.alpha(1, 2), 0.0);
        assert_eq!(img.dimensions(), (2, 2));
    }

    #[test]
    fn strided_rows_ignore_padding() {
        // 2x2 image stored with one padding byte per row.
        let data = vec![10u8, 20, 99, 30, 40, 99];
        let img = AlphaU8 {
            w: 2,
            h: 2,
            stride: 3,
            data: &data,
        };
        assert!(!img.is_contiguous());
        assert_eq!(img.row(1), &[30, 40]);
        assert!((img.alpha(1, 1) - 40.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn float_alpha_is_clamped() {
        let mut img = AlphaF32::new(1, 1);
        img.set(0, 0, 1.5);
        assert_eq!(img.alpha(0, 0), 1.0);
        img.set(0, 0, -0.25);
        assert_eq!(img.alpha(0, 0), 0.0);
    }
}
