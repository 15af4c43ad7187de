//! Owned single-channel f32 alpha plane in row-major layout (stride == width).
//!
//! Values are alpha in `[0, 1]`; anything outside that range is clamped when
//! read through [`AlphaSource`](crate::image::AlphaSource).
#[derive(Clone, Debug)]
pub struct AlphaF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl AlphaF32 {
    /// Construct a fully transparent plane of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0.0; w * h],
        }
    }

    /// Construct a plane filled with a constant alpha.
    pub fn filled(w: usize, h: usize, alpha: f32) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![alpha; w * h],
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    /// Set the alpha value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Set every pixel of the half-open rectangle `[x0, x1) × [y0, y1)`,
    /// clipped to the plane.
    pub fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, v: f32) {
        for y in y0..y1.min(self.h) {
            for x in x0..x1.min(self.w) {
                self.set(x, y, v);
            }
        }
    }
}

impl crate::image::traits::ImageView for AlphaF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
