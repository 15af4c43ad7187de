/// Frame edge length of the synthetic walk-cycle sheet.
pub const FRAME: usize = 16;

/// Paints `value` into the half-open rectangle `[x0, x1) × [y0, y1)`.
pub fn fill_rect(
    buf: &mut [u8],
    stride: usize,
    (x0, y0, x1, y1): (usize, usize, usize, usize),
    value: u8,
) {
    for y in y0..y1 {
        for x in x0..x1 {
            buf[y * stride + x] = value;
        }
    }
}

/// Four 16×16 frames in one row: a rectangle, an L, a plus sign and an empty
/// frame. Returns the alpha bytes and the sheet width.
pub fn walk_cycle_sheet() -> (Vec<u8>, usize) {
    let width = FRAME * 4;
    let mut alpha = vec![0u8; width * FRAME];
    fill_rect(&mut alpha, width, (3, 4, 13, 12), 255);

    let ox = FRAME;
    fill_rect(&mut alpha, width, (ox + 2, 2, ox + 6, 14), 255);
    fill_rect(&mut alpha, width, (ox + 6, 10, ox + 13, 14), 255);

    let ox = FRAME * 2;
    fill_rect(&mut alpha, width, (ox + 6, 2, ox + 10, 14), 255);
    fill_rect(&mut alpha, width, (ox + 2, 6, ox + 14, 10), 255);
    (alpha, width)
}

/// 16×16 square with a one-pixel row of faint alpha (5/255) along its top.
pub fn fringed_square() -> Vec<u8> {
    let mut alpha = vec![0u8; FRAME * FRAME];
    fill_rect(&mut alpha, FRAME, (4, 4, 12, 12), 255);
    fill_rect(&mut alpha, FRAME, (3, 3, 13, 4), 5);
    alpha
}

/// 16×16 ring: a square with a transparent hole in the middle.
pub fn ring() -> Vec<u8> {
    let mut alpha = vec![0u8; FRAME * FRAME];
    fill_rect(&mut alpha, FRAME, (3, 3, 13, 13), 255);
    fill_rect(&mut alpha, FRAME, (6, 6, 10, 10), 0);
    alpha
}
