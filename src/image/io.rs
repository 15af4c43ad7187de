//! I/O helpers for sprite sheets and JSON.
//!
//! - `load_sprite_sheet`: decode a PNG/TGA/etc. and keep only its alpha plane.
//! - `save_mask_png`: write a window's opacity mask with contour corners marked.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::ImageView;
use crate::types::Corner;
use crate::window::OpacityMask;
use image::{Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Pixels per mask cell in debug renders. Corners land on cell boundaries.
const MASK_CELL_PX: u32 = 4;

const TRANSPARENT_RGB: Rgb<u8> = Rgb([24, 24, 32]);
const OPAQUE_RGB: Rgb<u8> = Rgb([200, 200, 200]);
const OUTSIDE_RGB: Rgb<u8> = Rgb([64, 24, 24]);
const CORNER_RGB: Rgb<u8> = Rgb([255, 40, 40]);
const SEED_RGB: Rgb<u8> = Rgb([40, 255, 80]);

/// Owned 8-bit alpha plane of a decoded sprite sheet.
#[derive(Clone, Debug)]
pub struct SpriteSheet {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl SpriteSheet {
    /// Construct an owned alpha plane given raw bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        let stride = width;
        Self {
            width,
            height,
            stride,
            data,
        }
    }

}

impl ImageView for SpriteSheet {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }
}

/// Load an image from disk and extract its alpha channel.
///
/// Images without an alpha channel decode as fully opaque.
pub fn load_sprite_sheet(path: &Path) -> Result<SpriteSheet, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.pixels().map(|px| px.0[3]).collect();
    Ok(SpriteSheet::new(width, height, data))
}

/// Render an opacity mask to PNG, marking each contour corner.
///
/// The first corner (the walk seed) is drawn in a distinct colour. The mask
/// margin (one pixel around the window) is tinted so clipping is visible.
pub fn save_mask_png(mask: &OpacityMask, corners: &[Corner], path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let (min_x, min_y, max_x, max_y) = mask.local_bounds();
    let cols = (max_x - min_x + 1) as u32;
    let rows = (max_y - min_y + 1) as u32;
    let mut out = RgbImage::new(cols * MASK_CELL_PX + 1, rows * MASK_CELL_PX + 1);

    for ly in min_y..=max_y {
        for lx in min_x..=max_x {
            let colour = if mask.is_opaque(lx, ly) {
                OPAQUE_RGB
            } else if mask.contains_local(lx, ly) {
                TRANSPARENT_RGB
            } else {
                OUTSIDE_RGB
            };
            let px0 = (lx - min_x) as u32 * MASK_CELL_PX;
            let py0 = (ly - min_y) as u32 * MASK_CELL_PX;
            for dy in 0..MASK_CELL_PX {
                for dx in 0..MASK_CELL_PX {
                    out.put_pixel(px0 + dx, py0 + dy, colour);
                }
            }
        }
    }

    for (i, corner) in corners.iter().enumerate() {
        let cx = corner.x - min_x;
        let cy = corner.y - min_y;
        if cx < 0 || cy < 0 {
            continue;
        }
        let (px, py) = (cx as u32 * MASK_CELL_PX, cy as u32 * MASK_CELL_PX);
        if px >= out.width() || py >= out.height() {
            continue;
        }
        let colour = if i == 0 { SEED_RGB } else { CORNER_RGB };
        out.put_pixel(px, py, colour);
    }

    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
