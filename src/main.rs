use sprite_outline::image::AlphaF32;
use sprite_outline::{generate_contour, OutlineParams, PixelWindow};

fn main() {
    env_logger::init();

    // Demo stub: paints an L-shaped sprite and prints its collider polygon
    let mut sprite = AlphaF32::new(16, 16);
    sprite.fill_rect(2, 2, 6, 14, 1.0);
    sprite.fill_rect(6, 10, 13, 14, 1.0);

    let window = PixelWindow::covering(&sprite)
        .with_centered_pivot()
        .with_pixels_per_unit(16.0);
    match generate_contour(&sprite, window, &OutlineParams::default()) {
        Ok(contour) => {
            println!("vertices={}", contour.len());
            for v in contour.vertices() {
                println!("  {} -> [{:.4}, {:.4}]", v.corner, v.position[0], v.position[1]);
            }
        }
        Err(err) => println!("no collider: {err}"),
    }
}
