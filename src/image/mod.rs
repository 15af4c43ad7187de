pub mod f32;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::f32::AlphaF32;
pub use self::io::SpriteSheet;
pub use self::traits::{AlphaPixel, AlphaSource, ImageView};
pub use self::u8::AlphaU8;
