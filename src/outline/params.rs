use serde::{Deserialize, Serialize};

/// Knobs shared by vertex detection and step validation.
///
/// - `min_transparency`: a pixel is opaque iff its alpha is strictly greater
///   than this value. `0.0` treats any non-zero alpha as opaque; raise it to
///   ignore faint antialiasing fringes.
/// - `clip_to_window`: treat pixels outside the window rectangle as
///   transparent, so neighbouring atlas frames never bleed into the outline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineParams {
    pub min_transparency: f32,
    pub clip_to_window: bool,
}

impl Default for OutlineParams {
    fn default() -> Self {
        Self {
            min_transparency: 0.0,
            clip_to_window: true,
        }
    }
}

impl OutlineParams {
    pub fn with_min_transparency(mut self, min_transparency: f32) -> Self {
        self.min_transparency = min_transparency;
        self
    }

    #[inline]
    pub fn is_opaque(&self, alpha: f32) -> bool {
        alpha > self.min_transparency
    }
}
