use crate::frames::FrameSpec;
use crate::outline::OutlineParams;
use crate::window::PixelWindow;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Scale applied when a frame does not set `pixels_per_unit`.
pub const DEFAULT_PIXELS_PER_UNIT: f32 = 100.0;

#[derive(Debug, Deserialize)]
pub struct OutlineToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub outline: OutlineParams,
    /// Frames to outline; empty means one frame covering the whole sheet.
    #[serde(default)]
    pub frames: Vec<FrameConfig>,
    pub output: OutlineOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct FrameConfig {
    /// Frame key; defaults to the position in `frames`.
    #[serde(default)]
    pub index: Option<usize>,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Pivot in pixels from the frame origin; defaults to the frame centre.
    #[serde(default)]
    pub pivot: Option<[f32; 2]>,
    #[serde(default)]
    pub pixels_per_unit: Option<f32>,
}

impl FrameConfig {
    pub fn resolve(&self, position: usize) -> FrameSpec {
        let mut window = PixelWindow::new(self.x, self.y, self.width, self.height)
            .with_pixels_per_unit(self.pixels_per_unit.unwrap_or(DEFAULT_PIXELS_PER_UNIT));
        window = match self.pivot {
            Some(pivot) => window.with_pivot(pivot),
            None => window.with_centered_pivot(),
        };
        FrameSpec {
            index: self.index.unwrap_or(position),
            window,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OutlineOutputConfig {
    pub report_json: PathBuf,
    /// When set, one mask PNG per frame is written here.
    #[serde(default)]
    pub debug_dir: Option<PathBuf>,
}

impl OutlineToolConfig {
    /// Frame windows to process for a sheet of `(width, height)` pixels.
    pub fn frame_specs(&self, sheet: (usize, usize)) -> Vec<FrameSpec> {
        if self.frames.is_empty() {
            let w = i32::try_from(sheet.0).unwrap_or(i32::MAX);
            let h = i32::try_from(sheet.1).unwrap_or(i32::MAX);
            let whole = FrameConfig {
                index: Some(0),
                x: 0,
                y: 0,
                width: w,
                height: h,
                pivot: None,
                pixels_per_unit: None,
            };
            return vec![whole.resolve(0)];
        }
        self.frames
            .iter()
            .enumerate()
            .map(|(i, f)| f.resolve(i))
            .collect()
    }
}

pub fn load_config(path: &Path) -> Result<OutlineToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(json: &str) -> Result<OutlineToolConfig, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg = parse_config(
            r#"{ "input": "hero.png", "output": { "report_json": "out/hero.json" } }"#,
        )
        .unwrap();
        assert_eq!(cfg.outline, OutlineParams::default());
        assert!(cfg.output.debug_dir.is_none());

        let specs = cfg.frame_specs((64, 32));
        assert_eq!(specs.len(), 1);
        let w = specs[0].window;
        assert_eq!((w.x_offset, w.y_offset, w.width, w.height), (0, 0, 64, 32));
        assert_eq!(w.pivot, [32.0, 16.0]);
        assert_eq!(w.pixels_per_unit, DEFAULT_PIXELS_PER_UNIT);
    }

    #[test]
    fn frames_resolve_indices_pivots_and_scale() {
        let cfg = parse_config(
            r#"{
                "input": "sheet.png",
                "outline": { "min_transparency": 0.1 },
                "frames": [
                    { "x": 0, "y": 0, "width": 16, "height": 16 },
                    { "index": 9, "x": 16, "y": 0, "width": 16, "height": 16,
                      "pivot": [8.0, 0.0], "pixels_per_unit": 16.0 }
                ],
                "output": { "report_json": "r.json", "debug_dir": "dbg" }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.outline.min_transparency, 0.1);
        assert!(cfg.outline.clip_to_window);

        let specs = cfg.frame_specs((32, 16));
        assert_eq!(specs[0].index, 0);
        assert_eq!(specs[0].window.pivot, [8.0, 8.0]);
        assert_eq!(specs[1].index, 9);
        assert_eq!(specs[1].window.x_offset, 16);
        assert_eq!(specs[1].window.pivot, [8.0, 0.0]);
        assert_eq!(specs[1].window.pixels_per_unit, 16.0);
        assert_eq!(cfg.output.debug_dir.as_deref(), Some(Path::new("dbg")));
    }
}
