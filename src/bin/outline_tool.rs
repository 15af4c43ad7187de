use log::{info, warn};
use serde::Serialize;
use sprite_outline::config::outline_tool::{load_config, OutlineToolConfig};
use sprite_outline::image::io::{load_sprite_sheet, save_mask_png, write_json_file};
use sprite_outline::image::{ImageView, SpriteSheet};
use sprite_outline::{detect_vertices, ColliderSet, FrameOutcome, FrameSpec, OpacityMask};
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let sheet = load_sprite_sheet(&config.input)?;
    let frames = config.frame_specs((sheet.width(), sheet.height()));
    info!(
        "outline_tool: {} frame(s) from {} ({}x{})",
        frames.len(),
        config.input.display(),
        sheet.width(),
        sheet.height()
    );

    let mut colliders = ColliderSet::new();
    let report = colliders.regenerate(&sheet, &frames, &config.outline);

    let summary = OutlineSummary {
        input: config.input.clone(),
        width: sheet.width(),
        height: sheet.height(),
        min_transparency: config.outline.min_transparency,
        clip_to_window: config.outline.clip_to_window,
        generated: report.generated(),
        skipped: report.skipped(),
        failed: report.failed(),
        total_ms: report.timing.total_ms,
        frames: report
            .frames
            .iter()
            .zip(&report.timing.frames)
            .map(|(record, timing)| FrameSummary {
                index: record.index,
                outcome: record.outcome.clone(),
                elapsed_ms: timing.elapsed_ms,
                points: colliders
                    .get(record.index)
                    .map(|c| c.positions())
                    .unwrap_or_default(),
            })
            .collect(),
    };
    write_json_file(&config.output.report_json, &summary)?;

    if let Some(dir) = &config.output.debug_dir {
        save_debug_masks(&config, &sheet, &frames, &colliders, dir)?;
    }

    println!(
        "Outlined {} of {} frame(s) ({} skipped, {} failed) in {:.3} ms",
        summary.generated,
        summary.frames.len(),
        summary.skipped,
        summary.failed,
        summary.total_ms
    );
    if let Some(slowest) = report.timing.slowest() {
        println!(
            "Slowest frame {} took {:.3} ms",
            slowest.index, slowest.elapsed_ms
        );
    }
    println!("Saved report to {}", config.output.report_json.display());

    if summary.failed > 0 {
        return Err(format!("{} frame(s) failed to outline", summary.failed));
    }
    Ok(())
}

/// Write one mask PNG per frame. Generated frames show their ordered contour;
/// the rest show whatever corners detection found.
fn save_debug_masks(
    config: &OutlineToolConfig,
    sheet: &SpriteSheet,
    frames: &[FrameSpec],
    colliders: &ColliderSet,
    dir: &Path,
) -> Result<(), String> {
    for frame in frames {
        let mask = match OpacityMask::build(sheet, frame.window, &config.outline) {
            Ok(mask) => mask,
            Err(err) => {
                warn!("outline_tool: no debug mask for frame {}: {err}", frame.index);
                continue;
            }
        };
        let corners = match colliders.get(frame.index) {
            Some(contour) => contour.corners(),
            None => detect_vertices(sheet, frame.window, &config.outline)
                .map(|set| set.corners())
                .unwrap_or_default(),
        };
        let path = dir.join(format!("frame_{:03}.png", frame.index));
        save_mask_png(&mask, &corners, &path)?;
    }
    println!("Saved {} debug mask(s) to {}", frames.len(), dir.display());
    Ok(())
}

fn usage() -> String {
    "Usage: outline_tool <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OutlineSummary {
    input: PathBuf,
    width: usize,
    height: usize,
    min_transparency: f32,
    clip_to_window: bool,
    generated: usize,
    skipped: usize,
    failed: usize,
    total_ms: f64,
    frames: Vec<FrameSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FrameSummary {
    index: usize,
    outcome: FrameOutcome,
    elapsed_ms: f64,
    points: Vec<[f32; 2]>,
}
