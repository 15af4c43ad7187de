//! Batch outline generation for animation frames.
//!
//! Each frame of an animated sprite is a [`PixelWindow`] into one sheet.
//! [`generate_frames`] runs the outline pipeline on every frame and hands the
//! successful contours to a [`PolygonSink`] keyed by frame index. A frame that
//! fails never aborts the batch; its outcome is recorded and any geometry the
//! sink still holds for it is cleared.
//!
//! [`ColliderSet`] is the in-crate sink. [`ColliderSet::regenerate`] builds a
//! complete new generation off to the side and then swaps it in, so the set is
//! never observed half rebuilt.
use crate::diagnostics::TimingBreakdown;
use crate::error::OutlineError;
use crate::image::AlphaSource;
use crate::outline::{generate_contour, OutlineParams};
use crate::types::Contour;
use crate::window::PixelWindow;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Instant;

/// Index of an animation frame.
pub type FrameKey = usize;

/// One frame to outline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameSpec {
    pub index: FrameKey,
    pub window: PixelWindow,
}

/// Consumer of generated polygons, keyed by frame.
pub trait PolygonSink {
    /// Install `contour` as the geometry for `key`, replacing any previous one.
    fn replace(&mut self, key: FrameKey, contour: Contour);
    /// Drop whatever geometry is held for `key`.
    fn clear(&mut self, key: FrameKey);
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum FrameOutcome {
    Generated { vertices: usize },
    /// Uniform frame; nothing to outline.
    Skipped { reason: OutlineError },
    Failed { error: OutlineError },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameRecord {
    pub index: FrameKey,
    pub outcome: FrameOutcome,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameBatchReport {
    pub frames: Vec<FrameRecord>,
    pub timing: TimingBreakdown,
}

impl FrameBatchReport {
    pub fn generated(&self) -> usize {
        self.count(|o| matches!(o, FrameOutcome::Generated { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, FrameOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FrameOutcome::Failed { .. }))
    }

    pub fn outcome(&self, index: FrameKey) -> Option<&FrameOutcome> {
        self.frames
            .iter()
            .rev()
            .find(|r| r.index == index)
            .map(|r| &r.outcome)
    }

    fn count(&self, pred: impl Fn(&FrameOutcome) -> bool) -> usize {
        self.frames.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// Outline every frame and write the results to `sink`.
///
/// The sink sees exactly one call per frame: `replace` after a successful
/// pass, `clear` otherwise. Frames are processed in the order given; if an
/// index repeats, the later frame wins.
pub fn generate_frames<S, K>(
    source: &S,
    frames: &[FrameSpec],
    params: &OutlineParams,
    sink: &mut K,
) -> FrameBatchReport
where
    S: AlphaSource + ?Sized,
    K: PolygonSink + ?Sized,
{
    let t0 = Instant::now();
    let mut report = FrameBatchReport::default();

    for frame in frames {
        let frame_start = Instant::now();
        let outcome = match generate_contour(source, frame.window, params) {
            Ok(contour) => {
                let vertices = contour.len();
                sink.replace(frame.index, contour);
                FrameOutcome::Generated { vertices }
            }
            Err(OutlineError::EmptyInput) => {
                debug!("frames: frame {} has uniform alpha, skipping", frame.index);
                sink.clear(frame.index);
                FrameOutcome::Skipped {
                    reason: OutlineError::EmptyInput,
                }
            }
            Err(error) => {
                warn!("frames: frame {} failed: {error}", frame.index);
                sink.clear(frame.index);
                FrameOutcome::Failed { error }
            }
        };
        report
            .timing
            .record(frame.index, frame_start.elapsed().as_secs_f64() * 1000.0);
        report.frames.push(FrameRecord {
            index: frame.index,
            outcome,
        });
    }

    report.timing.total_ms = t0.elapsed().as_secs_f64() * 1000.0;
    info!(
        "frames: {} generated, {} skipped, {} failed in {:.3} ms (mean {:.3} ms/frame)",
        report.generated(),
        report.skipped(),
        report.failed(),
        report.timing.total_ms,
        report.timing.mean_ms()
    );
    report
}

/// Stable collection of per-frame collider polygons.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ColliderSet {
    shapes: BTreeMap<FrameKey, Contour>,
}

impl ColliderSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, key: FrameKey) -> Option<&Contour> {
        self.shapes.get(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FrameKey, &Contour)> {
        self.shapes.iter().map(|(k, c)| (*k, c))
    }

    /// Install `next` as the current generation and return the previous one.
    pub fn replace_all(&mut self, next: ColliderSet) -> ColliderSet {
        std::mem::replace(self, next)
    }

    /// Regenerate every frame into a fresh set, then swap it in.
    ///
    /// Frames that fail or are skipped hold no geometry afterwards, and keys
    /// not listed in `frames` are dropped with the old generation.
    pub fn regenerate<S: AlphaSource + ?Sized>(
        &mut self,
        source: &S,
        frames: &[FrameSpec],
        params: &OutlineParams,
    ) -> FrameBatchReport {
        let mut staged = ColliderSet::new();
        let report = generate_frames(source, frames, params, &mut staged);
        let previous = self.replace_all(staged);
        debug!(
            "frames: committed {} shapes, discarded {} from previous generation",
            self.len(),
            previous.len()
        );
        report
    }
}

impl PolygonSink for ColliderSet {
    fn replace(&mut self, key: FrameKey, contour: Contour) {
        self.shapes.insert(key, contour);
    }

    fn clear(&mut self, key: FrameKey) {
        self.shapes.remove(&key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::AlphaF32;

    /// Sink that records every call in order.
    #[derive(Default)]
    struct RecordingSink {
        calls: Vec<(FrameKey, Option<usize>)>,
    }

    impl PolygonSink for RecordingSink {
        fn replace(&mut self, key: FrameKey, contour: Contour) {
            self.calls.push((key, Some(contour.len())));
        }

        fn clear(&mut self, key: FrameKey) {
            self.calls.push((key, None));
        }
    }

    /// Four 8x6 frames in a row: a square, an empty frame, two blobs, and a
    /// frame whose descriptor is degenerate.
    fn strip() -> (AlphaF32, Vec<FrameSpec>) {
        let mut img = AlphaF32::new(32, 6);
        img.fill_rect(2, 1, 5, 4, 1.0);
        img.fill_rect(17, 1, 19, 3, 1.0);
        img.fill_rect(21, 1, 23, 3, 1.0);
        let frames = vec![
            FrameSpec {
                index: 0,
                window: PixelWindow::new(0, 0, 8, 6),
            },
            FrameSpec {
                index: 1,
                window: PixelWindow::new(8, 0, 8, 6),
            },
            FrameSpec {
                index: 2,
                window: PixelWindow::new(16, 0, 8, 6),
            },
            FrameSpec {
                index: 3,
                window: PixelWindow::new(24, 0, 0, 6),
            },
        ];
        (img, frames)
    }

    #[test]
    fn batch_records_one_outcome_per_frame() {
        let (img, frames) = strip();
        let mut sink = RecordingSink::default();
        let report = generate_frames(&img, &frames, &OutlineParams::default(), &mut sink);

        assert_eq!(report.frames.len(), 4);
        assert_eq!(report.generated(), 1);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.failed(), 2);
        assert_eq!(
            report.outcome(0),
            Some(&FrameOutcome::Generated { vertices: 4 })
        );
        assert!(matches!(
            report.outcome(2),
            Some(FrameOutcome::Failed {
                error: OutlineError::IncompleteContour { stranded: 4, .. }
            })
        ));
        assert!(matches!(
            report.outcome(3),
            Some(FrameOutcome::Failed {
                error: OutlineError::InvalidGeometry { .. }
            })
        ));
        assert_eq!(
            sink.calls,
            vec![(0, Some(4)), (1, None), (2, None), (3, None)]
        );
        let order: Vec<FrameKey> = report.timing.frames.iter().map(|t| t.index).collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn regenerate_replaces_stale_geometry() {
        let (mut img, frames) = strip();
        let params = OutlineParams::default();
        let mut set = ColliderSet::new();
        set.replace(7, Contour::default());

        set.regenerate(&img, &frames, &params);
        assert_eq!(set.len(), 1);
        assert!(set.get(7).is_none());
        let first = set.get(0).cloned().expect("frame 0 outlined");

        // Frame 0 splits into two blobs; frame 1 gains a shape.
        img.fill_rect(3, 1, 4, 4, 0.0);
        img.fill_rect(10, 2, 12, 4, 1.0);
        let report = set.regenerate(&img, &frames, &params);
        assert!(matches!(
            report.outcome(0),
            Some(FrameOutcome::Failed { .. })
        ));
        assert!(set.get(0).is_none());
        assert_ne!(set.get(1), Some(&first));
        assert_eq!(set.get(1).map(|c| c.len()), Some(4));
    }

    #[test]
    fn report_serializes_outcomes_with_status_tags() {
        let (img, frames) = strip();
        let mut set = ColliderSet::new();
        let report = set.regenerate(&img, &frames[..2], &OutlineParams::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["frames"][0]["outcome"]["status"], "generated");
        assert_eq!(json["frames"][1]["outcome"]["status"], "skipped");
        assert_eq!(json["frames"][1]["outcome"]["reason"]["kind"], "emptyInput");
    }
}
