use crate::frames::FrameKey;
use serde::{Deserialize, Serialize};

/// Wall-clock time spent outlining one frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameTiming {
    pub index: FrameKey,
    pub elapsed_ms: f64,
}

/// Timing trace of a batch run, one entry per processed frame in order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub frames: Vec<FrameTiming>,
}

impl TimingBreakdown {
    pub fn record(&mut self, index: FrameKey, elapsed_ms: f64) {
        self.frames.push(FrameTiming { index, elapsed_ms });
    }

    pub fn slowest(&self) -> Option<FrameTiming> {
        self.frames
            .iter()
            .copied()
            .max_by(|a, b| a.elapsed_ms.total_cmp(&b.elapsed_ms))
    }

    /// Mean per-frame time; zero for an empty batch.
    pub fn mean_ms(&self) -> f64 {
        if self.frames.is_empty() {
            return 0.0;
        }
        self.frames.iter().map(|f| f.elapsed_ms).sum::<f64>() / self.frames.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slowest_and_mean_cover_recorded_frames() {
        let mut timing = TimingBreakdown::default();
        assert_eq!(timing.slowest(), None);
        assert_eq!(timing.mean_ms(), 0.0);

        timing.record(0, 1.0);
        timing.record(4, 5.0);
        timing.record(2, 3.0);
        assert_eq!(
            timing.slowest(),
            Some(FrameTiming {
                index: 4,
                elapsed_ms: 5.0
            })
        );
        assert_eq!(timing.mean_ms(), 3.0);
    }
}
