//! Diagnostics attached to batch runs: per-frame wall-clock timings that the
//! outline tool serialises next to each frame's outcome.

pub mod timing;

pub use timing::{FrameTiming, TimingBreakdown};
