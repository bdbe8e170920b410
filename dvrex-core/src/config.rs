//! Tunable constants for playback behavior.

use serde::{Deserialize, Serialize};

/// Knobs governing live-edge seeking, chapter navigation, and progress
/// persistence cadence.
///
/// The defaults are the shipped behavior; embedders may override any field
/// before constructing a session manager. The two chapter tolerances are
/// deliberately asymmetric: a "previous" press near the start of a segment
/// should land on the segment before it, not restart the current one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackTunables {
    /// Distance to stay behind the write head when seeking to the live edge
    pub live_edge_buffer_ms: u64,
    /// Forward chapter jumps ignore boundaries within this distance
    pub next_chapter_tolerance_ms: u64,
    /// Backward jumps within this distance of a boundary target the
    /// boundary before it
    pub previous_chapter_tolerance_ms: u64,
    /// Suggested cadence for periodic progress saves; the caller owns the
    /// timer, the controller imposes no minimum interval
    pub progress_save_interval_ms: u64,
}

impl Default for PlaybackTunables {
    fn default() -> Self {
        Self {
            live_edge_buffer_ms: 10_000,
            next_chapter_tolerance_ms: 1_000,
            previous_chapter_tolerance_ms: 3_000,
            progress_save_interval_ms: 15_000,
        }
    }
}
