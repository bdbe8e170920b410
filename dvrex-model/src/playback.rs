//! Playback entry modes and session lifecycle phases.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Requested entry behavior when starting playback of a recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PlaybackMode {
    /// Resume a finished recording at its saved offset; start a live
    /// recording from the beginning.
    #[default]
    Default,
    /// Jump to the live edge once the player reports a duration.
    Live,
    /// Start from the beginning regardless of saved progress.
    Start,
}

/// Lifecycle of a playback session as observed by the UI.
///
/// `Idle -> Loading -> Ready -> Playing <-> Paused -> Ended`, with
/// `Loading -> Failed` on any load error. `Failed` is terminal for the
/// session; recovery is a fresh load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SessionPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Playing,
    Paused,
    Ended,
    Failed,
}

impl SessionPhase {
    /// A session descriptor exists and playback may be driven.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            SessionPhase::Ready | SessionPhase::Playing | SessionPhase::Paused
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionPhase::Ended | SessionPhase::Failed)
    }
}
