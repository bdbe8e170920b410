//! Wire types for progress persistence and watch-stats tracking.

use crate::ids::RecordingID;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Progress update sent to the DVR service.
///
/// Clients typically send one every 10-30 seconds during playback and a
/// final one on exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UpdateRecordingProgressRequest {
    pub recording_id: RecordingID,
    /// Current playback position in milliseconds
    pub position_ms: u64,
}

/// Kind of content a watch-stats session is tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WatchContentType {
    DvrRecording,
    LiveChannel,
}

impl WatchContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WatchContentType::DvrRecording => "dvr_recording",
            WatchContentType::LiveChannel => "live_channel",
        }
    }
}

/// Payload opening a watch-stats session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WatchSessionStart {
    pub content_id: RecordingID,
    pub content_type: WatchContentType,
    pub title: String,
}
