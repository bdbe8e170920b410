//! DVR recording records as served by the DVR backend.

use crate::commercial::Commercial;
use crate::ids::{ChannelID, RecordingID};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lifecycle of a DVR capture job.
///
/// Transitions server-side: `Pending -> Recording -> Completed` (or
/// `-> Failed`). Playback clients only ever read this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RecordingStatus {
    Pending,
    Recording,
    Completed,
    Failed,
}

impl RecordingStatus {
    /// The capture is still writing; the playable duration keeps growing.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, RecordingStatus::Recording)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RecordingStatus::Completed | RecordingStatus::Failed)
    }
}

/// One DVR-captured program instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Recording {
    pub id: RecordingID,
    pub title: String,
    /// Episode or subtitle line when the program is part of a series
    pub episode_title: Option<String>,
    pub channel_id: Option<ChannelID>,
    pub status: RecordingStatus,
    /// Scheduled capture window, unix seconds
    pub start_time: i64,
    pub end_time: i64,
    /// Last known playback offset in milliseconds
    pub view_offset_ms: u64,
    /// Detected advertisement intervals, sorted ascending by start
    pub commercials: Vec<Commercial>,
    pub file_size_bytes: Option<u64>,
    pub thumbnail_url: Option<String>,
}

impl Recording {
    /// The capture is still writing; the playable duration keeps growing.
    pub fn is_in_progress(&self) -> bool {
        self.status.is_in_progress()
    }

    /// Whether there is any captured content to play at all.
    pub fn is_playable(&self) -> bool {
        matches!(
            self.status,
            RecordingStatus::Recording | RecordingStatus::Completed
        )
    }

    /// Scheduled length of the capture window, in seconds.
    pub fn scheduled_duration_secs(&self) -> i64 {
        (self.end_time - self.start_time).max(0)
    }

    /// Display label combining title and episode line.
    pub fn display_title(&self) -> String {
        match &self.episode_title {
            Some(episode) => format!("{} - {}", self.title, episode),
            None => self.title.clone(),
        }
    }
}
