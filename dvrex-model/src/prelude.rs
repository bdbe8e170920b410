//! Playback-controller focused snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in presentation or adapter layers.

pub use super::commercial::{Commercial, CommercialMatch};
pub use super::ids::{ChannelID, RecordingID};
pub use super::playback::{PlaybackMode, SessionPhase};
pub use super::progress::{
    UpdateRecordingProgressRequest, WatchContentType, WatchSessionStart,
};
pub use super::recording::{Recording, RecordingStatus};
