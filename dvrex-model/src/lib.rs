//! Core data model definitions shared across Dvrex crates.
#![allow(missing_docs)]

pub mod commercial;
pub mod ids;
pub mod playback;
pub mod prelude;
pub mod progress;
pub mod recording;

// Intentionally curated re-exports for downstream consumers.
pub use commercial::{Commercial, CommercialMatch};
pub use ids::{ChannelID, RecordingID};
pub use playback::{PlaybackMode, SessionPhase};
pub use progress::{
    UpdateRecordingProgressRequest, WatchContentType, WatchSessionStart,
};
pub use recording::{Recording, RecordingStatus};
