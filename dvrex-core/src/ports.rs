//! Collaborator contracts consumed by the playback controller.
//!
//! Implementations live at the edges (the HTTP adapter in [`crate::api`],
//! stubs in tests); the session manager only ever sees these traits.

use async_trait::async_trait;
use url::Url;

use dvrex_model::prelude::{Recording, RecordingID, WatchSessionStart};

use crate::error::Result;

/// Recording lookup, stream-URL issuance, and progress persistence.
#[async_trait]
pub trait RecordingService: Send + Sync {
    async fn list_recordings(&self) -> Result<Vec<Recording>>;

    /// Issue a playable URL for the recording. Format and lifetime of the
    /// URL are opaque to the controller.
    async fn recording_stream_url(&self, recording_id: RecordingID)
    -> Result<Url>;

    async fn update_recording_progress(
        &self,
        recording_id: RecordingID,
        position_ms: u64,
    ) -> Result<()>;
}

/// Best-effort watch telemetry. Failures are tolerated by every caller;
/// no return value beyond the error is consumed.
#[async_trait]
pub trait WatchStatsService: Send + Sync {
    async fn start_watch_session(&self, start: WatchSessionStart)
    -> Result<()>;

    /// Close the current tracking session, recording elapsed wall-clock
    /// watch time. Must be a no-op when no session is open.
    async fn end_watch_session(&self) -> Result<()>;
}
