//! Playback session management
//!
//! Owns load/resume/live-seek decisions for a recording, delegates
//! commercial navigation to a per-session [`CommercialNavigator`], and
//! persists viewing progress against the DVR service.
//!
//! One manager drives one logical playback session at a time. Position
//! updates and user actions are expected on a single serialized stream;
//! the manager is not internally concurrent.

use std::sync::Arc;

use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, info, warn};
use url::Url;

use dvrex_model::prelude::{
    CommercialMatch, PlaybackMode, RecordingID, SessionPhase,
    WatchContentType, WatchSessionStart,
};

use crate::config::PlaybackTunables;
use crate::error::{PlaybackError, Result};
use crate::navigation::CommercialNavigator;
use crate::ports::{RecordingService, WatchStatsService};

/// Ready-to-play descriptor handed to the player UI.
#[derive(Debug, Clone)]
pub struct PlaybackSession {
    pub recording_id: RecordingID,
    pub title: String,
    pub mode: PlaybackMode,
    /// Snapshot of `status == Recording` taken at load time
    pub is_live_recording: bool,
    pub stream_url: Url,
    pub start_position_ms: u64,
    /// Defer the initial seek until the player reports a duration
    pub seek_to_live_on_start: bool,
}

struct ActiveSession {
    descriptor: PlaybackSession,
    navigator: CommercialNavigator,
    auto_skip_enabled: bool,
}

/// Drives one playback session against the DVR and watch-stats services.
///
/// Collaborators are injected as trait objects; the manager performs no
/// I/O of its own beyond calling them. Load-time failures surface to the
/// caller, post-load persistence failures are logged and swallowed so
/// playback is never interrupted by telemetry.
pub struct PlaybackSessionManager {
    recordings: Arc<dyn RecordingService>,
    stats: Arc<dyn WatchStatsService>,
    tunables: PlaybackTunables,
    session: Option<ActiveSession>,
    phase_tx: watch::Sender<SessionPhase>,
}

impl std::fmt::Debug for PlaybackSessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackSessionManager")
            .field("phase", &self.phase())
            .field(
                "recording_id",
                &self.session.as_ref().map(|s| s.descriptor.recording_id),
            )
            .finish()
    }
}

impl PlaybackSessionManager {
    pub fn new(
        recordings: Arc<dyn RecordingService>,
        stats: Arc<dyn WatchStatsService>,
        tunables: PlaybackTunables,
    ) -> Self {
        let (phase_tx, _) = watch::channel(SessionPhase::Idle);
        Self {
            recordings,
            stats,
            tunables,
            session: None,
            phase_tx,
        }
    }

    /// Current phase of the session lifecycle.
    pub fn phase(&self) -> SessionPhase {
        *self.phase_tx.borrow()
    }

    /// Observe phase changes. UI layers adapt this to their own
    /// reactivity primitives.
    pub fn subscribe(&self) -> watch::Receiver<SessionPhase> {
        self.phase_tx.subscribe()
    }

    /// Phase changes as an async stream.
    pub fn phase_stream(&self) -> WatchStream<SessionPhase> {
        WatchStream::new(self.phase_tx.subscribe())
    }

    /// The active session descriptor, if one is loaded.
    pub fn session(&self) -> Option<&PlaybackSession> {
        self.session.as_ref().map(|s| &s.descriptor)
    }

    fn set_phase(&self, phase: SessionPhase) {
        self.phase_tx.send_replace(phase);
    }

    /// Load a recording for playback in the requested mode.
    ///
    /// Resolves the recording, decides the start position, obtains a
    /// stream URL, and opens a watch-stats session (best-effort). On any
    /// failure the session transitions to `Failed` and nothing is
    /// committed; the caller retries by calling this again.
    pub async fn load_recording(
        &mut self,
        recording_id: RecordingID,
        mode: PlaybackMode,
    ) -> Result<PlaybackSession> {
        self.session = None;
        self.set_phase(SessionPhase::Loading);

        match self.load_session(recording_id, mode).await {
            Ok(session) => {
                let descriptor = session.descriptor.clone();
                info!(
                    recording_id = %descriptor.recording_id,
                    ?mode,
                    live = descriptor.is_live_recording,
                    start_ms = descriptor.start_position_ms,
                    "playback session ready"
                );
                self.session = Some(session);
                self.set_phase(SessionPhase::Ready);
                Ok(descriptor)
            }
            Err(err) => {
                warn!(recording_id = %recording_id, "failed to load recording: {err}");
                self.set_phase(SessionPhase::Failed);
                Err(err)
            }
        }
    }

    /// The fallible part of loading. Commits nothing, so an abandoned
    /// (dropped) load leaves no partial session behind.
    async fn load_session(
        &self,
        recording_id: RecordingID,
        mode: PlaybackMode,
    ) -> Result<ActiveSession> {
        let recording = self
            .recordings
            .list_recordings()
            .await?
            .into_iter()
            .find(|r| r.id == recording_id)
            .ok_or(PlaybackError::NotFound(recording_id))?;

        let is_live_recording = recording.is_in_progress();

        // Resume offsets only make sense for finished recordings; a live
        // file's duration is still growing.
        let start_position_ms = match mode {
            PlaybackMode::Start | PlaybackMode::Live => 0,
            PlaybackMode::Default if is_live_recording => 0,
            PlaybackMode::Default => recording.view_offset_ms,
        };

        let stream_url =
            self.recordings.recording_stream_url(recording_id).await?;

        // Opened only after every fallible step, so a failed load cannot
        // orphan a stats session. Failure here must not fail the load.
        if let Err(err) = self
            .stats
            .start_watch_session(WatchSessionStart {
                content_id: recording_id,
                content_type: WatchContentType::DvrRecording,
                title: recording.display_title(),
            })
            .await
        {
            warn!("failed to start watch-stats session: {err}");
        }

        let navigator = CommercialNavigator::new(
            recording.commercials.clone(),
            &self.tunables,
        );

        Ok(ActiveSession {
            descriptor: PlaybackSession {
                recording_id,
                title: recording.display_title(),
                mode,
                is_live_recording,
                stream_url,
                start_position_ms,
                seek_to_live_on_start: mode == PlaybackMode::Live,
            },
            navigator,
            auto_skip_enabled: true,
        })
    }

    /// Where to seek once the player knows the duration, for sessions
    /// loaded in live mode.
    ///
    /// Pure and re-derivable on every duration update; the player clamps
    /// seeks to the valid range, so calling this repeatedly is safe.
    pub fn resolve_live_seek_position(&self, duration_ms: u64) -> Option<u64> {
        let session = self.session.as_ref()?;
        if !session.descriptor.seek_to_live_on_start || duration_ms == 0 {
            return None;
        }
        Some(duration_ms.saturating_sub(self.tunables.live_edge_buffer_ms))
    }

    /// Persist the current position, best-effort.
    ///
    /// No-op for live recordings: progress on a still-growing file is not
    /// meaningful. Failures are logged, never surfaced; the next save
    /// overwrites with a fresher value anyway.
    pub async fn save_progress(&self, position_ms: u64) {
        let Some(session) = &self.session else {
            debug!("save_progress called without an active session");
            return;
        };

        if session.descriptor.is_live_recording {
            debug!(
                recording_id = %session.descriptor.recording_id,
                "skipping progress save for in-progress recording"
            );
            return;
        }

        if let Err(err) = self
            .recordings
            .update_recording_progress(
                session.descriptor.recording_id,
                position_ms,
            )
            .await
        {
            warn!(
                recording_id = %session.descriptor.recording_id,
                position_ms,
                "failed to save playback progress: {err}"
            );
        }
    }

    /// Tear down the active session and close watch tracking.
    ///
    /// Safe to call at any time, including when no session was ever
    /// loaded or a load never completed; then it is a no-op.
    pub async fn end_session(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };

        if let Err(err) = self.stats.end_watch_session().await {
            warn!("failed to end watch-stats session: {err}");
        }

        info!(
            recording_id = %session.descriptor.recording_id,
            "playback session ended"
        );
        self.set_phase(SessionPhase::Ended);
    }

    /// Record that the player started or resumed rendering.
    pub fn mark_playing(&self) {
        if self.session.is_some() && self.phase().is_active() {
            self.set_phase(SessionPhase::Playing);
        }
    }

    /// Record that the player paused.
    pub fn mark_paused(&self) {
        if self.session.is_some() && self.phase() == SessionPhase::Playing {
            self.set_phase(SessionPhase::Paused);
        }
    }

    // Commercial navigation, delegated to the session's snapshot.

    pub fn current_commercial(
        &self,
        position_ms: u64,
    ) -> Option<CommercialMatch> {
        self.session.as_ref()?.navigator.current_commercial(position_ms)
    }

    pub fn should_auto_skip(&self, index: usize) -> bool {
        self.session
            .as_ref()
            .map(|s| s.navigator.should_auto_skip(index, s.auto_skip_enabled))
            .unwrap_or(false)
    }

    /// Mark a commercial skipped and return the seek target.
    pub fn record_skip(&mut self, index: usize) -> Result<u64> {
        let session =
            self.session.as_mut().ok_or(PlaybackError::NoSession)?;
        session.navigator.record_skip(index)
    }

    /// Must be called on every manual seek so previously skipped
    /// commercials can be offered again.
    pub fn reset_skip_tracker(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.navigator.reset_skip_tracker();
        }
    }

    pub fn chapter_boundaries(&self) -> Vec<u64> {
        self.session
            .as_ref()
            .map(|s| s.navigator.chapter_boundaries())
            .unwrap_or_default()
    }

    pub fn next_chapter_position(&self, position_ms: u64) -> Option<u64> {
        self.session.as_ref()?.navigator.next_chapter(position_ms)
    }

    pub fn previous_chapter_position(&self, position_ms: u64) -> Option<u64> {
        self.session.as_ref()?.navigator.previous_chapter(position_ms)
    }

    /// Flip the per-session auto-skip preference; returns the new value.
    pub fn toggle_auto_skip(&mut self) -> bool {
        match self.session.as_mut() {
            Some(session) => {
                session.auto_skip_enabled = !session.auto_skip_enabled;
                debug!(enabled = session.auto_skip_enabled, "auto-skip toggled");
                session.auto_skip_enabled
            }
            None => false,
        }
    }

    pub fn auto_skip_enabled(&self) -> bool {
        self.session
            .as_ref()
            .map(|s| s.auto_skip_enabled)
            .unwrap_or(false)
    }
}
