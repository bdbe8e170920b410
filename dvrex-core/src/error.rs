use dvrex_model::RecordingID;
use thiserror::Error;

/// Errors surfaced by the playback controller.
///
/// Load-time failures (`NotFound`, `Http`, `Upstream`) are fatal to the
/// operation that produced them and nothing more; retry policy belongs to
/// the caller. Post-load persistence failures are never surfaced through
/// this type, they are logged and swallowed.
#[derive(Error, Debug)]
pub enum PlaybackError {
    #[error("Recording not found: {0}")]
    NotFound(RecordingID),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream service error: {0}")]
    Upstream(String),

    #[error("Invalid stream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Stale commercial index {index} (list has {len} entries)")]
    StaleIndex { index: usize, len: usize },

    #[error("No active playback session")]
    NoSession,
}

pub type Result<T> = std::result::Result<T, PlaybackError>;
