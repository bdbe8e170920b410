//! Core library for the Dvrex DVR platform.
//!
//! Dvrex-core is the recording playback controller: it decides where
//! playback starts for a given recording and mode, tracks detected
//! commercial intervals for skip and chapter navigation, and persists
//! viewing progress against a remote DVR server.
//!
//! Two cooperating parts:
//!
//! - [`session::PlaybackSessionManager`] owns load/resume/live-seek
//!   decisions and progress persistence, over injected service ports.
//! - [`navigation::CommercialNavigator`] is pure decision logic over a
//!   per-session snapshot of commercial intervals.
//!
//! Rendering, decoding, and the DVR server itself are external; see
//! [`ports`] for the contracts this crate consumes and [`api`] for the
//! production HTTP adapter.
#![allow(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod navigation;
pub mod ports;
pub mod session;

pub use api::RemoteDvrService;
pub use config::PlaybackTunables;
pub use error::{PlaybackError, Result};
pub use navigation::CommercialNavigator;
pub use ports::{RecordingService, WatchStatsService};
pub use session::{PlaybackSession, PlaybackSessionManager};

pub use dvrex_model as model;
