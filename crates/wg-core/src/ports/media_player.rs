//! Media player port
//!
//! Contract for playing a remote media resource and reporting its lifecycle.
//! Implementations are provided by the platform layer.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::media::{MediaEvent, MediaSource};

/// Errors reported by media player implementations.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("failed to connect to media source: {0}")]
    Connect(String),
    #[error("media source returned status {0}")]
    Status(u16),
    #[error("media stream interrupted: {0}")]
    Stream(String),
}

/// Plays a remote media resource and reports lifecycle events.
///
/// Each `start` call opens a fresh playback session; retry never resumes a
/// broken one. A session emits exactly one [`MediaEvent::Loaded`] once
/// frames can be displayed, zero or more [`MediaEvent::Error`]s, and one
/// [`MediaEvent::Finished`] when a non-looping session reaches the end.
#[async_trait]
pub trait MediaPlayerPort: Send + Sync {
    /// Begin a fresh playback session for `source`.
    async fn start(&self, source: &MediaSource) -> Result<(), MediaError>;

    /// Subscribe to playback events.
    async fn subscribe_events(&self) -> anyhow::Result<mpsc::Receiver<MediaEvent>>;

    /// Tear down the current playback session. Events from a torn-down
    /// session are no longer delivered.
    async fn teardown(&self);
}
