//! Media domain types.

use serde::{Deserialize, Serialize};

use crate::config::WelcomeFlowConfig;

/// Resource locator and playback flags handed to a media player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSource {
    pub url: String,
    pub muted: bool,
    pub looped: bool,
    pub autoplay: bool,
}

impl MediaSource {
    /// Build the welcome video source from flow configuration.
    ///
    /// The welcome video always plays muted and starts on its own; only the
    /// locator and looping are configurable.
    pub fn from_flow_config(config: &WelcomeFlowConfig) -> Self {
        Self {
            url: config.video_url.clone(),
            muted: true,
            looped: config.loop_video,
            autoplay: true,
        }
    }
}

/// Events emitted by a media player session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaEvent {
    /// The asset has loaded enough to display frames. Emitted once per session.
    Loaded,
    /// Playback reached the end. Non-looping sessions only.
    Finished,
    /// Load or playback error with a diagnostic.
    Error { reason: String },
}
