//! Welcome flow configuration.
//!
//! One parameterized controller replaces a family of near-duplicate welcome
//! screens: looping, retry policy, and degraded-target presentation are
//! configuration, not separate code paths.

use serde::{Deserialize, Serialize};

/// Default welcome video asset.
pub const DEFAULT_VIDEO_URL: &str =
    "https://lajiegouajqvecmilwyj.supabase.co/storage/v1/object/public/Welcome%20Video/download.mp4";

/// Runtime target reported by the platform layer.
///
/// This is a configuration input resolved once at startup, not flow state.
/// It only influences which media player variant is wired in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuntimeTarget {
    Native,
    Web,
}

/// Presentation used when the runtime target cannot play inline video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebFallbackMode {
    /// Keep the inline video experience.
    InlineVideo,
    /// Skip video entirely and advance past the gate with a static greeting.
    StaticGreeting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeFlowConfig {
    /// Welcome video resource locator.
    pub video_url: String,

    /// Loop playback. Looping sessions never finish on their own, so the
    /// flow then completes only through an explicit skip or continue.
    pub loop_video: bool,

    /// Whether a failed media load offers retry.
    pub allow_retry: bool,

    /// Upper bound on retry attempts. `None` means unbounded.
    #[serde(default)]
    pub max_retries: Option<u32>,

    /// Presentation for degraded targets.
    pub web_fallback: WebFallbackMode,
}

impl Default for WelcomeFlowConfig {
    fn default() -> Self {
        Self {
            video_url: DEFAULT_VIDEO_URL.to_string(),
            loop_video: true,
            allow_retry: true,
            max_retries: None,
            web_fallback: WebFallbackMode::InlineVideo,
        }
    }
}
