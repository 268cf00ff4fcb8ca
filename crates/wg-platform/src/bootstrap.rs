//! Platform wiring for the welcome flow.

use std::sync::Arc;

use wg_core::ports::MediaPlayerPort;
use wg_core::{RuntimeTarget, WebFallbackMode, WelcomeFlowConfig};

use crate::media::{StaticGreetingPlayer, StreamingMediaPlayer};

/// Select the media player variant for the resolved runtime target.
///
/// Native targets stream the real video. Web targets keep inline video
/// unless configured to fall back to the static greeting.
pub fn select_media_player(
    target: RuntimeTarget,
    config: &WelcomeFlowConfig,
) -> Arc<dyn MediaPlayerPort> {
    match (target, config.web_fallback) {
        (RuntimeTarget::Web, WebFallbackMode::StaticGreeting) => {
            log::info!("web target with static fallback, skipping welcome video");
            Arc::new(StaticGreetingPlayer::new())
        }
        _ => Arc::new(StreamingMediaPlayer::new()),
    }
}
