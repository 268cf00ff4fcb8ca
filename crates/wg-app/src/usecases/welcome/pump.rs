//! Media event pump.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use wg_core::media::MediaEvent;

use crate::usecases::welcome::WelcomeFlowController;

/// Feed media player events into the controller until the flow completes or
/// the channel closes.
///
/// Events arriving after the transition to `Completed` are absorbed by the
/// state machine, so a late error from a session being torn down cannot
/// mutate state.
pub async fn pump_media_events(
    controller: Arc<WelcomeFlowController>,
    mut events: mpsc::Receiver<MediaEvent>,
) {
    while let Some(event) = events.recv().await {
        let state = match event {
            MediaEvent::Loaded => controller.on_media_loaded().await,
            MediaEvent::Finished => controller.on_media_finished().await,
            MediaEvent::Error { reason } => controller.on_media_failed(reason).await,
        };
        if state.is_completed() {
            debug!("welcome flow completed, stopping media event pump");
            break;
        }
    }
}
