//! Welcome flow controller.
//!
//! This module coordinates the welcome flow state machine and side effects.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};

use wg_core::media::MediaSource;
use wg_core::ports::{FlagStorePort, MediaPlayerPort, WelcomeEventPort};
use wg_core::welcome::{
    flag_marks_seen, WelcomeAction, WelcomeEvent, WelcomeFlowState, WelcomeStateMachine,
    WELCOME_SEEN_KEY,
};
use wg_core::WelcomeFlowConfig;

use crate::usecases::welcome::context::WelcomeContext;
use crate::usecases::welcome::MarkWelcomeSeen;

/// Controller that drives welcome flow state and side effects.
///
/// Every operation resolves to a defined state; no failure escapes to the
/// caller. A flag-read failure fails open into the welcome experience, and a
/// flag-write failure never blocks the transition to `Completed`.
pub struct WelcomeFlowController {
    context: Arc<WelcomeContext>,
    config: WelcomeFlowConfig,

    flag_store: Arc<dyn FlagStorePort>,
    mark_seen: Arc<MarkWelcomeSeen>,
    media_player: Arc<dyn MediaPlayerPort>,
    welcome_events: Arc<dyn WelcomeEventPort>,

    initialized: AtomicBool,
}

impl WelcomeFlowController {
    pub fn new(
        config: WelcomeFlowConfig,
        flag_store: Arc<dyn FlagStorePort>,
        media_player: Arc<dyn MediaPlayerPort>,
        welcome_events: Arc<dyn WelcomeEventPort>,
    ) -> Self {
        Self {
            context: WelcomeContext::default().arc(),
            mark_seen: Arc::new(MarkWelcomeSeen::new(flag_store.clone())),
            config,
            flag_store,
            media_player,
            welcome_events,
            initialized: AtomicBool::new(false),
        }
    }

    /// Read the persisted flag and resolve the initial state.
    ///
    /// Performs exactly one read and no write. A store failure is treated as
    /// "unset" so the user is never stuck on the loading state.
    pub async fn initialize(&self) -> WelcomeFlowState {
        if self.initialized.swap(true, Ordering::SeqCst) {
            return self.state().await;
        }

        let already_seen = match self.flag_store.read(WELCOME_SEEN_KEY).await {
            Ok(value) => flag_marks_seen(value.as_deref()),
            Err(err) => {
                warn!(error = %err, "failed to read welcome flag, showing welcome");
                false
            }
        };

        self.dispatch(WelcomeEvent::FlagResolved { already_seen })
            .await
    }

    /// Media player reports the asset can display frames.
    pub async fn on_media_loaded(&self) -> WelcomeFlowState {
        self.dispatch(WelcomeEvent::MediaLoaded).await
    }

    /// Playback completed naturally.
    pub async fn on_media_finished(&self) -> WelcomeFlowState {
        self.dispatch(WelcomeEvent::MediaFinished).await
    }

    /// Media player reports a load or playback error.
    pub async fn on_media_failed(&self, reason: impl Into<String>) -> WelcomeFlowState {
        self.dispatch(WelcomeEvent::MediaFailed {
            reason: reason.into(),
        })
        .await
    }

    /// User asked to retry a failed load.
    pub async fn retry(&self) -> WelcomeFlowState {
        self.dispatch(WelcomeEvent::RetryRequested).await
    }

    /// User skipped or explicitly continued past the welcome screen.
    ///
    /// Skip, explicit continue, and natural completion all funnel through
    /// the same transition; they are indistinguishable once dispatched.
    pub async fn complete(&self) -> WelcomeFlowState {
        self.dispatch(WelcomeEvent::CompleteRequested).await
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> WelcomeFlowState {
        self.context.get_state().await
    }

    async fn dispatch(&self, event: WelcomeEvent) -> WelcomeFlowState {
        // Serialize concurrent dispatch calls so each event is handled to
        // completion before the next is processed.
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("usecase.welcome_controller.dispatch", event = ?event);
        async {
            let mut current = self.context.get_state().await;
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let from = current.clone();
                let event_name = format!("{:?}", event);
                let (next, actions) =
                    WelcomeStateMachine::transition(current, event, &self.config);
                info!(from = ?from, to = ?next, event = %event_name, "welcome state transition");
                let follow_up_events = self.execute_actions(actions).await;
                self.set_state_and_emit(next.clone()).await;
                current = next;
                pending_events.extend(follow_up_events);
            }

            current
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<WelcomeAction>) -> Vec<WelcomeEvent> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(?action, "welcome executing action");
            match action {
                WelcomeAction::StartMedia => {
                    let source = MediaSource::from_flow_config(&self.config);
                    if let Err(err) = self.media_player.start(&source).await {
                        warn!(error = %err, url = %source.url, "media session failed to start");
                        follow_up_events.push(WelcomeEvent::MediaFailed {
                            reason: err.to_string(),
                        });
                    }
                }
                WelcomeAction::PersistSeenFlag => {
                    // Best effort: a failed write means the welcome may show
                    // again next launch, which is accepted.
                    if let Err(err) = self.mark_seen.execute().await {
                        warn!(error = %err, "failed to persist welcome flag");
                    }
                }
            }
        }

        follow_up_events
    }

    async fn set_state_and_emit(&self, state: WelcomeFlowState) {
        self.context.set_state(state.clone()).await;
        self.welcome_events.emit_welcome_state_changed(state).await;
    }
}
