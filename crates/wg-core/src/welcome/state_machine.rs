//! Welcome flow state machine.
//!
//! Defines a pure state transition function for the first-launch welcome flow.

use crate::config::WelcomeFlowConfig;

use super::{MediaStatus, WelcomeFlowState};

/// Events that drive the welcome flow.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WelcomeEvent {
    /// The persisted flag read resolved.
    FlagResolved { already_seen: bool },
    /// The media player has loaded enough to display frames.
    MediaLoaded,
    /// Playback reached the end of a non-looping session.
    MediaFinished,
    /// The media player reported a load or playback error.
    MediaFailed { reason: String },
    /// The user asked to retry a failed load.
    RetryRequested,
    /// The user skipped or explicitly continued past the welcome screen.
    CompleteRequested,
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WelcomeAction {
    /// Begin a fresh media playback session.
    StartMedia,
    /// Persist the welcome-seen flag.
    PersistSeenFlag,
}

/// Pure state machine: no side effects.
pub struct WelcomeStateMachine;

impl WelcomeStateMachine {
    pub fn transition(
        state: WelcomeFlowState,
        event: WelcomeEvent,
        config: &WelcomeFlowConfig,
    ) -> (WelcomeFlowState, Vec<WelcomeAction>) {
        match (state, event) {
            (
                WelcomeFlowState::Resolving,
                WelcomeEvent::FlagResolved { already_seen: true },
            ) => (WelcomeFlowState::Completed, Vec::new()),
            (
                WelcomeFlowState::Resolving,
                WelcomeEvent::FlagResolved { already_seen: false },
            ) => (
                WelcomeFlowState::ShowingWelcome {
                    media: MediaStatus::Loading,
                    retry_count: 0,
                },
                vec![WelcomeAction::StartMedia],
            ),
            (
                WelcomeFlowState::ShowingWelcome { retry_count, .. },
                WelcomeEvent::MediaLoaded,
            ) => (
                WelcomeFlowState::ShowingWelcome {
                    media: MediaStatus::Ready,
                    retry_count,
                },
                Vec::new(),
            ),
            (WelcomeFlowState::ShowingWelcome { .. }, WelcomeEvent::MediaFinished) => (
                WelcomeFlowState::Completed,
                vec![WelcomeAction::PersistSeenFlag],
            ),
            (
                WelcomeFlowState::ShowingWelcome { retry_count, .. },
                WelcomeEvent::MediaFailed { reason },
            ) => (
                WelcomeFlowState::ShowingWelcome {
                    media: MediaStatus::Failed { reason },
                    retry_count,
                },
                Vec::new(),
            ),
            (
                WelcomeFlowState::ShowingWelcome {
                    media: MediaStatus::Failed { reason },
                    retry_count,
                },
                WelcomeEvent::RetryRequested,
            ) => {
                let exhausted = config
                    .max_retries
                    .map_or(false, |max| retry_count >= max);
                if !config.allow_retry || exhausted {
                    return (
                        WelcomeFlowState::ShowingWelcome {
                            media: MediaStatus::Failed { reason },
                            retry_count,
                        },
                        Vec::new(),
                    );
                }
                (
                    WelcomeFlowState::ShowingWelcome {
                        media: MediaStatus::Loading,
                        retry_count: retry_count + 1,
                    },
                    vec![WelcomeAction::StartMedia],
                )
            }
            (WelcomeFlowState::ShowingWelcome { .. }, WelcomeEvent::CompleteRequested) => (
                WelcomeFlowState::Completed,
                vec![WelcomeAction::PersistSeenFlag],
            ),
            // Everything else is a no-op: media callbacks before the flag
            // resolves or after completion, retry outside a failure, repeated
            // completion. Late events must never mutate state.
            (state, _event) => (state, Vec::new()),
        }
    }
}
