//! Welcome flow domain models
//!
//! This module defines the core domain models for the first-launch welcome
//! flow, which shows an introductory video once and then stays out of the
//! way for the rest of the install's lifetime.

pub mod state_machine;

pub use state_machine::{WelcomeAction, WelcomeEvent, WelcomeStateMachine};

/// Storage key for the welcome-seen flag.
///
/// On-disk layout: this name must stay stable across versions for the
/// don't-show-again guarantee to hold.
pub const WELCOME_SEEN_KEY: &str = "has_seen_welcome_video";

/// Value stored once the welcome flow has completed.
pub const WELCOME_SEEN_VALUE: &str = "true";

/// Whether a stored flag value marks the welcome flow as already seen.
///
/// Anything other than the exact string `"true"` (absence, `"false"`,
/// malformed leftovers) is treated as unset.
pub fn flag_marks_seen(value: Option<&str>) -> bool {
    value == Some(WELCOME_SEEN_VALUE)
}

/// Media playback status within the welcome screen.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MediaStatus {
    /// Asset is being acquired.
    Loading,
    /// Asset can display frames.
    Ready,
    /// Load or playback failed; the user may retry or skip.
    Failed { reason: String },
}

/// Welcome flow state.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WelcomeFlowState {
    /// Persisted flag not yet read.
    Resolving,
    /// Welcome experience is visible.
    ///
    /// `retry_count` lives here rather than on [`MediaStatus::Failed`] so the
    /// count survives the failed-to-loading reset on retry.
    ShowingWelcome {
        media: MediaStatus,
        retry_count: u32,
    },
    /// Main application is shown. Terminal for this controller instance.
    Completed,
}

impl WelcomeFlowState {
    pub fn is_resolving(&self) -> bool {
        matches!(self, WelcomeFlowState::Resolving)
    }

    pub fn is_showing_welcome(&self) -> bool {
        matches!(self, WelcomeFlowState::ShowingWelcome { .. })
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, WelcomeFlowState::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::flag_marks_seen;

    #[test]
    fn only_exact_true_marks_welcome_as_seen() {
        assert!(flag_marks_seen(Some("true")));
        assert!(!flag_marks_seen(Some("false")));
        assert!(!flag_marks_seen(Some("TRUE")));
        assert!(!flag_marks_seen(Some("1")));
        assert!(!flag_marks_seen(Some("")));
        assert!(!flag_marks_seen(None));
    }
}
