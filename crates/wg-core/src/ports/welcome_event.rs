//! Welcome flow event port
//!
//! Notification fan-out for welcome flow state changes, consumed by the
//! presentation layer.

use async_trait::async_trait;

use crate::welcome::WelcomeFlowState;

#[async_trait]
pub trait WelcomeEventPort: Send + Sync {
    /// Emit a state-changed notification.
    async fn emit_welcome_state_changed(&self, state: WelcomeFlowState);
}
