//! Shared welcome flow context.

use std::sync::Arc;

use tokio::sync::Mutex;
use wg_core::welcome::WelcomeFlowState;

/// Shared welcome context containing state and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
/// - `dispatch_lock`: Used only for `dispatch` operations to serialize concurrent calls.
/// - `state`: Used for both reading (`get_state`) and writing (during `dispatch`).
#[derive(Clone)]
pub struct WelcomeContext {
    /// Current welcome flow state.
    state: Arc<Mutex<WelcomeFlowState>>,
    /// Serializes dispatch calls so each event is handled to completion
    /// before the next is processed.
    dispatch_lock: Arc<Mutex<()>>,
}

impl WelcomeContext {
    /// Creates a new WelcomeContext with the given initial state.
    pub fn new(initial_state: WelcomeFlowState) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial_state)),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Creates a WelcomeContext in the initial `Resolving` state.
    pub fn default() -> Self {
        Self::new(WelcomeFlowState::Resolving)
    }

    /// Returns the context wrapped in Arc for shared ownership.
    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Returns a snapshot of the current state.
    ///
    /// This is a lightweight read that does NOT acquire `dispatch_lock`.
    pub async fn get_state(&self) -> WelcomeFlowState {
        self.state.lock().await.clone()
    }

    /// Acquires the dispatch lock for serializing concurrent dispatch calls.
    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Updates the state to the given value.
    ///
    /// This should only be called after acquiring `dispatch_lock`.
    pub async fn set_state(&self, state: WelcomeFlowState) {
        let mut guard = self.state.lock().await;
        *guard = state;
    }
}
