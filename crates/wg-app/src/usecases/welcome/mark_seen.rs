use std::sync::Arc;

use wg_core::ports::FlagStorePort;
use wg_core::welcome::{WELCOME_SEEN_KEY, WELCOME_SEEN_VALUE};

/// Use case for marking the welcome flow as seen.
///
/// Writes the durable flag that keeps the welcome screen from showing on
/// later launches. The flag is only ever written as `"true"`; this subsystem
/// never rewrites it to anything else.
pub struct MarkWelcomeSeen {
    flag_store: Arc<dyn FlagStorePort>,
}

impl MarkWelcomeSeen {
    /// Create a new MarkWelcomeSeen use case from trait objects.
    pub fn new(flag_store: Arc<dyn FlagStorePort>) -> Self {
        Self { flag_store }
    }

    /// Create a new MarkWelcomeSeen use case from cloned Arc<dyn Port> references.
    pub fn from_ports(flag_store: Arc<dyn FlagStorePort>) -> Self {
        Self::new(flag_store)
    }

    /// Persist the welcome-seen flag.
    pub async fn execute(&self) -> anyhow::Result<()> {
        self.flag_store
            .write(WELCOME_SEEN_KEY, WELCOME_SEEN_VALUE)
            .await
    }
}
