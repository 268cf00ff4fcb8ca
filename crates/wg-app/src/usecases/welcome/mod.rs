//! Welcome flow use cases.

pub mod context;
pub mod controller;
pub mod mark_seen;
pub mod pump;

pub use context::WelcomeContext;
pub use controller::WelcomeFlowController;
pub use mark_seen::MarkWelcomeSeen;
pub use pump::pump_media_events;
