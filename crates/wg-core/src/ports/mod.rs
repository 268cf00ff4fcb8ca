//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! external dependencies.

pub mod flag_store;
pub mod media_player;
pub mod welcome_event;

pub use flag_store::FlagStorePort;
pub use media_player::{MediaError, MediaPlayerPort};
pub use welcome_event::WelcomeEventPort;
