//! # wg-platform
//!
//! Platform-specific implementations for Welcome Gate.
//!
//! This crate contains implementations that interact with the operating
//! system and remote services.

pub mod bootstrap;
pub mod capability;
pub mod media;

pub use bootstrap::select_media_player;
pub use capability::detect_runtime_target;
