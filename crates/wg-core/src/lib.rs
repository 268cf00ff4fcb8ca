//! # wg-core
//!
//! Core domain models and business logic for Welcome Gate.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod media;
pub mod ports;
pub mod welcome;

// Re-export commonly used types at the crate root
pub use config::{RuntimeTarget, WebFallbackMode, WelcomeFlowConfig};
pub use media::{MediaEvent, MediaSource};
pub use welcome::{MediaStatus, WelcomeFlowState, WELCOME_SEEN_KEY};
