//! Welcome Gate application orchestration layer
//!
//! This crate contains business logic use cases and runtime orchestration.

pub mod usecases;

pub use usecases::welcome::{
    pump_media_events, MarkWelcomeSeen, WelcomeContext, WelcomeFlowController,
};
