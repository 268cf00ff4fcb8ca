//! Media player implementations.

pub mod static_greeting;
pub mod streaming;

pub use static_greeting::StaticGreetingPlayer;
pub use streaming::StreamingMediaPlayer;
