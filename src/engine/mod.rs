//! Effectful shell around the pure game core.
//!
//! The engine owns a [`GameState`](crate::core::GameState) and performs
//! everything the core deliberately avoids: timed playback on a Tokio task,
//! random note generation, and calls into the presentation layer.
//!
//! # Key Concepts
//!
//! - **Commands**: `start`, `submit_note` and `reset` change the game
//! - **Playback runs**: each run carries a token; reset, restart and new
//!   rounds invalidate older runs
//! - **Snapshots**: observers read or subscribe to a serializable view

mod machine;
mod playback;
mod snapshot;

pub use machine::GameEngine;
pub use playback::PlaybackOutcome;
pub use snapshot::GameSnapshot;
