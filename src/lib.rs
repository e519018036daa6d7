//! simon-engine: state and control logic for memory-sequence games
//!
//! The engine generates a growing sequence of notes, plays it back with
//! fixed timing, collects the player's reproduction one note at a time and
//! judges it round by round. Rendering and audio stay outside: the engine
//! only calls a [`Presenter`](env::Presenter).
//!
//! The crate follows the "pure core, imperative shell" philosophy. Game
//! state, judgment and history are plain values in [`core`]; timing,
//! randomness and side effects live in [`engine`].
//!
//! # Core Concepts
//!
//! - **Note**: one pad of the board, in `[0, note_count)`
//! - **Sequence**: the pattern to reproduce, one note longer each round
//! - **Judgment**: continue, round won, or lost after every input
//! - **Playback run**: the timed replay of the sequence before input opens
//!
//! # Example
//!
//! ```rust
//! use simon_engine::core::{judge, Judgment, Note};
//!
//! let n = |v| Note::new(v, 3).unwrap();
//! let sequence = [n(0), n(2), n(1)];
//!
//! assert_eq!(judge(&sequence, &[n(0), n(2)]), Judgment::Pending);
//! assert_eq!(judge(&sequence, &[n(0), n(1)]), Judgment::Lost);
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod env;
pub mod error;

// Re-export commonly used types
pub use crate::config::GameConfig;
pub use crate::core::{GamePhase, Judgment, Note};
pub use crate::engine::{GameEngine, GameSnapshot, PlaybackOutcome};
pub use crate::env::{NoteGenerator, Presenter, RandomNotes, ScreenTransition};
pub use crate::error::{ConfigError, GameError};
