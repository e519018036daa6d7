//! Pure game core.
//!
//! This module contains the side-effect free part of the engine:
//! - Note values and the pitch mapping
//! - Game phases
//! - The game state and its transitions
//! - Judgment of attempts against the sequence
//! - Immutable phase history
//!
//! Timing, randomness and presentation live in the engine, following
//! the "pure core, imperative shell" philosophy.

mod game;
mod history;
mod judge;
mod note;
mod state;

pub use game::GameState;
pub use history::{PhaseHistory, PhaseTransition};
pub use judge::{is_prefix, judge, Judgment};
pub use note::Note;
pub use state::GamePhase;
