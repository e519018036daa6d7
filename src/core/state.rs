//! Game phases.
//!
//! The engine keeps its state as a handful of flags (started, accepting
//! input, cursor). `GamePhase` is the coarse summary of those flags that
//! history tracking and logging work with.

use serde::{Deserialize, Serialize};

/// Coarse phase of a game.
///
/// A game cycles `Idle -> Playback -> AwaitingInput -> Playback -> ...` until
/// a wrong note sends it back to `Idle`. There is no terminal phase: a lost
/// game simply returns to the start screen.
///
/// # Example
///
/// ```rust
/// use simon_engine::core::GamePhase;
///
/// assert_eq!(GamePhase::Playback.name(), "Playback");
/// assert!(GamePhase::AwaitingInput.accepts_input());
/// assert!(!GamePhase::Idle.is_active());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// No game in progress; the start screen is showing.
    #[default]
    Idle,
    /// The sequence is being played back to the player.
    Playback,
    /// Playback finished; the player is reproducing the sequence.
    AwaitingInput,
}

impl GamePhase {
    /// Phase name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Playback => "Playback",
            Self::AwaitingInput => "AwaitingInput",
        }
    }

    /// Whether notes submitted in this phase are judged.
    pub fn accepts_input(&self) -> bool {
        matches!(self, Self::AwaitingInput)
    }

    /// Whether a game is in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
