//! Phase history tracking.
//!
//! Records every phase change of a game, with the round it happened in,
//! following functional programming principles: recording returns a new
//! history instead of mutating the old one.

use super::state::GamePhase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single phase change.
///
/// # Example
///
/// ```rust
/// use simon_engine::core::{GamePhase, PhaseTransition};
/// use chrono::Utc;
///
/// let transition = PhaseTransition {
///     from: GamePhase::Idle,
///     to: GamePhase::Playback,
///     timestamp: Utc::now(),
///     round: 0,
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseTransition {
    /// The phase being left
    pub from: GamePhase,
    /// The phase being entered
    pub to: GamePhase,
    /// When the change occurred
    pub timestamp: DateTime<Utc>,
    /// Round counter at the moment of the change
    pub round: u32,
}

/// Ordered history of phase changes.
///
/// # Example
///
/// ```rust
/// use simon_engine::core::{GamePhase, PhaseHistory, PhaseTransition};
/// use chrono::Utc;
///
/// let history = PhaseHistory::new()
///     .record(PhaseTransition {
///         from: GamePhase::Idle,
///         to: GamePhase::Playback,
///         timestamp: Utc::now(),
///         round: 0,
///     })
///     .record(PhaseTransition {
///         from: GamePhase::Playback,
///         to: GamePhase::AwaitingInput,
///         timestamp: Utc::now(),
///         round: 0,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // Idle -> Playback -> AwaitingInput
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseHistory {
    transitions: Vec<PhaseTransition>,
}

impl PhaseHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: PhaseTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of phases traversed.
    ///
    /// Returns the starting phase followed by the `to` phase of each
    /// transition.
    pub fn get_path(&self) -> Vec<GamePhase> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        for transition in &self.transitions {
            path.push(transition.to);
        }
        path
    }

    /// Highest round seen in any recorded transition.
    pub fn highest_round(&self) -> Option<u32> {
        self.transitions.iter().map(|t| t.round).max()
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions, in order.
    pub fn transitions(&self) -> &[PhaseTransition] {
        &self.transitions
    }
}
