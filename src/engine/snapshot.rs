//! Observable view of the engine for the presentation layer.

use crate::core::{GamePhase, GameState, Note};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Copy of everything the presentation layer may observe.
///
/// The generated sequence itself is left out; only its length is exposed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub session_id: Option<Uuid>,
    pub phase: GamePhase,
    pub started: bool,
    pub accepting_input: bool,
    pub round: u32,
    pub current_playback_note: Option<Note>,
    pub sequence_len: usize,
    pub attempt: Vec<Note>,
    pub round_winnable: bool,
    pub best_round: u32,
}

/// The start screen, as seen right after a reset.
impl Default for GameSnapshot {
    fn default() -> Self {
        Self::capture(&GameState::new(), 0)
    }
}

impl GameSnapshot {
    pub(crate) fn capture(game: &GameState, best_round: u32) -> Self {
        Self {
            session_id: game.session_id(),
            phase: game.phase(),
            started: game.is_started(),
            accepting_input: game.is_accepting_input(),
            round: game.round(),
            current_playback_note: game.cursor(),
            sequence_len: game.sequence().len(),
            attempt: game.attempt().to_vec(),
            round_winnable: game.is_round_winnable(),
            best_round,
        }
    }
}
