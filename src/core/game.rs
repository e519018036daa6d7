//! Pure game state and its transitions.
//!
//! `GameState` holds everything the engine knows about a game. Its methods
//! mutate only the value itself; timing, randomness and presentation are
//! the engine's business.

use super::judge::{judge, Judgment};
use super::note::Note;
use super::state::GamePhase;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Complete state of one game.
///
/// # Example
///
/// ```rust
/// use simon_engine::core::{GameState, Judgment, Note};
/// use uuid::Uuid;
///
/// let one = Note::new(1, 3).unwrap();
/// let mut game = GameState::new();
/// game.begin(Uuid::new_v4(), one);
/// game.open_input();
///
/// assert_eq!(game.record_input(one), Judgment::RoundWon);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    session_id: Option<Uuid>,
    started: bool,
    sequence: Vec<Note>,
    attempt: Vec<Note>,
    round: u32,
    cursor: Option<Note>,
    accepting_input: bool,
    round_winnable: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// State of the start screen: nothing generated, round 0.
    pub fn new() -> Self {
        Self {
            session_id: None,
            started: false,
            sequence: Vec::new(),
            attempt: Vec::new(),
            round: 0,
            cursor: None,
            accepting_input: false,
            round_winnable: true,
        }
    }

    /// Begin a fresh game whose sequence is just `first`.
    ///
    /// Any previous game is discarded. Input stays closed until playback
    /// calls [`open_input`](Self::open_input).
    pub fn begin(&mut self, session_id: Uuid, first: Note) {
        *self = Self::new();
        self.session_id = Some(session_id);
        self.started = true;
        self.sequence.push(first);
    }

    /// Append a player's note and judge the attempt.
    ///
    /// Only records the note; the caller applies the outcome with
    /// [`advance_round`](Self::advance_round) or [`reset`](Self::reset).
    pub fn record_input(&mut self, note: Note) -> Judgment {
        self.attempt.push(note);
        let judgment = judge(&self.sequence, &self.attempt);
        self.round_winnable = judgment != Judgment::Lost;
        judgment
    }

    /// Start the next round: extend the sequence and clear the attempt.
    pub fn advance_round(&mut self, next: Note) {
        self.sequence.push(next);
        self.attempt.clear();
        self.round += 1;
        self.cursor = None;
        self.accepting_input = false;
    }

    /// Emphasize `note` during playback.
    pub fn show_note(&mut self, note: Note) {
        self.cursor = Some(note);
    }

    /// Playback is done; the player may answer.
    pub fn open_input(&mut self) {
        self.cursor = None;
        self.accepting_input = true;
    }

    /// Return to the start screen.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn phase(&self) -> GamePhase {
        if !self.started {
            GamePhase::Idle
        } else if self.accepting_input {
            GamePhase::AwaitingInput
        } else {
            GamePhase::Playback
        }
    }

    pub fn session_id(&self) -> Option<Uuid> {
        self.session_id
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_accepting_input(&self) -> bool {
        self.accepting_input
    }

    pub fn is_round_winnable(&self) -> bool {
        self.round_winnable
    }

    pub fn sequence(&self) -> &[Note] {
        &self.sequence
    }

    pub fn attempt(&self) -> &[Note] {
        &self.attempt
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn cursor(&self) -> Option<Note> {
        self.cursor
    }
}
