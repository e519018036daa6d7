//! Capabilities the engine needs from its environment.
//!
//! The engine never draws, plays audio or picks random numbers itself. It
//! calls into these traits, which keeps it testable with mock environments
//! and independent of any rendering or audio stack.

use crate::core::Note;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Screen-level visual transitions the engine asks for.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ScreenTransition {
    /// Hide the start screen and show the board.
    RevealBoard,
    /// Return to the start screen.
    ShowStart,
}

/// Presentation layer: audio and visual feedback.
///
/// Both calls are fire-and-forget and must not block. They are made without
/// any engine lock held, so implementations may query the engine.
pub trait Presenter {
    /// Play a tone at the given pitch multiplier.
    fn play_tone(&self, pitch: f32);

    /// Run a screen transition.
    fn trigger_transition(&self, transition: ScreenTransition);
}

/// Source of the notes appended to the sequence.
///
/// Implementations must return notes in `[0, note_count)`.
pub trait NoteGenerator {
    fn next_note(&mut self, note_count: u8) -> Note;
}

/// Uniform, independent random notes.
///
/// # Example
///
/// ```rust
/// use simon_engine::env::{NoteGenerator, RandomNotes};
///
/// let mut notes = RandomNotes::seeded(7);
/// assert!(notes.next_note(3).value() < 3);
/// ```
pub struct RandomNotes {
    rng: StdRng,
}

impl RandomNotes {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for replays and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomNotes {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteGenerator for RandomNotes {
    /// # Panics
    ///
    /// Panics if `note_count` is 0. Engines never pass 0, since
    /// [`GameConfig`](crate::config::GameConfig) validation rejects it.
    fn next_note(&mut self, note_count: u8) -> Note {
        Note::from_index(self.rng.gen_range(0..note_count))
    }
}
