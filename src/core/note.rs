//! Note values.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One discrete signal (pad) of the board, in `[0, note_count)`.
///
/// User input is range checked through [`Note::new`]; generated notes come
/// from a [`NoteGenerator`](crate::env::NoteGenerator) that already knows
/// the range.
///
/// # Example
///
/// ```rust
/// use simon_engine::core::Note;
///
/// let note = Note::new(2, 3).unwrap();
/// assert_eq!(note.value(), 2);
/// assert!(Note::new(3, 3).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Note(u8);

impl Note {
    /// Create a note, rejecting values outside `[0, note_count)`.
    pub fn new(value: u8, note_count: u8) -> Result<Self, GameError> {
        if value < note_count {
            Ok(Self(value))
        } else {
            Err(GameError::InvalidNote {
                note: value,
                note_count,
            })
        }
    }

    /// Build a note from an index the caller already bounded.
    pub(crate) fn from_index(value: u8) -> Self {
        Self(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Pitch multiplier for this note: `base + value * step`.
    pub fn pitch(self, base: f32, step: f32) -> f32 {
        base + f32::from(self.0) * step
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
