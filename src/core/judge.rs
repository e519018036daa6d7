//! Judgment of a player's attempt against the generated sequence.

use super::note::Note;
use serde::{Deserialize, Serialize};

/// Outcome of judging the attempt after one more note.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Judgment {
    /// Attempt matches so far but is shorter than the sequence.
    Pending,
    /// Attempt reproduces the whole sequence.
    RoundWon,
    /// Attempt diverged from the sequence; the game is lost.
    Lost,
}

/// Check that `attempt` is a prefix of `sequence`, element by element.
pub fn is_prefix(sequence: &[Note], attempt: &[Note]) -> bool {
    attempt.len() <= sequence.len() && sequence[..attempt.len()] == *attempt
}

/// Judge an attempt against a sequence.
///
/// An empty sequence has nothing to reproduce, so any attempt against it
/// stays `Pending`.
///
/// # Example
///
/// ```rust
/// use simon_engine::core::{judge, Judgment, Note};
///
/// let n = |v| Note::new(v, 3).unwrap();
/// assert_eq!(judge(&[n(1), n(2)], &[n(1)]), Judgment::Pending);
/// assert_eq!(judge(&[n(1), n(2)], &[n(1), n(2)]), Judgment::RoundWon);
/// assert_eq!(judge(&[n(1), n(2)], &[n(2)]), Judgment::Lost);
/// ```
pub fn judge(sequence: &[Note], attempt: &[Note]) -> Judgment {
    if sequence.is_empty() {
        return Judgment::Pending;
    }

    if !is_prefix(sequence, attempt) {
        Judgment::Lost
    } else if attempt.len() == sequence.len() {
        Judgment::RoundWon
    } else {
        Judgment::Pending
    }
}
