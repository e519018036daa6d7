//! Timed playback of the sequence.

use super::machine::Inner;
use crate::core::{GameState, Note};
use crate::env::Presenter;
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::time::sleep;

/// How a playback run ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum PlaybackOutcome {
    /// Every note was played and input was opened.
    Completed,
    /// A reset, restart or newer round invalidated the run before it finished.
    Superseded,
}

/// Play `notes` one by one, then open input.
///
/// The run owns `token`; once the engine moves to a newer token the run
/// stops at its next wake-up without touching state or playing sound.
pub(crate) async fn play_sequence<P, G>(
    inner: Arc<Inner<P, G>>,
    token: u64,
    notes: Vec<Note>,
) -> PlaybackOutcome
where
    P: Presenter,
{
    let total = notes.len();

    for (index, note) in notes.into_iter().enumerate() {
        sleep(inner.config.note_delay()).await;

        if !inner.update_if_current(token, |game| game.show_note(note)) {
            debug!("Playback run {token} superseded at note {}/{total}", index + 1);
            return PlaybackOutcome::Superseded;
        }

        debug!("Playback run {token}: note {}/{total} is {note}", index + 1);
        inner.presenter.play_tone(inner.config.pitch_for(note));
    }

    sleep(inner.config.input_delay()).await;

    if inner.update_if_current(token, GameState::open_input) {
        debug!("Playback run {token} finished, input open");
        PlaybackOutcome::Completed
    } else {
        debug!("Playback run {token} superseded before opening input");
        PlaybackOutcome::Superseded
    }
}
