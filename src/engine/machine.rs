//! Game engine that drives playback and judges input.

use super::playback::{play_sequence, PlaybackOutcome};
use super::snapshot::GameSnapshot;
use crate::config::GameConfig;
use crate::core::{GamePhase, GameState, Judgment, Note, PhaseHistory, PhaseTransition};
use crate::env::{NoteGenerator, Presenter, RandomNotes, ScreenTransition};
use crate::error::GameError;
use chrono::Utc;
use log::{debug, info, warn};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// State guarded by the engine lock.
pub(crate) struct Shared {
    game: GameState,
    /// Generation of the playback run allowed to touch `game`.
    token: u64,
    history: PhaseHistory,
    best_round: u32,
    /// Bumped on every published change.
    revision: u64,
}

/// Snapshot captured under the engine lock, published after it is released.
struct Update {
    revision: u64,
    snapshot: GameSnapshot,
}

impl Shared {
    fn new() -> Self {
        Self {
            game: GameState::new(),
            token: 0,
            history: PhaseHistory::new(),
            best_round: 0,
            revision: 0,
        }
    }

    fn stamp(&mut self) -> Update {
        self.revision += 1;
        Update {
            revision: self.revision,
            snapshot: GameSnapshot::capture(&self.game, self.best_round),
        }
    }

    /// Record a history entry if the phase moved away from `from`.
    fn record_phase(&mut self, from: GamePhase) {
        let to = self.game.phase();
        if from != to {
            debug!("Phase {} -> {}", from.name(), to.name());
            self.history = self.history.record(PhaseTransition {
                from,
                to,
                timestamp: Utc::now(),
                round: self.game.round(),
            });
        }
    }

    /// Back to the start screen; in-flight playback becomes stale.
    fn abandon(&mut self) {
        self.token += 1;
        self.game.reset();
    }
}

pub(crate) struct Inner<P, G> {
    pub(crate) config: GameConfig,
    pub(crate) presenter: P,
    generator: Mutex<G>,
    shared: Mutex<Shared>,
    updates: watch::Sender<GameSnapshot>,
    /// Revision of the last snapshot sent to `updates`.
    published: Mutex<u64>,
}

impl<P, G> Inner<P, G> {
    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Send `update` to subscribers unless a newer one already went out.
    ///
    /// Must be called without the engine lock held, so that a subscriber
    /// holding a borrowed snapshot can still query the engine.
    fn publish(&self, update: Update) {
        let mut published = self
            .published
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if update.revision > *published {
            *published = update.revision;
            self.updates.send_replace(update.snapshot);
        }
    }

    /// Apply `mutate` only while `token` is still the current playback run.
    pub(crate) fn update_if_current(
        &self,
        token: u64,
        mutate: impl FnOnce(&mut GameState),
    ) -> bool {
        let update = {
            let mut shared = self.lock();
            if shared.token != token {
                return false;
            }

            let from = shared.game.phase();
            mutate(&mut shared.game);
            shared.record_phase(from);
            shared.stamp()
        };

        self.publish(update);
        true
    }
}

impl<P, G: NoteGenerator> Inner<P, G> {
    fn next_note(&self) -> Note {
        self.generator
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .next_note(self.config.note_count)
    }
}

/// Memory-sequence game engine.
///
/// Commands (`start`, `submit_note`, `reset`) mutate the game and kick off
/// playback; queries read it. Playback runs as a Tokio task, so commands
/// must be issued from within a Tokio runtime.
///
/// Cloning the engine yields another handle to the same game.
///
/// # Example
///
/// ```rust
/// use simon_engine::engine::GameEngine;
/// use simon_engine::env::{Presenter, ScreenTransition};
///
/// struct Silent;
///
/// impl Presenter for Silent {
///     fn play_tone(&self, _pitch: f32) {}
///     fn trigger_transition(&self, _transition: ScreenTransition) {}
/// }
///
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() {
/// let engine = GameEngine::with_presenter(Silent);
/// engine.start();
///
/// let snapshot = engine.wait_for_input().await;
/// assert!(snapshot.accepting_input);
///
/// let first = engine.sequence()[0];
/// engine.submit_note(first.value()).unwrap();
/// assert_eq!(engine.round(), 1);
/// # }
/// ```
pub struct GameEngine<P, G = RandomNotes> {
    inner: Arc<Inner<P, G>>,
}

impl<P, G> Clone for GameEngine<P, G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P> GameEngine<P, RandomNotes>
where
    P: Presenter + Send + Sync + 'static,
{
    /// Engine with the default configuration and random notes.
    pub fn with_presenter(presenter: P) -> Self {
        Self::assemble(GameConfig::default(), presenter, RandomNotes::new())
    }
}

impl<P, G> GameEngine<P, G>
where
    P: Presenter + Send + Sync + 'static,
    G: NoteGenerator + Send + 'static,
{
    /// Create an engine, validating `config` first.
    pub fn new(config: GameConfig, presenter: P, generator: G) -> Result<Self, GameError> {
        config.check()?;
        Ok(Self::assemble(config, presenter, generator))
    }

    fn assemble(config: GameConfig, presenter: P, generator: G) -> Self {
        let shared = Shared::new();
        let (updates, _) = watch::channel(GameSnapshot::capture(&shared.game, 0));

        Self {
            inner: Arc::new(Inner {
                config,
                presenter,
                generator: Mutex::new(generator),
                shared: Mutex::new(shared),
                updates,
                published: Mutex::new(0),
            }),
        }
    }

    /// Begin a game with a one-note sequence and play it back.
    ///
    /// A game already in progress is discarded and its playback superseded.
    pub fn start(&self) -> JoinHandle<PlaybackOutcome> {
        let session_id = Uuid::new_v4();

        let (token, notes, update) = {
            let mut shared = self.inner.lock();
            if shared.game.is_started() {
                info!("Restarting game, round {} abandoned", shared.game.round());
            }

            let first = self.inner.next_note();
            shared.token += 1;
            shared.history = PhaseHistory::new();
            shared.game.begin(session_id, first);
            shared.record_phase(GamePhase::Idle);

            let update = shared.stamp();
            (shared.token, shared.game.sequence().to_vec(), update)
        };

        self.inner.publish(update);

        info!("Game {session_id} started");
        self.inner
            .presenter
            .trigger_transition(ScreenTransition::RevealBoard);
        self.spawn_playback(token, notes)
    }

    /// Record one note of the player's attempt and judge it.
    ///
    /// The note's tone plays immediately. A completed attempt starts the
    /// next round's playback; a wrong note resets the game.
    pub fn submit_note(&self, value: u8) -> Result<Judgment, GameError> {
        let note = Note::new(value, self.inner.config.note_count)?;

        let (judgment, playback, update) = {
            let mut shared = self.inner.lock();
            if !shared.game.is_started() {
                return Err(GameError::NotStarted);
            }
            if !shared.game.is_accepting_input() {
                warn!("Note {note} refused, playback in progress");
                return Err(GameError::InputClosed);
            }

            let from = shared.game.phase();
            let judgment = shared.game.record_input(note);
            debug!(
                "Note {note} accepted ({}/{})",
                shared.game.attempt().len(),
                shared.game.sequence().len()
            );

            let playback = match judgment {
                Judgment::Pending => None,
                Judgment::RoundWon => {
                    let next = self.inner.next_note();
                    shared.game.advance_round(next);
                    shared.token += 1;
                    let round = shared.game.round();
                    shared.best_round = shared.best_round.max(round);
                    info!("Round {round} reached");
                    Some((shared.token, shared.game.sequence().to_vec()))
                }
                Judgment::Lost => {
                    info!("Game lost at round {}", shared.game.round());
                    shared.abandon();
                    None
                }
            };

            shared.record_phase(from);
            (judgment, playback, shared.stamp())
        };

        self.inner.publish(update);

        self.inner
            .presenter
            .play_tone(self.inner.config.pitch_for(note));

        if judgment == Judgment::Lost {
            self.inner
                .presenter
                .trigger_transition(ScreenTransition::ShowStart);
        }
        if let Some((token, notes)) = playback {
            self.spawn_playback(token, notes);
        }

        Ok(judgment)
    }

    /// Return to the start screen, abandoning any game and its playback.
    pub fn reset(&self) {
        let update = {
            let mut shared = self.inner.lock();
            let from = shared.game.phase();
            shared.abandon();
            shared.record_phase(from);
            shared.stamp()
        };

        self.inner.publish(update);

        info!("Game reset");
        self.inner
            .presenter
            .trigger_transition(ScreenTransition::ShowStart);
    }

    fn spawn_playback(&self, token: u64, notes: Vec<Note>) -> JoinHandle<PlaybackOutcome> {
        debug!("Playback run {token} scheduled ({} notes)", notes.len());
        tokio::spawn(play_sequence(Arc::clone(&self.inner), token, notes))
    }
}

impl<P, G> GameEngine<P, G> {
    pub fn config(&self) -> &GameConfig {
        &self.inner.config
    }

    /// Current observable state.
    pub fn snapshot(&self) -> GameSnapshot {
        let shared = self.inner.lock();
        GameSnapshot::capture(&shared.game, shared.best_round)
    }

    /// Receive a snapshot after every state change.
    ///
    /// Snapshots are sent without the engine lock held, so engine queries
    /// are safe while a borrowed snapshot is alive. Engine commands are not:
    /// they publish and would wait for the borrow to end.
    pub fn subscribe(&self) -> watch::Receiver<GameSnapshot> {
        self.inner.updates.subscribe()
    }

    /// Wait until input opens, or return at once if no game is running.
    pub async fn wait_for_input(&self) -> GameSnapshot {
        let mut updates = self.subscribe();
        let ready = updates
            .wait_for(|s| s.accepting_input || !s.started)
            .await
            .map(|snapshot| snapshot.clone());

        match ready {
            Ok(snapshot) => snapshot,
            Err(_) => self.snapshot(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.inner.lock().game.phase()
    }

    pub fn round(&self) -> u32 {
        self.inner.lock().game.round()
    }

    pub fn best_round(&self) -> u32 {
        self.inner.lock().best_round
    }

    pub fn is_started(&self) -> bool {
        self.inner.lock().game.is_started()
    }

    pub fn is_accepting_input(&self) -> bool {
        self.inner.lock().game.is_accepting_input()
    }

    /// Whether the sequence is currently being played back.
    pub fn is_playing(&self) -> bool {
        self.phase() == GamePhase::Playback
    }

    /// Note emphasized by playback right now, if any.
    pub fn current_playback_note(&self) -> Option<Note> {
        self.inner.lock().game.cursor()
    }

    pub fn is_round_winnable(&self) -> bool {
        self.inner.lock().game.is_round_winnable()
    }

    pub fn session_id(&self) -> Option<Uuid> {
        self.inner.lock().game.session_id()
    }

    pub fn sequence(&self) -> Vec<Note> {
        self.inner.lock().game.sequence().to_vec()
    }

    pub fn attempt(&self) -> Vec<Note> {
        self.inner.lock().game.attempt().to_vec()
    }

    /// Phase changes since the last `start()`.
    pub fn history(&self) -> PhaseHistory {
        self.inner.lock().history.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::time::Duration;
    use tokio::time::sleep;

    #[derive(Clone, Default)]
    struct RecordingPresenter {
        tones: Arc<Mutex<Vec<f32>>>,
        transitions: Arc<Mutex<Vec<ScreenTransition>>>,
    }

    impl RecordingPresenter {
        fn tones(&self) -> Vec<f32> {
            self.tones.lock().unwrap().clone()
        }

        fn transitions(&self) -> Vec<ScreenTransition> {
            self.transitions.lock().unwrap().clone()
        }
    }

    impl Presenter for RecordingPresenter {
        fn play_tone(&self, pitch: f32) {
            self.tones.lock().unwrap().push(pitch);
        }

        fn trigger_transition(&self, transition: ScreenTransition) {
            self.transitions.lock().unwrap().push(transition);
        }
    }

    /// Hands out a fixed list of notes, then zeros.
    struct ScriptedNotes {
        notes: VecDeque<u8>,
    }

    impl NoteGenerator for ScriptedNotes {
        fn next_note(&mut self, note_count: u8) -> Note {
            Note::new(self.notes.pop_front().unwrap_or(0), note_count).unwrap()
        }
    }

    fn engine_with(
        notes: &[u8],
    ) -> (GameEngine<RecordingPresenter, ScriptedNotes>, RecordingPresenter) {
        let presenter = RecordingPresenter::default();
        let generator = ScriptedNotes {
            notes: notes.iter().copied().collect(),
        };
        let engine = GameEngine::new(GameConfig::default(), presenter.clone(), generator).unwrap();
        (engine, presenter)
    }

    fn n(value: u8) -> Note {
        Note::new(value, 3).unwrap()
    }

    fn pitch(value: u8) -> f32 {
        1.0 + f32::from(value) * 0.3
    }

    #[tokio::test(start_paused = true)]
    async fn start_plays_one_note_then_opens_input() {
        let (engine, presenter) = engine_with(&[1]);

        let playback = engine.start();
        assert!(engine.is_started());
        assert!(engine.is_playing());
        assert!(!engine.is_accepting_input());
        assert_eq!(engine.sequence(), vec![n(1)]);
        assert_eq!(presenter.transitions(), vec![ScreenTransition::RevealBoard]);

        assert_eq!(playback.await.unwrap(), PlaybackOutcome::Completed);
        assert!(engine.is_accepting_input());
        assert!(!engine.is_playing());
        assert_eq!(engine.current_playback_note(), None);
        assert_eq!(presenter.tones(), vec![pitch(1)]);
    }

    #[tokio::test(start_paused = true)]
    async fn playback_follows_fixed_timing() {
        let (engine, _presenter) = engine_with(&[2]);
        engine.start();

        sleep(Duration::from_millis(999)).await;
        assert_eq!(engine.current_playback_note(), None);
        assert!(!engine.is_accepting_input());

        sleep(Duration::from_millis(2)).await;
        assert_eq!(engine.current_playback_note(), Some(n(2)));
        assert!(!engine.is_accepting_input());

        sleep(Duration::from_millis(500)).await;
        assert_eq!(engine.current_playback_note(), None);
        assert!(engine.is_accepting_input());
    }

    #[tokio::test(start_paused = true)]
    async fn input_during_playback_is_refused() {
        let (engine, presenter) = engine_with(&[1]);
        engine.start();

        assert_eq!(engine.submit_note(1), Err(GameError::InputClosed));
        assert!(engine.attempt().is_empty());
        assert!(presenter.tones().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn input_before_start_is_refused() {
        let (engine, _presenter) = engine_with(&[1]);
        assert_eq!(engine.submit_note(1), Err(GameError::NotStarted));
    }

    #[tokio::test(start_paused = true)]
    async fn out_of_range_note_is_rejected() {
        let (engine, _presenter) = engine_with(&[1]);
        engine.start();
        engine.wait_for_input().await;

        assert_eq!(
            engine.submit_note(3),
            Err(GameError::InvalidNote {
                note: 3,
                note_count: 3
            })
        );
        assert!(engine.attempt().is_empty());
        assert!(engine.is_started());
    }

    #[tokio::test(start_paused = true)]
    async fn correct_note_wins_the_round() {
        let (engine, _presenter) = engine_with(&[1, 0]);
        engine.start();
        engine.wait_for_input().await;

        assert_eq!(engine.submit_note(1), Ok(Judgment::RoundWon));
        assert_eq!(engine.sequence(), vec![n(1), n(0)]);
        assert!(engine.attempt().is_empty());
        assert_eq!(engine.round(), 1);
        assert_eq!(engine.best_round(), 1);
        assert!(engine.is_playing());
    }

    #[tokio::test(start_paused = true)]
    async fn wrong_note_resets_the_game() {
        let (engine, presenter) = engine_with(&[1]);
        engine.start();
        engine.wait_for_input().await;

        assert_eq!(engine.submit_note(2), Ok(Judgment::Lost));
        assert!(!engine.is_started());
        assert_eq!(engine.round(), 0);
        assert!(engine.sequence().is_empty());
        assert!(engine.attempt().is_empty());
        assert!(engine.is_round_winnable());
        assert_eq!(engine.session_id(), None);
        assert_eq!(
            presenter.transitions(),
            vec![ScreenTransition::RevealBoard, ScreenTransition::ShowStart]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn partial_attempt_waits_for_more_input() {
        let (engine, _presenter) = engine_with(&[1, 2]);
        engine.start();
        engine.wait_for_input().await;
        engine.submit_note(1).unwrap();
        engine.wait_for_input().await;

        assert_eq!(engine.sequence(), vec![n(1), n(2)]);
        assert_eq!(engine.submit_note(1), Ok(Judgment::Pending));
        assert_eq!(engine.attempt(), vec![n(1)]);
        assert_eq!(engine.round(), 1);
        assert_eq!(engine.sequence().len(), 2);
        assert!(engine.is_accepting_input());
        assert!(engine.is_started());
    }

    #[tokio::test(start_paused = true)]
    async fn tones_use_the_pitch_mapping_for_playback_and_input() {
        let (engine, presenter) = engine_with(&[2, 0]);
        engine.start();
        engine.wait_for_input().await;
        assert_eq!(presenter.tones(), vec![pitch(2)]);

        engine.submit_note(2).unwrap();
        assert_eq!(presenter.tones(), vec![pitch(2), pitch(2)]);

        engine.wait_for_input().await;
        assert_eq!(
            presenter.tones(),
            vec![pitch(2), pitch(2), pitch(2), pitch(0)]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn sequence_grows_by_one_per_round() {
        let (engine, _presenter) = engine_with(&[0, 1, 2, 1, 0, 2]);
        engine.start();

        for expected_round in 1..=5u32 {
            engine.wait_for_input().await;
            let sequence = engine.sequence();
            let (last, prefix) = sequence.split_last().unwrap();
            for note in prefix {
                assert_eq!(engine.submit_note(note.value()), Ok(Judgment::Pending));
            }
            assert_eq!(engine.submit_note(last.value()), Ok(Judgment::RoundWon));

            assert_eq!(engine.round(), expected_round);
            assert_eq!(engine.sequence().len(), engine.round() as usize + 1);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn reset_is_idempotent() {
        let (engine, presenter) = engine_with(&[1]);
        engine.start();
        engine.wait_for_input().await;

        engine.reset();
        let once = engine.snapshot();
        engine.reset();
        let twice = engine.snapshot();

        assert_eq!(once, twice);
        assert!(!twice.started);
        assert_eq!(twice.round, 0);
        assert_eq!(twice.sequence_len, 0);
        assert!(twice.attempt.is_empty());
        assert_eq!(twice.current_playback_note, None);
        assert_eq!(
            presenter.transitions(),
            vec![
                ScreenTransition::RevealBoard,
                ScreenTransition::ShowStart,
                ScreenTransition::ShowStart
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn reset_supersedes_running_playback() {
        let (engine, presenter) = engine_with(&[1]);
        let playback = engine.start();
        engine.reset();

        assert_eq!(playback.await.unwrap(), PlaybackOutcome::Superseded);
        assert!(presenter.tones().is_empty());
        assert!(!engine.is_accepting_input());
        assert!(!engine.is_started());
    }

    #[tokio::test(start_paused = true)]
    async fn two_note_playback_advances_once_per_second() {
        let (engine, _presenter) = engine_with(&[1, 2]);
        engine.start();
        engine.wait_for_input().await;
        engine.submit_note(1).unwrap();

        sleep(Duration::from_millis(999)).await;
        assert_eq!(engine.current_playback_note(), None);

        sleep(Duration::from_millis(2)).await;
        assert_eq!(engine.current_playback_note(), Some(n(1)));

        sleep(Duration::from_millis(1000)).await;
        assert_eq!(engine.current_playback_note(), Some(n(2)));
        assert!(!engine.is_accepting_input());

        sleep(Duration::from_millis(500)).await;
        assert_eq!(engine.current_playback_note(), None);
        assert!(engine.is_accepting_input());
    }

    #[tokio::test(start_paused = true)]
    async fn reset_after_first_note_stops_the_run() {
        let (engine, presenter) = engine_with(&[1, 2]);
        engine.start();
        engine.wait_for_input().await;
        engine.submit_note(1).unwrap();

        sleep(Duration::from_millis(1001)).await;
        assert_eq!(engine.current_playback_note(), Some(n(1)));
        let tones_before_reset = presenter.tones();
        assert_eq!(tones_before_reset, vec![pitch(1), pitch(1), pitch(1)]);

        engine.reset();
        sleep(Duration::from_secs(5)).await;

        assert_eq!(presenter.tones(), tones_before_reset);
        assert_eq!(engine.current_playback_note(), None);
        assert!(!engine.is_accepting_input());
        assert!(!engine.is_started());
    }

    #[tokio::test(start_paused = true)]
    async fn reset_during_input_delay_keeps_input_closed() {
        let (engine, _presenter) = engine_with(&[1, 2]);
        engine.start();
        engine.wait_for_input().await;
        engine.submit_note(1).unwrap();

        sleep(Duration::from_millis(2001)).await;
        assert_eq!(engine.current_playback_note(), Some(n(2)));

        engine.reset();
        sleep(Duration::from_secs(5)).await;

        assert!(!engine.is_accepting_input());
        assert!(!engine.is_started());
        assert_eq!(engine.current_playback_note(), None);
        assert_eq!(engine.history().get_path().last(), Some(&GamePhase::Idle));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn queries_while_holding_a_snapshot_do_not_block_commands() {
        let (engine, _presenter) = engine_with(&[1]);
        let updates = engine.subscribe();

        let writer = engine.clone();
        let resets = tokio::task::spawn_blocking(move || {
            for _ in 0..500 {
                writer.reset();
            }
        });

        let reader = engine.clone();
        let reads = tokio::task::spawn_blocking(move || {
            for _ in 0..500 {
                let view = updates.borrow();
                assert_eq!(view.round, reader.round());
            }
        });

        let finished = tokio::time::timeout(Duration::from_secs(10), async {
            resets.await.unwrap();
            reads.await.unwrap();
        })
        .await;
        assert!(finished.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn start_during_a_game_restarts_cleanly() {
        let (engine, presenter) = engine_with(&[1, 2]);
        let first = engine.start();
        let second = engine.start();

        assert_eq!(first.await.unwrap(), PlaybackOutcome::Superseded);
        assert_eq!(second.await.unwrap(), PlaybackOutcome::Completed);
        assert_eq!(engine.sequence(), vec![n(2)]);
        assert_eq!(presenter.tones(), vec![pitch(2)]);
    }

    #[tokio::test(start_paused = true)]
    async fn history_records_phase_changes() {
        let (engine, _presenter) = engine_with(&[1, 0]);
        engine.start();
        engine.wait_for_input().await;
        engine.submit_note(1).unwrap();
        engine.wait_for_input().await;
        engine.submit_note(2).unwrap();

        let history = engine.history();
        assert_eq!(
            history.get_path(),
            vec![
                GamePhase::Idle,
                GamePhase::Playback,
                GamePhase::AwaitingInput,
                GamePhase::Playback,
                GamePhase::AwaitingInput,
                GamePhase::Idle,
            ]
        );
        assert_eq!(history.highest_round(), Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_state_changes() {
        let (engine, _presenter) = engine_with(&[1]);
        let mut updates = engine.subscribe();
        assert!(!updates.borrow().started);

        engine.start();
        updates.changed().await.unwrap();
        assert!(updates.borrow_and_update().started);

        engine.wait_for_input().await;
        assert!(updates.borrow().accepting_input);
        assert_eq!(updates.borrow().phase, GamePhase::AwaitingInput);
    }

    #[tokio::test(start_paused = true)]
    async fn wait_for_input_returns_when_idle() {
        let (engine, _presenter) = engine_with(&[1]);
        let snapshot = engine.wait_for_input().await;
        assert!(!snapshot.started);
        assert_eq!(snapshot.phase, GamePhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn random_engine_generates_notes_in_range() {
        let presenter = RecordingPresenter::default();
        let engine = GameEngine::with_presenter(presenter);
        engine.start();
        engine.wait_for_input().await;

        let sequence = engine.sequence();
        assert_eq!(sequence.len(), 1);
        assert!(sequence[0].value() < 3);
        assert!(engine.session_id().is_some());
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = GameConfig {
            note_count: 0,
            ..GameConfig::default()
        };
        let generator = ScriptedNotes {
            notes: VecDeque::new(),
        };

        let result = GameEngine::new(config, RecordingPresenter::default(), generator);
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }
}
