//! Engine configuration.
//!
//! Validation uses Stillwater's `Validation` type so that a bad
//! configuration reports every violated rule at once instead of the first
//! one only.
//!
//! # Example
//!
//! ```rust
//! use simon_engine::config::GameConfig;
//! use std::time::Duration;
//!
//! let config = GameConfig::builder()
//!     .note_count(4)
//!     .note_delay(Duration::from_millis(600))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.note_count, 4);
//! assert_eq!(config.input_delay(), Duration::from_millis(500));
//! ```

pub mod builder;

pub use builder::GameConfigBuilder;

use crate::core::Note;
use crate::error::{ConfigError, GameError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Largest board the engine accepts.
pub const MAX_NOTES: u8 = 16;

/// Timing, board size and pitch mapping of a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of distinct notes (pads) on the board.
    pub note_count: u8,
    /// Pause before each note of the playback, in milliseconds.
    pub note_delay_ms: u64,
    /// Pause between the last played note and opening input, in milliseconds.
    pub input_delay_ms: u64,
    /// Pitch multiplier of note 0.
    pub pitch_base: f32,
    /// Pitch added per note value.
    pub pitch_step: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            note_count: 3,
            note_delay_ms: 1000,
            input_delay_ms: 500,
            pitch_base: 1.0,
            pitch_step: 0.3,
        }
    }
}

impl GameConfig {
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::new()
    }

    /// Parse a JSON configuration and validate it.
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GameError::ConfigParse(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    pub fn note_delay(&self) -> Duration {
        Duration::from_millis(self.note_delay_ms)
    }

    pub fn input_delay(&self) -> Duration {
        Duration::from_millis(self.input_delay_ms)
    }

    /// Pitch multiplier handed to the presenter for `note`.
    pub fn pitch_for(&self, note: Note) -> f32 {
        note.pitch(self.pitch_base, self.pitch_step)
    }

    /// Validate all rules, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let checks: Vec<Validation<(), NonEmptyVec<ConfigError>>> = vec![
            rule(self.note_count > 0, ConfigError::NoNotes),
            rule(
                self.note_count <= MAX_NOTES,
                ConfigError::TooManyNotes {
                    count: self.note_count,
                    max: MAX_NOTES,
                },
            ),
            rule(
                self.pitch_base.is_finite() && self.pitch_base > 0.0,
                ConfigError::InvalidPitchBase(self.pitch_base),
            ),
            rule(
                self.pitch_step.is_finite() && self.pitch_step > 0.0,
                ConfigError::InvalidPitchStep(self.pitch_step),
            ),
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`validate`](Self::validate) as a `Result`.
    pub fn check(&self) -> Result<(), GameError> {
        match self.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(GameError::InvalidConfig(
                errors.iter().cloned().collect(),
            )),
        }
    }
}

fn rule(holds: bool, violation: ConfigError) -> Validation<(), NonEmptyVec<ConfigError>> {
    if holds {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}
