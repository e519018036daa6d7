//! Error types.
//!
//! Losing a round is not an error: it is reported as
//! [`Judgment::Lost`](crate::core::Judgment). These errors describe misuse
//! of the engine by its caller.

use thiserror::Error;

/// Errors returned by engine commands and configuration loading.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GameError {
    #[error("Invalid note value {note}, expected 0..{note_count}")]
    InvalidNote { note: u8, note_count: u8 },

    #[error("No game in progress. Call start() first")]
    NotStarted,

    #[error("Input is closed while the sequence is playing back")]
    InputClosed,

    #[error("Invalid configuration: {}", format_violations(.0))]
    InvalidConfig(Vec<ConfigError>),

    #[error("Configuration could not be parsed: {0}")]
    ConfigParse(String),
}

/// A single configuration rule violation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("note_count must be at least 1")]
    NoNotes,

    #[error("note_count ({count}) exceeds the maximum of {max}")]
    TooManyNotes { count: u8, max: u8 },

    #[error("pitch_base must be a positive finite number (got {0})")]
    InvalidPitchBase(f32),

    #[error("pitch_step must be a positive finite number (got {0})")]
    InvalidPitchStep(f32),
}

fn format_violations(violations: &[ConfigError]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
