//! Builder API for game configuration.

use crate::config::GameConfig;
use crate::error::GameError;
use std::time::Duration;

/// Builder for [`GameConfig`], starting from the defaults.
pub struct GameConfigBuilder {
    config: GameConfig,
}

impl GameConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
        }
    }

    /// Set the number of distinct notes
    pub fn note_count(mut self, count: u8) -> Self {
        self.config.note_count = count;
        self
    }

    /// Set the pause before each played note
    pub fn note_delay(mut self, delay: Duration) -> Self {
        self.config.note_delay_ms = duration_ms(delay);
        self
    }

    /// Set the pause between playback and opening input
    pub fn input_delay(mut self, delay: Duration) -> Self {
        self.config.input_delay_ms = duration_ms(delay);
        self
    }

    /// Set the pitch mapping `base + note * step`
    pub fn pitch(mut self, base: f32, step: f32) -> Self {
        self.config.pitch_base = base;
        self.config.pitch_step = step;
        self
    }

    /// Build the configuration, reporting every violated rule
    pub fn build(self) -> Result<GameConfig, GameError> {
        self.config.check()?;
        Ok(self.config)
    }
}

impl Default for GameConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn duration_ms(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}
