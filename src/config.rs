//! Game configuration.
//!
//! Defaults mirror the constants of the browser game. The binary fills a
//! [`GameConfig`] from command-line flags.

use std::time::Duration;

use clap::ValueEnum;
use thiserror::Error;

pub const QUESTIONS_PER_GAME: usize = 10;
pub const OPTIONS_PER_QUESTION: usize = 4;
pub const TIME_PER_QUESTION: Duration = Duration::from_secs(15);
pub const HINTS_PER_GAME: u32 = 3;
pub const REVEAL_DELAY: Duration = Duration::from_millis(1500);
pub const GAME_OVER_DELAY: Duration = Duration::from_millis(2000);

/// Which rule set a session follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum GameMode {
    /// A fixed number of questions, auto-advancing after each answer.
    #[default]
    Classic,
    /// Timed questions with hints until the first mistake.
    Survival,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("a question needs at least 2 options, got {0}")]
    TooFewOptions(usize),

    #[error("catalog has {available} countries but each question needs {required}")]
    CatalogTooSmall { available: usize, required: usize },

    #[error("a classic game needs at least one question")]
    NoQuestions,

    #[error("time per question must be at least one second")]
    NoTime,

    #[error("time per question of {0} seconds is too long")]
    TimeOutOfRange(u64),

    #[error("country code {0:?} appears more than once in the catalog")]
    DuplicateCode(String),
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub mode: GameMode,
    pub questions_per_game: usize,
    pub options_per_question: usize,
    pub time_per_question: Duration,
    pub hints_per_game: u32,
    pub reveal_delay: Duration,
    pub game_over_delay: Duration,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Countdown length in whole ticks, saturating at `u32::MAX`.
    ///
    /// [`validate`](Self::validate) rejects durations that do not fit.
    pub fn seconds_per_question(&self) -> u32 {
        u32::try_from(self.time_per_question.as_secs()).unwrap_or(u32::MAX)
    }

    /// Check the config against the catalog it will draw from.
    pub fn validate(&self, catalog_len: usize) -> Result<(), ConfigError> {
        if self.options_per_question < 2 {
            return Err(ConfigError::TooFewOptions(self.options_per_question));
        }

        if catalog_len < self.options_per_question {
            return Err(ConfigError::CatalogTooSmall {
                available: catalog_len,
                required: self.options_per_question,
            });
        }

        let seconds = self.time_per_question.as_secs();
        if u32::try_from(seconds).is_err() {
            return Err(ConfigError::TimeOutOfRange(seconds));
        }

        match self.mode {
            GameMode::Classic if self.questions_per_game == 0 => Err(ConfigError::NoQuestions),
            GameMode::Survival if self.seconds_per_question() == 0 => Err(ConfigError::NoTime),
            _ => Ok(()),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            questions_per_game: QUESTIONS_PER_GAME,
            options_per_question: OPTIONS_PER_QUESTION,
            time_per_question: TIME_PER_QUESTION,
            hints_per_game: HINTS_PER_GAME,
            reveal_delay: REVEAL_DELAY,
            game_over_delay: GAME_OVER_DELAY,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let config = GameConfig::default();
        assert_eq!(config.validate(4), Ok(()));
        assert_eq!(
            config.validate(3),
            Err(ConfigError::CatalogTooSmall {
                available: 3,
                required: 4
            })
        );

        let config = GameConfig {
            options_per_question: 1,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(10), Err(ConfigError::TooFewOptions(1)));

        let config = GameConfig {
            questions_per_game: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(10), Err(ConfigError::NoQuestions));
    }

    #[test]
    fn test_survival_needs_time() {
        let config = GameConfig {
            time_per_question: Duration::from_millis(500),
            ..GameConfig::new(GameMode::Survival)
        };
        assert_eq!(config.validate(10), Err(ConfigError::NoTime));
    }

    #[test]
    fn test_oversized_time_is_rejected() {
        let seconds = u64::from(u32::MAX) + 16;
        let config = GameConfig {
            time_per_question: Duration::from_secs(seconds),
            ..GameConfig::new(GameMode::Survival)
        };
        assert_eq!(config.validate(10), Err(ConfigError::TimeOutOfRange(seconds)));
        assert_eq!(config.seconds_per_question(), u32::MAX);
    }
}
