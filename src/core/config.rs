//! Match configuration.
//!
//! Matches are configured at construction by providing a `MatchConfig`.
//! The config is validated once, before the first round, so a bad value
//! can never surface mid-match.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Rounds a side must win to take the match when nothing else is configured.
pub const DEFAULT_ROUNDS_TO_WIN: u32 = 3;

/// Complete match configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Round wins needed to take the match. Must be positive.
    pub rounds_to_win: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rounds_to_win: DEFAULT_ROUNDS_TO_WIN,
        }
    }
}

impl MatchConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of round wins needed to take the match.
    #[must_use]
    pub fn with_rounds_to_win(mut self, rounds: u32) -> Self {
        self.rounds_to_win = rounds;
        self
    }

    /// Check the configuration for values that can never produce a match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds_to_win == 0 {
            return Err(ConfigError::ZeroRoundsToWin);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_best_of_five() {
        let config = MatchConfig::new();
        assert_eq!(config.rounds_to_win, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::new().with_rounds_to_win(7);
        assert_eq!(config.rounds_to_win, 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let config = MatchConfig::new().with_rounds_to_win(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroRoundsToWin));
    }
}
