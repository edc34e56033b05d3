//! Error taxonomy.
//!
//! - [`RulesError`]: a rule set has no outcome for a pair. Recoverable.
//! - [`RoundError`]: a round could not be played. Recoverable; the caller
//!   re-prompts and no score changes.
//! - [`ConfigError`]: bad construction arguments. Fatal, raised before play.

use thiserror::Error;

use super::Choice;

/// Failure to resolve a pair of choices.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    /// Either choice is outside the alphabet, or the table has no entry
    /// for the pair.
    #[error("no outcome defined for {player} against {computer}")]
    UnknownChoice { player: Choice, computer: Choice },
}

impl RulesError {
    /// Build the error for an unresolvable pair.
    pub fn unknown(player: &Choice, computer: &Choice) -> Self {
        RulesError::UnknownChoice {
            player: player.clone(),
            computer: computer.clone(),
        }
    }
}

/// Failure to play a single round.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The player's text names no choice in the alphabet.
    #[error("invalid choice {input:?}")]
    InvalidChoice { input: String },

    /// The rule set could not resolve the round.
    #[error(transparent)]
    UnknownChoice(#[from] RulesError),

    /// A round was requested after the match ended.
    #[error("the match is already finished")]
    MatchFinished,
}

impl RoundError {
    /// Whether the caller should re-prompt for input.
    ///
    /// Both invalid input and unresolvable pairs are handled identically.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, RoundError::InvalidChoice { .. } | RoundError::UnknownChoice(_))
    }
}

/// Invalid construction arguments.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("rounds to win must be at least 1")]
    ZeroRoundsToWin,

    #[error("a rule set needs at least one choice")]
    EmptyAlphabet,

    #[error("choice {0:?} is blank or has surrounding whitespace")]
    BlankChoice(String),

    #[error("choice {0:?} appears more than once")]
    DuplicateChoice(String),

    #[error("outcome table references {0:?}, which is not a choice")]
    ForeignChoice(String),
}
