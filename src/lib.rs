//! # rpsls
//!
//! Rock-Paper-Scissors-Lizard-Spock against a randomly-choosing computer.
//!
//! ## Design Principles
//!
//! 1. **Rules Are Data**: No hardcoded symbols outside the rule sets.
//!    A rule set supplies the alphabet and the outcome of every pair.
//!
//! 2. **Pure Resolution**: `RuleSet::resolve` has no side effects. Printing
//!    belongs to the terminal front end.
//!
//! 3. **Injected Randomness**: The computer draws through `ChoiceSource`,
//!    so tests substitute a scripted source.
//!
//! ## Modules
//!
//! - `core`: Choices, outcomes, configuration, RNG, errors
//! - `rules`: `RuleSet` trait and outcome tables
//! - `games`: The default five-symbol game and custom rule sets
//! - `play`: The match state machine and the terminal driver

pub mod core;
pub mod rules;
pub mod games;
pub mod play;

// Re-export commonly used types
pub use crate::core::{
    Choice, Outcome, Side,
    MatchConfig, DEFAULT_ROUNDS_TO_WIN,
    ChoiceSource, GameRng, ScriptedSource,
    ConfigError, RoundError, RulesError,
};

pub use crate::rules::{OutcomeTable, RuleSet};

pub use crate::games::{CustomRules, CustomRulesBuilder, DefaultRules};

pub use crate::play::{Console, ConsoleError, Match, MatchStatus, MatchSummary, RoundResult};
