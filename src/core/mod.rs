//! Core types: choices, outcomes, configuration, randomness, errors.
//!
//! This module contains the building blocks shared by every rule set.
//! Rule sets configure the alphabet; the core never hardcodes symbols.

pub mod choice;
pub mod outcome;
pub mod config;
pub mod rng;
pub mod error;

pub use choice::Choice;
pub use outcome::{Outcome, Side};
pub use config::{MatchConfig, DEFAULT_ROUNDS_TO_WIN};
pub use rng::{ChoiceSource, GameRng, ScriptedSource};
pub use error::{ConfigError, RoundError, RulesError};
