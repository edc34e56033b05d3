//! The canonical five-symbol game.
//!
//! - Rock crushes scissors and lizard
//! - Paper covers rock and disproves Spock
//! - Scissors cut paper and decapitate lizard
//! - Lizard eats paper and poisons Spock
//! - Spock vaporizes rock and smashes scissors

use smallvec::SmallVec;

use crate::core::{Choice, Outcome, RulesError};
use crate::rules::{OutcomeTable, RuleSet};

pub const ROCK: &str = "rock";
pub const PAPER: &str = "paper";
pub const SCISSORS: &str = "scissors";
pub const LIZARD: &str = "lizard";
pub const SPOCK: &str = "spock";

/// The alphabet, in display order.
pub const CHOICES: [&str; 5] = [ROCK, PAPER, SCISSORS, LIZARD, SPOCK];

/// Every (winner, loser) pair. Each symbol beats exactly two others.
const BEATS: [(&str, &str); 10] = [
    (ROCK, SCISSORS),
    (ROCK, LIZARD),
    (PAPER, ROCK),
    (PAPER, SPOCK),
    (SCISSORS, PAPER),
    (SCISSORS, LIZARD),
    (LIZARD, PAPER),
    (LIZARD, SPOCK),
    (SPOCK, ROCK),
    (SPOCK, SCISSORS),
];

/// Rock-Paper-Scissors-Lizard-Spock.
#[derive(Clone, Debug)]
pub struct DefaultRules {
    choices: SmallVec<[Choice; 5]>,
    table: OutcomeTable,
}

impl Default for DefaultRules {
    fn default() -> Self {
        let choices: SmallVec<[Choice; 5]> = CHOICES.iter().map(|&s| Choice::new(s)).collect();
        let table = BEATS
            .iter()
            .fold(OutcomeTable::new().with_draws(&choices), |table, &(winner, loser)| {
                table.with_beats(winner, loser)
            });

        Self { choices, table }
    }
}

impl DefaultRules {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RuleSet for DefaultRules {
    fn name(&self) -> &str {
        "Default"
    }

    fn choices(&self) -> &[Choice] {
        &self.choices
    }

    fn resolve(&self, player: &Choice, computer: &Choice) -> Result<Outcome, RulesError> {
        self.table
            .get(player, computer)
            .ok_or_else(|| RulesError::unknown(player, computer))
    }
}
