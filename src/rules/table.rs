//! Outcome tables.
//!
//! An `OutcomeTable` maps an ordered pair `(player, computer)` to an
//! [`Outcome`]. Keys are unique; inserting a pair twice replaces the entry.
//! Tables may be incomplete - a missing entry is reported by the rule set
//! as `UnknownChoice`, never by panicking.

use rustc_hash::FxHashMap;

use crate::core::{Choice, ConfigError, Outcome};

/// Mapping from `(player, computer)` to the round outcome.
#[derive(Clone, Debug, Default)]
pub struct OutcomeTable {
    rows: FxHashMap<Choice, FxHashMap<Choice, Outcome>>,
    len: usize,
}

impl OutcomeTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the outcome for one ordered pair.
    ///
    /// Returns the previous outcome, if any.
    pub fn insert(
        &mut self,
        player: impl Into<Choice>,
        computer: impl Into<Choice>,
        outcome: Outcome,
    ) -> Option<Outcome> {
        let previous = self
            .rows
            .entry(player.into())
            .or_default()
            .insert(computer.into(), outcome);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Record that `winner` beats `loser`, in both directions.
    ///
    /// ```
    /// use rpsls::core::{Choice, Outcome};
    /// use rpsls::rules::OutcomeTable;
    ///
    /// let table = OutcomeTable::new().with_beats("rock", "scissors");
    /// let (rock, scissors) = (Choice::new("rock"), Choice::new("scissors"));
    /// assert_eq!(table.get(&rock, &scissors), Some(Outcome::PlayerWins));
    /// assert_eq!(table.get(&scissors, &rock), Some(Outcome::ComputerWins));
    /// ```
    #[must_use]
    pub fn with_beats(mut self, winner: impl Into<Choice>, loser: impl Into<Choice>) -> Self {
        let (winner, loser) = (winner.into(), loser.into());
        self.insert(winner.clone(), loser.clone(), Outcome::PlayerWins);
        self.insert(loser, winner, Outcome::ComputerWins);
        self
    }

    /// Record every `(x, x)` pair of `alphabet` as a draw.
    #[must_use]
    pub fn with_draws<'a>(mut self, alphabet: impl IntoIterator<Item = &'a Choice>) -> Self {
        for choice in alphabet {
            self.insert(choice.clone(), choice.clone(), Outcome::Draw);
        }
        self
    }

    /// Look up the outcome of `player` against `computer`.
    #[must_use]
    pub fn get(&self, player: &Choice, computer: &Choice) -> Option<Outcome> {
        self.rows.get(player)?.get(computer).copied()
    }

    /// Number of ordered pairs with an outcome.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Every symbol the table mentions, on either side of a pair.
    pub fn symbols(&self) -> impl Iterator<Item = &Choice> {
        self.rows
            .iter()
            .flat_map(|(player, row)| std::iter::once(player).chain(row.keys()))
    }

    /// Check that the table only mentions symbols from `alphabet`.
    pub fn check_symbols(&self, alphabet: &[Choice]) -> Result<(), ConfigError> {
        match self.symbols().find(|symbol| !alphabet.contains(symbol)) {
            Some(foreign) => Err(ConfigError::ForeignChoice(foreign.to_string())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(symbol: &str) -> Choice {
        Choice::new(symbol)
    }

    #[test]
    fn test_empty_table() {
        let table = OutcomeTable::new();
        assert!(table.is_empty());
        assert_eq!(table.get(&c("a"), &c("b")), None);
        assert_eq!(table.symbols().count(), 0);
    }

    #[test]
    fn test_insert_counts_unique_pairs() {
        let mut table = OutcomeTable::new();
        assert_eq!(table.insert("a", "b", Outcome::PlayerWins), None);
        assert_eq!(table.insert("a", "b", Outcome::ComputerWins), Some(Outcome::PlayerWins));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&c("a"), &c("b")), Some(Outcome::ComputerWins));
    }

    #[test]
    fn test_beats_is_antisymmetric() {
        let table = OutcomeTable::new().with_beats("paper", "rock");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&c("paper"), &c("rock")), Some(Outcome::PlayerWins));
        assert_eq!(table.get(&c("rock"), &c("paper")), Some(Outcome::ComputerWins));
    }

    #[test]
    fn test_draws_on_diagonal() {
        let alphabet = vec![c("x"), c("y")];
        let table = OutcomeTable::new().with_draws(&alphabet);
        assert_eq!(table.get(&c("x"), &c("x")), Some(Outcome::Draw));
        assert_eq!(table.get(&c("y"), &c("y")), Some(Outcome::Draw));
        assert_eq!(table.get(&c("x"), &c("y")), None);
    }

    #[test]
    fn test_check_symbols() {
        let alphabet = vec![c("a"), c("b")];
        let table = OutcomeTable::new().with_beats("a", "b");
        assert!(table.check_symbols(&alphabet).is_ok());

        let table = table.with_beats("a", "z");
        assert_eq!(
            table.check_symbols(&alphabet),
            Err(ConfigError::ForeignChoice("z".into()))
        );
    }
}
