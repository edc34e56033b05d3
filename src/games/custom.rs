//! Operator-supplied rule sets.
//!
//! A `CustomRules` alphabet and table come from whoever wires up the
//! session. The table may be incomplete: pairs without an entry resolve to
//! `UnknownChoice`, which the match treats like invalid input.
//!
//! [`CustomRules::placeholder`] is the five-symbol `a`-`e` alphabet with an
//! empty table, ready for rules to be filled in.

use smallvec::SmallVec;

use crate::core::{Choice, ConfigError, Outcome, RulesError};
use crate::rules::{validate_alphabet, OutcomeTable, RuleSet};

/// Alphabet of the placeholder rule set.
pub const PLACEHOLDER_CHOICES: [&str; 5] = ["a", "b", "c", "d", "e"];

/// A rule set with an operator-supplied alphabet and outcome table.
#[derive(Clone, Debug)]
pub struct CustomRules {
    name: String,
    choices: SmallVec<[Choice; 5]>,
    table: OutcomeTable,
}

impl CustomRules {
    /// Create a rule set from an alphabet and a (possibly incomplete) table.
    ///
    /// Fails if the alphabet is empty or repeats a symbol, or if the table
    /// mentions a symbol outside the alphabet.
    pub fn new<C: Into<Choice>>(
        choices: impl IntoIterator<Item = C>,
        table: OutcomeTable,
    ) -> Result<Self, ConfigError> {
        let choices: SmallVec<[Choice; 5]> = choices.into_iter().map(Into::into).collect();
        validate_alphabet(&choices)?;
        table.check_symbols(&choices)?;

        Ok(Self {
            name: "Custom".to_string(),
            choices,
            table,
        })
    }

    /// The `a`-`e` alphabet with no outcomes defined.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            name: "Custom".to_string(),
            choices: PLACEHOLDER_CHOICES.iter().map(|&s| Choice::new(s)).collect(),
            table: OutcomeTable::new(),
        }
    }

    /// Start building a rule set.
    pub fn builder() -> CustomRulesBuilder {
        CustomRulesBuilder::default()
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Get the outcome table.
    #[must_use]
    pub fn table(&self) -> &OutcomeTable {
        &self.table
    }
}

impl RuleSet for CustomRules {
    fn name(&self) -> &str {
        &self.name
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

/// Builder for creating a `CustomRules`.
#[derive(Debug, Default)]
pub struct CustomRulesBuilder {
    name: Option<String>,
    choices: Vec<Choice>,
    table: OutcomeTable,
    self_draws: bool,
}

impl CustomRulesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append one symbol to the alphabet.
    pub fn choice(mut self, choice: impl Into<Choice>) -> Self {
        self.choices.push(choice.into());
        self
    }

    /// Append several symbols to the alphabet.
    pub fn choices<C: Into<Choice>>(mut self, choices: impl IntoIterator<Item = C>) -> Self {
        self.choices.extend(choices.into_iter().map(Into::into));
        self
    }

    /// `winner` beats `loser`, in both directions.
    pub fn beats(mut self, winner: impl Into<Choice>, loser: impl Into<Choice>) -> Self {
        self.table = self.table.with_beats(winner, loser);
        self
    }

    /// Set a single ordered pair.
    pub fn outcome(
        mut self,
        player: impl Into<Choice>,
        computer: impl Into<Choice>,
        outcome: Outcome,
    ) -> Self {
        self.table.insert(player, computer, outcome);
        self
    }

    /// Fill the diagonal with draws when building.
    pub fn self_draws(mut self) -> Self {
        self.self_draws = true;
        self
    }

    /// Validate and build the rule set.
    pub fn build(self) -> Result<CustomRules, ConfigError> {
        let table = if self.self_draws {
            self.table.with_draws(&self.choices)
        } else {
            self.table
        };

        let rules = CustomRules::new(self.choices, table)?;
        Ok(match self.name {
            Some(name) => rules.with_name(name),
            None => rules,
        })
    }
}
