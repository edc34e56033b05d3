//! Rule set trait.
//!
//! Rule sets implement `RuleSet` to define:
//! - The alphabet of valid choices, in display order
//! - The outcome of any ordered pair of choices
//!
//! ## Contract
//!
//! - `resolve` is pure. Announcing a round is the caller's business.
//! - `resolve(x, x)` is `Draw` wherever the pair is defined.
//! - For distinct `a`, `b`: `resolve(b, a) == resolve(a, b).reversed()`
//!   and neither is a draw.
//! - Pairs with no defined outcome, and choices outside the alphabet,
//!   fail with `RulesError::UnknownChoice`.

use crate::core::{Choice, ConfigError, Outcome, RulesError};

/// Valid alphabet plus the win/lose/draw relation over it.
pub trait RuleSet {
    /// Human-readable name (for logging and display).
    fn name(&self) -> &str;

    /// The valid choices, in the order they are shown to the player.
    fn choices(&self) -> &[Choice];

    /// Resolve `player` against `computer`.
    fn resolve(&self, player: &Choice, computer: &Choice) -> Result<Outcome, RulesError>;

    // === Convenience Methods ===

    /// Find the choice named by free-form player text.
    ///
    /// Comparison ignores case and surrounding whitespace. Returns the
    /// canonical symbol from the alphabet.
    fn parse_choice(&self, text: &str) -> Option<&Choice> {
        self.choices().iter().find(|choice| choice.matches(text))
    }

    /// Every ordered pair of the alphabet that `resolve` cannot answer.
    fn missing_pairs(&self) -> Vec<(Choice, Choice)> {
        let choices = self.choices();
        let mut missing = Vec::new();

        for player in choices {
            for computer in choices {
                if self.resolve(player, computer).is_err() {
                    missing.push((player.clone(), computer.clone()));
                }
            }
        }

        missing
    }

    /// Check that the relation is a complete tournament.
    ///
    /// True when every pair resolves, the diagonal is all draws, and every
    /// distinct pair has exactly one winner consistently in both directions.
    fn is_tournament(&self) -> bool {
        let choices = self.choices();

        choices.iter().enumerate().all(|(i, a)| {
            choices[i..].iter().all(|b| {
                match (self.resolve(a, b), self.resolve(b, a)) {
                    (Ok(forward), Ok(backward)) if a == b => forward.is_draw() && backward.is_draw(),
                    (Ok(forward), Ok(backward)) => !forward.is_draw() && backward == forward.reversed(),
                    _ => false,
                }
            })
        })
    }
}

impl<R: RuleSet + ?Sized> RuleSet for &R {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn choices(&self) -> &[Choice] {
        (**self).choices()
    }

    fn resolve(&self, player: &Choice, computer: &Choice) -> Result<Outcome, RulesError> {
        (**self).resolve(player, computer)
    }
}

impl<R: RuleSet + ?Sized> RuleSet for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn choices(&self) -> &[Choice] {
        (**self).choices()
    }

    fn resolve(&self, player: &Choice, computer: &Choice) -> Result<Outcome, RulesError> {
        (**self).resolve(player, computer)
    }
}

/// Check an alphabet is usable: non-empty, every symbol non-blank and
/// unpadded, no symbol repeated.
///
/// Player input is trimmed and matched case-insensitively, so a padded
/// symbol could never be chosen and symbols that differ only by case
/// count as repeats.
pub fn validate_alphabet(choices: &[Choice]) -> Result<(), ConfigError> {
    if choices.is_empty() {
        return Err(ConfigError::EmptyAlphabet);
    }

    for (i, choice) in choices.iter().enumerate() {
        let symbol = choice.as_str();
        if symbol.trim().is_empty() || symbol.trim() != symbol {
            return Err(ConfigError::BlankChoice(symbol.to_string()));
        }
        if choices[..i].iter().any(|earlier| earlier.matches(choice.as_str())) {
            return Err(ConfigError::DuplicateChoice(choice.to_string()));
        }
    }

    Ok(())
}
