//! Choice symbols.
//!
//! A `Choice` is one symbol from a rule set's alphabet ("rock", "spock", "a").
//! The engine never interprets symbols - rule sets assign meaning to them
//! through their outcome tables.

use serde::{Deserialize, Serialize};

/// A symbol from a rule set's alphabet.
///
/// Stored exactly as the rule set declared it. Player input is matched
/// against it case-insensitively via [`Choice::matches`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Choice(String);

impl Choice {
    /// Create a new choice symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// Get the symbol text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether `text` names this choice, ignoring case and
    /// surrounding whitespace.
    ///
    /// ```
    /// use rpsls::core::Choice;
    ///
    /// let rock = Choice::new("rock");
    /// assert!(rock.matches("ROCK"));
    /// assert!(rock.matches("  Rock\n"));
    /// assert!(!rock.matches("rocks"));
    /// ```
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        let text = text.trim();
        self.0 == text || self.0.to_lowercase() == text.to_lowercase()
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Choice {
    fn from(symbol: &str) -> Self {
        Self::new(symbol)
    }
}

impl From<String> for Choice {
    fn from(symbol: String) -> Self {
        Self(symbol)
    }
}

impl AsRef<str> for Choice {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
