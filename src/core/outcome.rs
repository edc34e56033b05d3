//! Round outcomes.

use serde::{Deserialize, Serialize};

/// One of the two sides of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human at the terminal.
    Player,
    /// The randomly-choosing opponent.
    Computer,
}

impl Side {
    /// Get the other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => f.write_str("Player"),
            Side::Computer => f.write_str("Computer"),
        }
    }
}

/// Result of resolving one pair of choices.
///
/// Always read from the player's perspective: `resolve(player, computer)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWins,
    ComputerWins,
    Draw,
}

impl Outcome {
    /// The side that won, or `None` on a draw.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Outcome::PlayerWins => Some(Side::Player),
            Outcome::ComputerWins => Some(Side::Computer),
            Outcome::Draw => None,
        }
    }

    /// The outcome with the two sides swapped.
    ///
    /// If `resolve(a, b)` is `PlayerWins` then `resolve(b, a)` is
    /// `outcome.reversed()`, i.e. `ComputerWins`.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Outcome::PlayerWins => Outcome::ComputerWins,
            Outcome::ComputerWins => Outcome::PlayerWins,
            Outcome::Draw => Outcome::Draw,
        }
    }

    #[must_use]
    pub const fn is_draw(self) -> bool {
        matches!(self, Outcome::Draw)
    }
}
