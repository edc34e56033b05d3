//! Playing matches: the scoring state machine and its terminal front end.

pub mod game;
pub mod console;

pub use game::{Match, MatchStatus, MatchSummary, RoundResult};
pub use console::{Console, ConsoleError};
