//! Concrete rule sets.
//!
//! - `classic`: Rock-Paper-Scissors-Lizard-Spock
//! - `custom`: operator-supplied alphabet and table

pub mod classic;
pub mod custom;

pub use classic::DefaultRules;
pub use custom::{CustomRules, CustomRulesBuilder};
