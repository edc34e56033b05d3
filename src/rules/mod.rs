//! Rule sets: the alphabet and the outcome of every pair of choices.
//!
//! Rule sets implement `RuleSet`; the match loop calls into it but never
//! interprets symbols directly.

pub mod engine;
pub mod table;

pub use engine::{validate_alphabet, RuleSet};
pub use table::OutcomeTable;
