//! Match state machine.
//!
//! ```text
//! AwaitingInput --play_round--> RoundResolved --+--> AwaitingInput
//!       ^                                       |
//!       +-- InvalidChoice / UnknownChoice       +--> Finished
//! ```
//!
//! `RoundResolved` is transient: it is the [`RoundResult`] handed back by
//! [`Match::play_round`]. The match is `Finished` as soon as either score
//! reaches `rounds_to_win`, so no score ever exceeds it.

use serde::{Deserialize, Serialize};

use crate::core::{
    Choice, ChoiceSource, ConfigError, MatchConfig, Outcome, RoundError, RulesError, Side,
};
use crate::rules::RuleSet;

/// Where the match is between rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    /// Waiting for the player's next choice.
    AwaitingInput,
    /// One side reached the threshold.
    Finished,
}

/// Record of a resolved round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// 1-based index among resolved rounds.
    pub round: u32,
    pub player_choice: Choice,
    pub computer_choice: Choice,
    pub outcome: Outcome,
    /// Scores after this round.
    pub player_score: u32,
    pub computer_score: u32,
}

/// Final or running tally of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub rules: String,
    pub rounds_to_win: u32,
    pub rounds_played: u32,
    pub player_score: u32,
    pub computer_score: u32,
    /// `None` while the match is still running.
    pub winner: Option<Side>,
}

/// A player-versus-computer match under one rule set.
///
/// Owns its scores exclusively; they change only inside [`Match::play_round`].
pub struct Match<R, S> {
    rules: R,
    source: S,
    config: MatchConfig,
    player_score: u32,
    computer_score: u32,
    rounds: Vec<RoundResult>,
}

impl<R: RuleSet, S: ChoiceSource> Match<R, S> {
    /// Create a match.
    ///
    /// Fails fast if the configuration is invalid or the rule set has no
    /// choices. Incomplete tables are allowed; their gaps surface per round
    /// as `UnknownChoice`.
    pub fn new(rules: R, source: S, config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        if rules.choices().is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }

        let missing = rules.missing_pairs().len();
        if missing > 0 {
            log::info!(
                "{} rules leave {} of {} pairs without an outcome",
                rules.name(),
                missing,
                rules.choices().len().pow(2)
            );
        }

        Ok(Self {
            rules,
            source,
            config,
            player_score: 0,
            computer_score: 0,
            rounds: Vec::new(),
        })
    }

    /// Play one round with the player's raw input.
    ///
    /// On `Err`, nothing about the match has changed except that the random
    /// source may have advanced.
    pub fn play_round(&mut self, input: &str) -> Result<RoundResult, RoundError> {
        if self.is_finished() {
            return Err(RoundError::MatchFinished);
        }

        let player_choice = self
            .rules
            .parse_choice(input)
            .cloned()
            .ok_or_else(|| RoundError::InvalidChoice {
                input: input.trim().to_string(),
            })?;

        // Non-empty: `player_choice` was found in it. Out-of-range picks wrap.
        let choices = self.rules.choices();
        let index = self.source.pick(choices.len()) % choices.len();
        let computer_choice = choices
            .get(index)
            .cloned()
            .ok_or_else(|| RulesError::unknown(&player_choice, &player_choice))?;

        let outcome = self.rules.resolve(&player_choice, &computer_choice)?;

        match outcome {
            Outcome::PlayerWins => self.player_score += 1,
            Outcome::ComputerWins => self.computer_score += 1,
            Outcome::Draw => {}
        }

        let result = RoundResult {
            round: self.rounds.len() as u32 + 1,
            player_choice,
            computer_choice,
            outcome,
            player_score: self.player_score,
            computer_score: self.computer_score,
        };

        log::debug!(
            "round {}: {} vs {} -> {:?} ({}-{})",
            result.round,
            result.player_choice,
            result.computer_choice,
            result.outcome,
            result.player_score,
            result.computer_score
        );

        self.rounds.push(result.clone());

        if self.is_finished() {
            log::debug!("match finished after {} rounds", self.rounds.len());
        }

        Ok(result)
    }

    /// Current state between rounds.
    #[must_use]
    pub fn status(&self) -> MatchStatus {
        if self.player_score >= self.config.rounds_to_win
            || self.computer_score >= self.config.rounds_to_win
        {
            MatchStatus::Finished
        } else {
            MatchStatus::AwaitingInput
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status() == MatchStatus::Finished
    }

    /// The match winner, once finished.
    ///
    /// Decided by score comparison: the player wins only with the strictly
    /// higher score. Scores cannot tie at the end, since only one side
    /// scores per round and the threshold is checked after every round.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        if !self.is_finished() {
            return None;
        }
        if self.player_score > self.computer_score {
            Some(Side::Player)
        } else {
            Some(Side::Computer)
        }
    }

    #[must_use]
    pub fn player_score(&self) -> u32 {
        self.player_score
    }

    #[must_use]
    pub fn computer_score(&self) -> u32 {
        self.computer_score
    }

    #[must_use]
    pub fn rounds_to_win(&self) -> u32 {
        self.config.rounds_to_win
    }

    /// Resolved rounds, oldest first. Invalid input never appears here.
    #[must_use]
    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds.len() as u32
    }

    /// Get the rule set.
    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    #[must_use]
    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            rules: self.rules.name().to_string(),
            rounds_to_win: self.config.rounds_to_win,
            rounds_played: self.rounds_played(),
            player_score: self.player_score,
            computer_score: self.computer_score,
            winner: self.winner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedSource;
    use crate::games::{CustomRules, DefaultRules};

    // Indices into the default alphabet.
    const ROCK: usize = 0;
    const PAPER: usize = 1;
    const SCISSORS: usize = 2;

    fn default_match(script: Vec<usize>, rounds_to_win: u32) -> Match<DefaultRules, ScriptedSource> {
        Match::new(
            DefaultRules::new(),
            ScriptedSource::new(script),
            MatchConfig::new().with_rounds_to_win(rounds_to_win),
        )
        .unwrap()
    }

    #[test]
    fn test_single_round_win_finishes() {
        let mut game = default_match(vec![SCISSORS], 1);

        let result = game.play_round("rock").unwrap();
        assert_eq!(result.outcome, Outcome::PlayerWins);
        assert_eq!(result.computer_choice, Choice::new("scissors"));
        assert_eq!(game.player_score(), 1);
        assert_eq!(game.status(), MatchStatus::Finished);
        assert_eq!(game.winner(), Some(Side::Player));
    }

    #[test]
    fn test_mixed_case_accepted() {
        let mut game = default_match(vec![ROCK], 3);
        let result = game.play_round("ROCK").unwrap();
        assert_eq!(result.player_choice, Choice::new("rock"));
        assert_eq!(result.outcome, Outcome::Draw);
    }

    #[test]
    fn test_invalid_choice_changes_nothing() {
        let mut game = default_match(vec![ROCK], 3);

        let err = game.play_round("banana").unwrap_err();
        assert_eq!(err, RoundError::InvalidChoice { input: "banana".into() });
        assert_eq!(game.player_score(), 0);
        assert_eq!(game.computer_score(), 0);
        assert_eq!(game.rounds_played(), 0);
        assert_eq!(game.status(), MatchStatus::AwaitingInput);
    }

    #[test]
    fn test_invalid_choice_does_not_draw() {
        let mut source = ScriptedSource::always(ROCK);
        let mut game = Match::new(DefaultRules::new(), &mut source, MatchConfig::new()).unwrap();
        assert!(game.play_round("").is_err());
        drop(game);
        assert_eq!(source.picks(), 0);
    }

    #[test]
    fn test_out_of_range_pick_wraps() {
        /// Ignores `n` and always answers 17.
        struct Stuck;

        impl ChoiceSource for Stuck {
            fn pick(&mut self, _n: usize) -> usize {
                17
            }
        }

        let mut game = Match::new(DefaultRules::new(), Stuck, MatchConfig::new()).unwrap();
        let result = game.play_round("rock").unwrap();
        // 17 % 5 == 2
        assert_eq!(result.computer_choice, Choice::new("scissors"));
        assert_eq!(result.outcome, Outcome::PlayerWins);
    }

    #[test]
    fn test_draw_leaves_scores() {
        let mut game = default_match(vec![PAPER], 3);
        let result = game.play_round("paper").unwrap();
        assert_eq!(result.outcome, Outcome::Draw);
        assert_eq!((game.player_score(), game.computer_score()), (0, 0));
        // A draw still counts as a played round.
        assert_eq!(game.rounds_played(), 1);
    }

    #[test]
    fn test_computer_win_scores() {
        let mut game = default_match(vec![PAPER], 3);
        let result = game.play_round("rock").unwrap();
        assert_eq!(result.outcome, Outcome::ComputerWins);
        assert_eq!(game.computer_score(), 1);
        assert_eq!(result.computer_score, 1);
    }

    #[test]
    fn test_unknown_choice_changes_nothing() {
        let mut game = Match::new(
            CustomRules::placeholder(),
            ScriptedSource::always(0),
            MatchConfig::new(),
        )
        .unwrap();

        let err = game.play_round("a").unwrap_err();
        assert!(matches!(err, RoundError::UnknownChoice(_)));
        assert!(err.is_retryable());
        assert_eq!((game.player_score(), game.computer_score()), (0, 0));
        assert!(game.rounds().is_empty());
        assert_eq!(game.status(), MatchStatus::AwaitingInput);
    }

    #[test]
    fn test_stops_after_threshold() {
        // Player: win, lose, win, win. Computer never reaches 3.
        let mut game = default_match(vec![SCISSORS, PAPER, SCISSORS, SCISSORS, ROCK], 3);
        for _ in 0..4 {
            game.play_round("rock").unwrap();
        }

        assert!(game.is_finished());
        assert_eq!(game.player_score(), 3);
        assert_eq!(game.computer_score(), 1);
        assert_eq!(game.play_round("rock"), Err(RoundError::MatchFinished));
        assert_eq!(game.rounds_played(), 4);
    }

    #[test]
    fn test_computer_takes_match() {
        let mut game = default_match(vec![PAPER], 2);
        game.play_round("rock").unwrap();
        assert_eq!(game.winner(), None);
        game.play_round("rock").unwrap();
        assert_eq!(game.winner(), Some(Side::Computer));
    }

    #[test]
    fn test_round_numbers_and_history() {
        let mut game = default_match(vec![ROCK, SCISSORS], 5);
        game.play_round("rock").unwrap();
        game.play_round("nope").unwrap_err();
        game.play_round("rock").unwrap();

        let rounds: Vec<_> = game.rounds().iter().map(|r| r.round).collect();
        assert_eq!(rounds, vec![1, 2]);
        assert_eq!(game.rounds()[1].player_score, 1);
    }

    #[test]
    fn test_construction_errors() {
        let zero = Match::new(
            DefaultRules::new(),
            ScriptedSource::default(),
            MatchConfig::new().with_rounds_to_win(0),
        );
        assert!(matches!(zero, Err(ConfigError::ZeroRoundsToWin)));
    }

    #[test]
    fn test_summary() {
        let mut game = default_match(vec![SCISSORS], 1);
        game.play_round("rock").unwrap();

        let summary = game.summary();
        assert_eq!(summary.rules, "Default");
        assert_eq!(summary.rounds_to_win, 1);
        assert_eq!(summary.rounds_played, 1);
        assert_eq!(summary.winner, Some(Side::Player));

        let json = serde_json::to_string(&summary).unwrap();
        let back: MatchSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
