//! Terminal driver.
//!
//! Renders a [`Match`] as the line-oriented text game: banner, name prompt,
//! one prompt per round, running score, and the closing messages. Works over
//! any `BufRead`/`Write` pair so sessions can be scripted in tests.

use std::io::{BufRead, Write};

use thiserror::Error;

use super::game::{Match, MatchSummary};
use crate::core::{ChoiceSource, Outcome, RoundError, Side};
use crate::rules::RuleSet;

pub const BANNER_RULE: &str = "================================";
pub const WELCOME: &str = "Welcome to Rock, Paper, Scissors, Lizard, Spock!";
pub const INVALID_CHOICE: &str = "Invalid choice. Please choose from the available options.";

/// Failure of the terminal itself. Game-level problems never end up here.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Input ended before the match was decided.
    #[error("input closed before the match finished")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Line-oriented terminal front end.
pub struct Console<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Give back the underlying reader and writer.
    pub fn into_inner(self) -> (I, O) {
        (self.input, self.output)
    }

    /// Read one line without its line terminator.
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Print the banner and ask for the player's name.
    pub fn greet(&mut self) -> Result<String, ConsoleError> {
        writeln!(self.output, "{}", BANNER_RULE)?;
        writeln!(self.output, "{}", WELCOME)?;
        writeln!(self.output, "{}", BANNER_RULE)?;
        writeln!(self.output, "Enter your name:")?;
        self.output.flush()?;

        self.read_line()
    }

    /// Greet the player and play `game` to completion.
    pub fn play<R: RuleSet, S: ChoiceSource>(
        &mut self,
        game: &mut Match<R, S>,
    ) -> Result<MatchSummary, ConsoleError> {
        let name = self.greet()?;
        self.run(&name, game)
    }

    /// Play `game` to completion for an already-named player.
    pub fn run<R: RuleSet, S: ChoiceSource>(
        &mut self,
        name: &str,
        game: &mut Match<R, S>,
    ) -> Result<MatchSummary, ConsoleError> {
        let menu = game
            .rules()
            .choices()
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        while !game.is_finished() {
            writeln!(self.output, "\n{}, choose your weapon: ({})", name, menu)?;
            self.output.flush()?;
            let input = self.read_line()?;

            let round = match game.play_round(&input) {
                Ok(round) => round,
                Err(RoundError::InvalidChoice { .. } | RoundError::UnknownChoice(_)) => {
                    writeln!(self.output, "{}", INVALID_CHOICE)?;
                    continue;
                }
                Err(RoundError::MatchFinished) => break,
            };

            writeln!(self.output, "Computer chose: {}", round.computer_choice)?;
            match round.outcome {
                Outcome::PlayerWins => writeln!(self.output, "{} wins this round!", name)?,
                Outcome::ComputerWins => writeln!(self.output, "Computer wins this round!")?,
                Outcome::Draw => writeln!(self.output, "It's a draw!")?,
            }
            writeln!(
                self.output,
                "{}: {} - Computer: {}",
                name, round.player_score, round.computer_score
            )?;
        }

        match game.winner() {
            Some(Side::Player) => {
                writeln!(self.output, "\nCongratulations, {}! You win the game!", name)?
            }
            _ => writeln!(self.output, "\nComputer wins the game. Better luck next time!")?,
        }
        writeln!(self.output, "\nThanks for playing!")?;
        self.output.flush()?;

        Ok(game.summary())
    }
}
