//! Terminal entry point.
//!
//! Plays the default rules, then the custom rules, unless `--rules` says
//! otherwise. Set `RUST_LOG=debug` to trace rounds on stderr.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rpsls::games::custom::PLACEHOLDER_CHOICES;
use rpsls::{
    Choice, Console, CustomRules, DefaultRules, GameRng, Match, MatchConfig, OutcomeTable, RuleSet,
    DEFAULT_ROUNDS_TO_WIN,
};
use std::io::{BufRead, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Rules {
    Default,
    Custom,
    Both,
}

#[derive(Debug, Parser)]
#[command(version, about = "Rock, Paper, Scissors, Lizard, Spock in the terminal")]
struct Args {
    /// Round wins needed to take a match.
    #[arg(long, default_value_t = DEFAULT_ROUNDS_TO_WIN)]
    rounds_to_win: u32,

    /// Seed for the computer's choices. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Which rule sets to play, in order.
    #[arg(long, value_enum, default_value_t = Rules::Both)]
    rules: Rules,

    /// Alphabet for the custom rule set.
    #[arg(long, value_delimiter = ',', default_values_t = PLACEHOLDER_CHOICES.map(String::from))]
    custom_choices: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = MatchConfig::new().with_rounds_to_win(args.rounds_to_win);
    config.validate().context("invalid --rounds-to-win")?;

    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    log::debug!("session seed {}", rng.seed());

    let custom = CustomRules::new(
        args.custom_choices.iter().map(|s| Choice::new(s.trim())),
        OutcomeTable::new(),
    )
    .context("invalid --custom-choices")?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    if matches!(args.rules, Rules::Default | Rules::Both) {
        play(&mut console, DefaultRules::new(), rng.fork(), config)?;
    }
    if matches!(args.rules, Rules::Custom | Rules::Both) {
        if custom.table().is_empty() {
            log::warn!("custom rules define no outcomes; every round will be rejected");
        }
        play(&mut console, custom, rng.fork(), config)?;
    }

    Ok(())
}

fn play<R: RuleSet>(
    console: &mut Console<impl BufRead, impl Write>,
    rules: R,
    rng: GameRng,
    config: MatchConfig,
) -> anyhow::Result<()> {
    let name = rules.name().to_string();
    let mut game =
        Match::new(rules, rng, config).with_context(|| format!("cannot start {} match", name))?;
    let summary = console
        .play(&mut game)
        .with_context(|| format!("{} match aborted", name))?;
    log::info!(
        "{} match over: {}-{} after {} rounds",
        summary.rules,
        summary.player_score,
        summary.computer_score,
        summary.rounds_played
    );
    Ok(())
}
