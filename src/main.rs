//! Mastermind - CLI
//!
//! Console Mastermind with helper commands for scoring codes and sampling
//! feedback distributions.

use anyhow::Result;
use clap::{Parser, Subcommand, builder::TypedValueParser};
use log::debug;
use mastermind::{
    commands::{PlayConfig, run_distribution, run_play, score_codes},
    core::Difficulty,
    game::DEFAULT_MAX_ATTEMPTS,
    output::{print_distribution_result, print_score_result},
};
use rand::{SeedableRng, rngs::StdRng};
use std::io;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Crack the hidden color code: exact and partial pins guide every guess",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: 1/easy (4 of 6 colors), 2/medium (6 of 8), 3/hard (8 of 10).
    /// Skips the difficulty menu when playing
    #[arg(short, long, global = true)]
    difficulty: Option<Difficulty>,

    /// Attempts per round
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..).map(|n| n as usize)
    )]
    max_attempts: usize,

    /// Seed for reproducible secrets
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive console game (default)
    Play,

    /// Score a guess against a secret
    Score {
        /// Secret code, e.g. "red blue green yellow"
        secret: String,

        /// Guess to score against the secret
        guess: String,
    },

    /// Tally the feedback random guesses receive against random secrets
    Distribution {
        /// Number of random secret/guess pairs
        #[arg(short = 'n', long, default_value = "100000")]
        samples: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.difficulty, cli.max_attempts, cli.seed),
        Commands::Score { secret, guess } => {
            run_score_command(cli.difficulty.unwrap_or_default(), &secret, &guess)
        }
        Commands::Distribution { samples } => {
            run_distribution_command(cli.difficulty.unwrap_or_default(), samples)
        }
    }
}

fn run_play_command(
    difficulty: Option<Difficulty>,
    max_attempts: usize,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => {
            debug!("Seeding RNG with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let config = PlayConfig {
        max_attempts,
        difficulty,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_play(&mut stdin.lock(), &mut stdout.lock(), &mut rng, &config)?;
    Ok(())
}

fn run_score_command(difficulty: Difficulty, secret: &str, guess: &str) -> Result<()> {
    let result = score_codes(difficulty, secret, guess)?;
    print_score_result(&mut io::stdout().lock(), &result)?;
    Ok(())
}

fn run_distribution_command(difficulty: Difficulty, samples: usize) -> Result<()> {
    println!("Sampling {samples} random guesses at {difficulty} difficulty...");
    let result = run_distribution(difficulty, samples)?;
    print_distribution_result(&mut io::stdout().lock(), &result)?;
    Ok(())
}
