//! Interactive console game
//!
//! Reads player input line by line and writes the transcript to any writer.

use crate::core::Difficulty;
use crate::game::{DEFAULT_MAX_ATTEMPTS, Round, Statistics, generate_secret};
use crate::output::{
    print_farewell, print_loss, print_round_intro, print_statistics, print_turn_outcome,
    print_welcome,
};
use anyhow::{Result, bail};
use log::info;
use rand::Rng;
use std::io::{BufRead, Write};

/// The only answer that starts another round
pub const PLAY_AGAIN: &str = "yes";

/// Settings for a console session
#[derive(Debug, Clone)]
pub struct PlayConfig {
    pub max_attempts: usize,
    /// Skip the difficulty menu when set
    pub difficulty: Option<Difficulty>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            difficulty: None,
        }
    }
}

/// Run a full session: pick a difficulty, then play rounds until the player stops
///
/// Returns the final statistics.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if input
/// ends while a prompt is waiting.
pub fn run_play<R, W, G>(
    input: &mut R,
    out: &mut W,
    rng: &mut G,
    config: &PlayConfig,
) -> Result<Statistics>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    print_welcome(out)?;

    let difficulty = match config.difficulty {
        Some(difficulty) => difficulty,
        None => select_difficulty(input, out)?,
    };
    let palette = difficulty.palette()?;
    let length = difficulty.code_length();
    info!(
        "Starting session: {difficulty}, {length} positions, {} colors, {} attempts",
        palette.len(),
        config.max_attempts
    );

    let mut stats = Statistics::default();

    loop {
        let secret = generate_secret(length, &palette, rng);
        let round = play_round(
            input,
            out,
            Round::new(secret, palette.clone(), config.max_attempts),
        )?;

        stats = stats.record(round.is_won());
        info!("Round over: {:?} ({stats})", round.status());
        print_statistics(out, stats)?;

        let answer = prompt(input, out, "Play again? (yes/no)")?;
        if answer.to_lowercase() != PLAY_AGAIN {
            break;
        }
        writeln!(out)?;
    }

    print_farewell(out)?;
    Ok(stats)
}

/// Ask for a difficulty until the player enters 1, 2 or 3
///
/// # Errors
///
/// Returns an error on I/O failure or end of input.
pub fn select_difficulty<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Difficulty> {
    loop {
        let choice = prompt(
            input,
            out,
            "Choose a difficulty level (1-Easy, 2-Medium, 3-Hard)",
        )?;

        if let Some(difficulty) = Difficulty::from_choice(&choice) {
            return Ok(difficulty);
        }
        writeln!(out, "Invalid choice. Please choose 1, 2 or 3.")?;
    }
}

/// Play one round to completion and hand it back for inspection
fn play_round<R: BufRead, W: Write>(input: &mut R, out: &mut W, mut round: Round) -> Result<Round> {
    print_round_intro(out, round.code_length(), round.palette())?;

    while !round.is_over() {
        let label = format!(
            "Attempt {}/{}. Enter your guess",
            round.turn(),
            round.max_attempts()
        );
        let line = prompt(input, out, &label)?;

        if let Some(outcome) = round.submit(&line) {
            print_turn_outcome(out, &outcome, round.code_length())?;
        }
    }

    if !round.is_won() {
        print_loss(out, round.secret())?;
    }

    Ok(round)
}

/// Get user input with a prompt
///
/// Invalid UTF-8 is replaced with U+FFFD rather than reported as an I/O error.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<String> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        bail!("Input closed while waiting for: {label}");
    }

    Ok(String::from_utf8_lossy(&line).trim().to_string())
}
