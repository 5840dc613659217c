//! Display functions for the game transcript and command results
//!
//! Everything writes to a caller-supplied writer so the console session can be
//! driven from tests.

use super::formatters::{create_progress_bar, paint_colors, pins};
use crate::commands::{DistributionResult, ScoreResult};
use crate::core::{Code, Palette};
use crate::game::{Statistics, TurnOutcome};
use colored::Colorize;
use std::io::{self, Write};

/// Print the session banner
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_welcome<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {}", "Welcome to Mastermind.".bright_cyan().bold())?;
    writeln!(out, "{}\n", "═".repeat(60).cyan())
}

/// Explain the goal of a round
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_round_intro<W: Write>(out: &mut W, length: usize, palette: &Palette) -> io::Result<()> {
    writeln!(out, "Guess the secret code of {length} colors.")?;
    writeln!(out, "Available colors: {}.", paint_colors(palette.colors()))
}

/// Print the result of one attempt
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_turn_outcome<W: Write>(
    out: &mut W,
    outcome: &TurnOutcome,
    length: usize,
) -> io::Result<()> {
    match outcome {
        TurnOutcome::Scored(feedback) => writeln!(
            out,
            "Exact: {}, Partial: {}  {}",
            feedback.exact,
            feedback.partial,
            pins(*feedback, length)
        ),
        TurnOutcome::Solved(feedback) => {
            writeln!(
                out,
                "Exact: {}, Partial: {}  {}",
                feedback.exact,
                feedback.partial,
                pins(*feedback, length)
            )?;
            writeln!(
                out,
                "{}",
                "Congratulations! You cracked the secret code."
                    .bright_green()
                    .bold()
            )
        }
        TurnOutcome::Rejected(err) => writeln!(
            out,
            "{} ({err}). Enter {length} colors from the available list.",
            "Invalid guess".red()
        ),
    }
}

/// Reveal the secret after a lost round
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_loss<W: Write>(out: &mut W, secret: &Code) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "You have reached the maximum number of attempts.".red()
    )?;
    writeln!(out, "The secret code was: {}.", paint_colors(secret.colors()))
}

/// Print the running totals after a round
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_statistics<W: Write>(out: &mut W, stats: Statistics) -> io::Result<()> {
    writeln!(out, "{} {stats}", "Statistics:".bright_cyan().bold())
}

/// Print the closing line of a session
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nThanks for playing!")
}

/// Print the feedback for an explicit secret/guess pair
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_score_result<W: Write>(out: &mut W, result: &ScoreResult) -> io::Result<()> {
    let length = result.secret.len();

    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Difficulty: {}",
        result.difficulty.label().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(out, "Secret:  {}", paint_colors(result.secret.colors()))?;
    writeln!(out, "Guess:   {}", paint_colors(result.guess.colors()))?;
    writeln!(
        out,
        "Exact: {}, Partial: {}  {}",
        result.feedback.exact,
        result.feedback.partial,
        pins(result.feedback, length)
    )?;

    if result.feedback.is_solved(length) {
        writeln!(out, "{}", "✅ Code cracked!".green().bold())?;
    }
    Ok(())
}

/// Print a feedback distribution as bars
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_distribution_result<W: Write>(
    out: &mut W,
    result: &DistributionResult,
) -> io::Result<()> {
    let length = result.difficulty.code_length();

    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        " {} {} ",
        "FEEDBACK DISTRIBUTION:".bright_cyan().bold(),
        result.difficulty.label().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    writeln!(
        out,
        "\n📊 {} random guesses against random secrets ({} colors, {} positions)",
        result.samples,
        result.difficulty.color_count(),
        length
    )?;
    writeln!(out, "   Average pins:     {:.3}", result.average_pins())?;
    writeln!(out, "   Solved by chance: {}", result.solved())?;
    writeln!(out, "   Time taken:       {:.2}s", result.duration.as_secs_f64())?;

    writeln!(out, "\n📈 {}", "Distribution:".bright_cyan().bold())?;
    for &(feedback, count) in &result.counts {
        let pct = if result.samples == 0 {
            0.0
        } else {
            (count as f64 / result.samples as f64) * 100.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        writeln!(
            out,
            "   {} ({}, {}): {} {count:8} ({pct:5.1}%)",
            pins(feedback, length),
            feedback.exact,
            feedback.partial,
            bar.green()
        )?;
    }
    Ok(())
}
