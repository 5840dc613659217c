//! Score command
//!
//! Scores an explicit guess against an explicit secret, outside of a game.

use crate::core::{Code, Difficulty, Feedback};
use anyhow::{Context, Result};

/// Result of scoring one guess
#[derive(Debug)]
pub struct ScoreResult {
    pub difficulty: Difficulty,
    pub secret: Code,
    pub guess: Code,
    pub feedback: Feedback,
}

/// Validate both codes against `difficulty` and score them
///
/// # Errors
///
/// Returns an error if either code names an unknown color, uses a color
/// outside the tier's palette, or has the wrong length.
///
/// # Examples
/// ```
/// use mastermind::commands::score_codes;
/// use mastermind::core::{Difficulty, Feedback};
///
/// let result = score_codes(Difficulty::Easy, "red red blue blue", "red blue red blue").unwrap();
/// assert_eq!(result.feedback, Feedback::new(2, 2));
/// ```
pub fn score_codes(difficulty: Difficulty, secret: &str, guess: &str) -> Result<ScoreResult> {
    let palette = difficulty.palette()?;
    let length = difficulty.code_length();

    let secret = palette
        .parse_guess(secret, length)
        .with_context(|| format!("Invalid secret '{secret}' for {difficulty}"))?;
    let guess = palette
        .parse_guess(guess, length)
        .with_context(|| format!("Invalid guess '{guess}' for {difficulty}"))?;

    let feedback = Feedback::calculate(secret.colors(), guess.colors());

    Ok(ScoreResult {
        difficulty,
        secret,
        guess,
        feedback,
    })
}
