//! Mastermind feedback scoring
//!
//! Feedback is a pair of pin counts:
//! - exact: right color in the right position
//! - partial: right color in the wrong position
//!
//! Duplicates are handled by frequency: a color earns at most as many pins as
//! the smaller of its counts in the secret and in the guess.

use super::Color;
use rustc_hash::FxHashMap;

/// Pin counts for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Feedback {
    pub exact: usize,
    pub partial: usize,
}

impl Feedback {
    #[inline]
    #[must_use]
    pub const fn new(exact: usize, partial: usize) -> Self {
        Self { exact, partial }
    }

    /// Score `guess` against `secret`
    ///
    /// The caller must pass sequences of equal length.
    ///
    /// # Algorithm
    /// 1. Count positions where the colors agree (exact)
    /// 2. Sum, over each distinct color in the guess, the smaller of its
    ///    frequency in the secret and in the guess
    /// 3. partial = that sum minus exact
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Feedback};
    ///
    /// let secret = Code::parse("red blue green yellow").unwrap();
    /// let guess = Code::parse("blue red green purple").unwrap();
    ///
    /// let feedback = Feedback::calculate(secret.colors(), guess.colors());
    /// assert_eq!(feedback, Feedback::new(1, 2));
    /// ```
    #[must_use]
    pub fn calculate(secret: &[Color], guess: &[Color]) -> Self {
        debug_assert_eq!(secret.len(), guess.len(), "Secret and guess lengths differ");

        let exact = secret
            .iter()
            .zip(guess)
            .filter(|(s, g)| s == g)
            .count();

        let secret_counts = color_counts(secret);
        let guess_counts = color_counts(guess);

        let shared: usize = guess_counts
            .iter()
            .map(|(color, &in_guess)| {
                secret_counts
                    .get(color)
                    .map_or(0, |&in_secret| in_secret.min(in_guess))
            })
            .sum();

        Self {
            exact,
            partial: shared - exact,
        }
    }

    /// Total pins awarded
    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.exact + self.partial
    }

    /// Check if every position of a code of `length` matched
    #[inline]
    #[must_use]
    pub const fn is_solved(self, length: usize) -> bool {
        self.exact == length
    }
}

fn color_counts(colors: &[Color]) -> FxHashMap<Color, usize> {
    let mut counts = FxHashMap::default();
    for &color in colors {
        *counts.entry(color).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Code;

    fn score(secret: &str, guess: &str) -> Feedback {
        let secret = Code::parse(secret).unwrap();
        let guess = Code::parse(guess).unwrap();
        Feedback::calculate(secret.colors(), guess.colors())
    }

    #[test]
    fn swapped_pair_and_one_exact() {
        assert_eq!(
            score("red blue green yellow", "blue red green purple"),
            Feedback::new(1, 2)
        );
    }

    #[test]
    fn duplicates_in_both() {
        assert_eq!(
            score("red red blue blue", "red blue red blue"),
            Feedback::new(2, 2)
        );
    }

    #[test]
    fn identical_codes_are_all_exact() {
        let feedback = score("red red blue blue", "red red blue blue");
        assert_eq!(feedback, Feedback::new(4, 0));
        assert!(feedback.is_solved(4));
    }

    #[test]
    fn no_shared_colors() {
        assert_eq!(
            score("red red blue blue", "green yellow orange purple"),
            Feedback::new(0, 0)
        );
    }

    #[test]
    fn surplus_guess_duplicates_do_not_score() {
        // Only one red in the secret, so four reds earn one pin
        assert_eq!(score("red blue green yellow", "red red red red"), Feedback::new(1, 0));
        assert_eq!(score("blue red green yellow", "red red red red"), Feedback::new(1, 0));
        assert_eq!(score("blue green yellow red", "red orange orange orange"), Feedback::new(0, 1));
    }

    #[test]
    fn exact_pins_are_not_double_counted() {
        // Second red is exact; the first guess red has no spare red left
        assert_eq!(score("blue red green yellow", "red red purple purple"), Feedback::new(1, 0));
    }

    #[test]
    fn all_partial() {
        assert_eq!(
            score("red blue green yellow", "yellow green blue red"),
            Feedback::new(0, 4)
        );
    }

    #[test]
    fn scoring_is_symmetric() {
        let codes = [
            "red red blue blue",
            "red blue red blue",
            "red blue green yellow",
            "yellow yellow yellow red",
            "green purple orange red",
        ];

        for secret in codes {
            for guess in codes {
                assert_eq!(score(secret, guess), score(guess, secret), "{secret} / {guess}");
            }
        }
    }

    #[test]
    fn pins_never_exceed_length() {
        let palette: Vec<Color> = Color::all().take(3).collect();

        // Every pair of length-3 codes over a 3-color palette
        let codes: Vec<Vec<Color>> = (0..27)
            .map(|n: usize| vec![palette[n % 3], palette[(n / 3) % 3], palette[n / 9]])
            .collect();

        for secret in &codes {
            for guess in &codes {
                let feedback = Feedback::calculate(secret, guess);
                assert!(feedback.exact <= 3);
                assert!(feedback.total() <= 3);
            }
        }
    }

    #[test]
    fn empty_codes_score_zero() {
        assert_eq!(Feedback::calculate(&[], &[]), Feedback::default());
    }
}
