//! Feedback distribution command
//!
//! Samples random guesses against random secrets for a tier and tallies the
//! feedback they receive.

use crate::core::{Difficulty, Feedback};
use crate::game::generate_secret;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Tally of feedback over many random pairs
#[derive(Debug)]
pub struct DistributionResult {
    pub difficulty: Difficulty,
    pub samples: usize,
    /// Sorted best feedback first
    pub counts: Vec<(Feedback, usize)>,
    pub duration: Duration,
}

impl DistributionResult {
    /// Pairs where the random guess was the secret
    #[must_use]
    pub fn solved(&self) -> usize {
        let length = self.difficulty.code_length();
        self.counts
            .iter()
            .filter(|(feedback, _)| feedback.is_solved(length))
            .map(|&(_, count)| count)
            .sum()
    }

    /// Mean number of pins (exact + partial) per guess
    #[must_use]
    pub fn average_pins(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        let pins: usize = self
            .counts
            .iter()
            .map(|(feedback, count)| feedback.total() * count)
            .sum();
        pins as f64 / self.samples as f64
    }
}

/// Score `samples` random guesses against random secrets in parallel
///
/// # Errors
///
/// Returns an error if the tier's palette cannot be built or the progress
/// bar template is invalid.
pub fn run_distribution(difficulty: Difficulty, samples: usize) -> Result<DistributionResult> {
    let palette = difficulty.palette()?;
    let length = difficulty.code_length();

    let pb = ProgressBar::new(samples as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let tally = (0..samples)
        .into_par_iter()
        .map_init(rand::rng, |rng, _| {
            let secret = generate_secret(length, &palette, rng);
            let guess = generate_secret(length, &palette, rng);
            pb.inc(1);
            Feedback::calculate(secret.colors(), guess.colors())
        })
        .fold(FxHashMap::default, |mut tally, feedback| {
            *tally.entry(feedback).or_insert(0) += 1;
            tally
        })
        .reduce(FxHashMap::default, |mut merged, part| {
            for (feedback, count) in part {
                *merged.entry(feedback).or_insert(0) += count;
            }
            merged
        });

    pb.finish_and_clear();
    let duration = start.elapsed();

    let mut counts: Vec<(Feedback, usize)> = tally.into_iter().collect();
    counts.sort_by(|a, b| b.0.cmp(&a.0));
    debug!(
        "Sampled {samples} pairs for {difficulty}: {} distinct feedbacks",
        counts.len()
    );

    Ok(DistributionResult {
        difficulty,
        samples,
        counts,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_sum_to_samples() {
        let result = run_distribution(Difficulty::Easy, 2_000).unwrap();
        let total: usize = result.counts.iter().map(|(_, count)| count).sum();
        assert_eq!(total, 2_000);
        assert_eq!(result.samples, 2_000);
    }

    #[test]
    fn feedback_stays_within_bounds() {
        for difficulty in Difficulty::ALL {
            let length = difficulty.code_length();
            let result = run_distribution(difficulty, 500).unwrap();
            for (feedback, _) in &result.counts {
                assert!(feedback.total() <= length, "{feedback:?}");
            }
            assert!(result.average_pins() <= length as f64);
        }
    }

    #[test]
    fn counts_are_sorted_best_first() {
        let result = run_distribution(Difficulty::Medium, 1_000).unwrap();
        for pair in result.counts.windows(2) {
            assert!(pair[0].0 > pair[1].0);
        }
    }

    #[test]
    fn result_is_debuggable() {
        let result = run_distribution(Difficulty::Easy, 10).unwrap();
        assert!(format!("{result:?}").contains("DistributionResult"));
    }

    #[test]
    fn zero_samples() {
        let result = run_distribution(Difficulty::Hard, 0).unwrap();
        assert!(result.counts.is_empty());
        assert_eq!(result.solved(), 0);
        assert!(result.average_pins().abs() < f64::EPSILON);
    }

    #[test]
    fn solved_counts_only_perfect_feedback() {
        let result = DistributionResult {
            difficulty: Difficulty::Easy,
            samples: 10,
            counts: vec![(Feedback::new(4, 0), 2), (Feedback::new(2, 2), 3), (Feedback::new(0, 0), 5)],
            duration: Duration::ZERO,
        };
        assert_eq!(result.solved(), 2);
        assert!((result.average_pins() - 2.0).abs() < 1e-9);
    }
}
