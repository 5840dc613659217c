//! Session statistics

use std::fmt;

/// Games played and won since the process started
///
/// A plain value: each finished round produces the next one via `record`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
}

impl Statistics {
    /// Statistics after one more finished round
    #[must_use]
    pub fn record(self, won: bool) -> Self {
        Self {
            games_played: self.games_played + 1,
            games_won: self.games_won + usize::from(won),
        }
    }

    #[must_use]
    pub const fn games_lost(self) -> usize {
        self.games_played.saturating_sub(self.games_won)
    }

    /// Fraction of games won, 0.0 before the first game
    #[must_use]
    pub fn win_rate(self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "games played: {}, games won: {}",
            self.games_played, self.games_won
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let stats = Statistics::default();
        assert_eq!(stats.games_played, 0);
        assert_eq!(stats.games_won, 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn record_threads_counts() {
        let stats = Statistics::default().record(true).record(false).record(true);
        assert_eq!(stats, Statistics { games_played: 3, games_won: 2 });
        assert_eq!(stats.games_lost(), 1);
        assert!((stats.win_rate() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn record_leaves_original_untouched() {
        let before = Statistics::default();
        let after = before.record(true);
        assert_eq!(before.games_played, 0);
        assert_eq!(after.games_played, 1);
    }

    #[test]
    fn games_lost_never_underflows() {
        let stats = Statistics { games_played: 0, games_won: 1 };
        assert_eq!(stats.games_lost(), 0);
    }

    #[test]
    fn display() {
        let stats = Statistics { games_played: 4, games_won: 1 };
        assert_eq!(stats.to_string(), "games played: 4, games won: 1");
    }
}
