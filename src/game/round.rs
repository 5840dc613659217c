//! A single round: one secret, a bounded number of attempts
//!
//! Every submission uses up an attempt, valid or not. The round ends on the
//! first solved guess or when the attempts run out.

use crate::core::{Code, Feedback, GuessError, Palette};
use log::{debug, trace};

/// Attempts per round unless configured otherwise
pub const DEFAULT_MAX_ATTEMPTS: usize = 12;

/// Result of submitting one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Valid guess, not the secret
    Scored(Feedback),
    /// Valid guess matching the secret; the round is won
    Solved(Feedback),
    /// Malformed guess; the attempt is still spent
    Rejected(GuessError),
}

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won { attempts: usize },
    Lost,
}

/// One round of play
#[derive(Debug, Clone)]
pub struct Round {
    secret: Code,
    palette: Palette,
    max_attempts: usize,
    attempts_used: usize,
    status: RoundStatus,
}

impl Round {
    /// Start a round around an already generated secret
    ///
    /// The secret's length is the required guess length. A `max_attempts`
    /// of zero yields a round that is lost before it starts.
    #[must_use]
    pub fn new(secret: Code, palette: Palette, max_attempts: usize) -> Self {
        let status = if max_attempts == 0 {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        };

        Self {
            secret,
            palette,
            max_attempts,
            attempts_used: 0,
            status,
        }
    }

    /// Spend an attempt on one line of player input
    ///
    /// Returns `None` once the round is over.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Feedback, Palette};
    /// use mastermind::game::{Round, RoundStatus, TurnOutcome};
    ///
    /// let secret = Code::parse("red blue green yellow").unwrap();
    /// let mut round = Round::new(secret, Palette::base(6).unwrap(), 3);
    ///
    /// assert!(matches!(round.submit("red"), Some(TurnOutcome::Rejected(_))));
    /// assert_eq!(round.submit("blue red green purple"), Some(TurnOutcome::Scored(Feedback::new(1, 2))));
    /// assert_eq!(round.submit("red blue green yellow"), Some(TurnOutcome::Solved(Feedback::new(4, 0))));
    /// assert_eq!(round.status(), RoundStatus::Won { attempts: 3 });
    /// assert_eq!(round.submit("red blue green yellow"), None);
    /// ```
    pub fn submit(&mut self, line: &str) -> Option<TurnOutcome> {
        if self.is_over() {
            return None;
        }

        self.attempts_used += 1;
        trace!("Attempt {}/{}: {line:?}", self.attempts_used, self.max_attempts);

        let outcome = match self.palette.parse_guess(line, self.secret.len()) {
            Ok(guess) => {
                let feedback = Feedback::calculate(self.secret.colors(), guess.colors());
                if feedback.is_solved(self.secret.len()) {
                    self.status = RoundStatus::Won {
                        attempts: self.attempts_used,
                    };
                    TurnOutcome::Solved(feedback)
                } else {
                    TurnOutcome::Scored(feedback)
                }
            }
            Err(err) => {
                debug!("Rejected guess on attempt {}: {err}", self.attempts_used);
                TurnOutcome::Rejected(err)
            }
        };

        if self.status == RoundStatus::InProgress && self.attempts_used >= self.max_attempts {
            self.status = RoundStatus::Lost;
        }

        if self.is_over() {
            debug!("Round finished: {:?}", self.status);
        }

        Some(outcome)
    }

    /// Number of the next attempt (1-based), or of the last one once the round is over
    #[must_use]
    pub fn turn(&self) -> usize {
        if self.is_over() {
            self.attempts_used
        } else {
            self.attempts_used + 1
        }
    }

    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        self.max_attempts.saturating_sub(self.attempts_used)
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != RoundStatus::InProgress
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        matches!(self.status, RoundStatus::Won { .. })
    }

    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Required guess length
    #[must_use]
    pub fn code_length(&self) -> usize {
        self.secret.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(secret: &str, max_attempts: usize) -> Round {
        Round::new(
            Code::parse(secret).unwrap(),
            Palette::base(6).unwrap(),
            max_attempts,
        )
    }

    #[test]
    fn invalid_guesses_consume_attempts() {
        let mut round = round("red blue green yellow", 3);

        assert!(matches!(round.submit("red blue"), Some(TurnOutcome::Rejected(_))));
        assert_eq!(round.attempts_used(), 1);
        assert_eq!(round.turn(), 2);

        assert!(matches!(
            round.submit("teal teal teal teal"),
            Some(TurnOutcome::Rejected(GuessError::UnknownColor(_)))
        ));
        assert!(matches!(
            round.submit("white white white white"),
            Some(TurnOutcome::Rejected(GuessError::OutsidePalette(_)))
        ));

        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.attempts_remaining(), 0);
        assert_eq!(round.submit("red blue green yellow"), None);
    }

    #[test]
    fn solved_guess_ends_round_early() {
        let mut round = round("red red blue blue", 12);

        assert_eq!(
            round.submit("red blue red blue"),
            Some(TurnOutcome::Scored(Feedback::new(2, 2)))
        );
        assert_eq!(
            round.submit("RED RED BLUE BLUE"),
            Some(TurnOutcome::Solved(Feedback::new(4, 0)))
        );

        assert!(round.is_won());
        assert_eq!(round.status(), RoundStatus::Won { attempts: 2 });
        assert_eq!(round.attempts_remaining(), 10);
        assert_eq!(round.turn(), 2);
    }

    #[test]
    fn solving_on_last_attempt_is_a_win() {
        let mut round = round("red blue green yellow", 2);

        round.submit("purple purple purple purple");
        assert_eq!(
            round.submit("red blue green yellow"),
            Some(TurnOutcome::Solved(Feedback::new(4, 0)))
        );
        assert_eq!(round.status(), RoundStatus::Won { attempts: 2 });
    }

    #[test]
    fn running_out_of_attempts_is_a_loss() {
        let mut round = round("red blue green yellow", 2);

        round.submit("blue red green purple");
        assert_eq!(round.status(), RoundStatus::InProgress);
        round.submit("blue red green purple");
        assert_eq!(round.status(), RoundStatus::Lost);
        assert!(!round.is_won());
    }

    #[test]
    fn secret_is_fixed_for_the_round() {
        let mut round = round("red blue green yellow", 5);
        let before = round.secret().clone();

        for line in ["red", "orange orange orange orange", "yellow green blue red"] {
            round.submit(line);
        }
        assert_eq!(round.secret(), &before);
    }

    #[test]
    fn zero_attempts_is_already_lost() {
        let mut round = round("red blue green yellow", 0);
        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.submit("red blue green yellow"), None);
    }
}
