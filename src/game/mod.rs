//! Game rules on top of the core types
//!
//! Secret generation, the bounded turn counter of a round, and the running
//! win/loss record of a session.

mod generator;
mod round;
mod stats;

pub use generator::generate_secret;
pub use round::{DEFAULT_MAX_ATTEMPTS, Round, RoundStatus, TurnOutcome};
pub use stats::Statistics;
