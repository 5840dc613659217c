//! Command implementations

pub mod distribution;
pub mod play;
pub mod score;

pub use distribution::{DistributionResult, run_distribution};
pub use play::{PLAY_AGAIN, PlayConfig, run_play, select_difficulty};
pub use score::{ScoreResult, score_codes};
