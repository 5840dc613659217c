//! Terminal output formatting
//!
//! Display utilities for the console game and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_distribution_result, print_farewell, print_loss, print_round_intro, print_score_result,
    print_statistics, print_turn_outcome, print_welcome,
};
