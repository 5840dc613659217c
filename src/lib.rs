//! Mastermind
//!
//! A console Mastermind game: crack a hidden sequence of colors using exact and
//! partial pin feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Difficulty, Feedback};
//!
//! let palette = Difficulty::Easy.palette().unwrap();
//! let secret = palette.parse_guess("red blue green yellow", 4).unwrap();
//! let guess = palette.parse_guess("blue red green purple", 4).unwrap();
//!
//! let feedback = Feedback::calculate(secret.colors(), guess.colors());
//! assert_eq!(feedback, Feedback::new(1, 2));
//! ```

// Core domain types
pub mod core;

// Secret generation, rounds and statistics
pub mod game;

// Base color names
pub mod colors;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
