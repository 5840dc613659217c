//! Core domain types for Mastermind
//!
//! Colors, codes, palettes and feedback. Everything here is pure and deterministic;
//! randomness and I/O live in `game` and `commands`.

mod code;
mod color;
mod difficulty;
mod feedback;
mod palette;

pub use code::{Code, GuessError};
pub use color::Color;
pub use difficulty::Difficulty;
pub use feedback::Feedback;
pub use palette::{Palette, PaletteError, is_valid_guess};
