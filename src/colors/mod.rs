//! Base color names
//!
//! Every palette is a prefix of this list, so its order is part of the game rules.

mod embedded;

pub use embedded::{COLOR_NAMES, COLOR_NAMES_COUNT};
