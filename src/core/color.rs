//! Color token
//!
//! A color is an index into the embedded base list. Two colors are equal iff
//! they are the same entry; names exist only for parsing and display.

use crate::colors::{COLOR_NAMES, COLOR_NAMES_COUNT};
use std::fmt;

/// A single peg color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(u8);

impl Color {
    /// Create a color from its position in the base list
    ///
    /// # Panics
    /// Panics in debug mode if `index` is past the end of the base list
    #[inline]
    #[must_use]
    pub const fn new(index: u8) -> Self {
        debug_assert!((index as usize) < COLOR_NAMES_COUNT, "Color index out of range");
        Self(index)
    }

    /// Position in the base list
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Lowercase display name
    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        COLOR_NAMES[self.index()]
    }

    /// Look a color up by name, ignoring case
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Color;
    ///
    /// assert_eq!(Color::from_name("Red"), Some(Color::new(0)));
    /// assert_eq!(Color::from_name("chartreuse"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        COLOR_NAMES
            .iter()
            .position(|&known| known == name)
            .map(|index| Self(index as u8))
    }

    /// Every color in the base list, in order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..COLOR_NAMES_COUNT).map(|index| Self(index as u8))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
