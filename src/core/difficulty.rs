//! Difficulty tiers

use super::{Palette, PaletteError};
use std::fmt;

/// One of the three fixed difficulty tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Parse a menu choice: exactly "1", "2" or "3"
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_choice("2"), Some(Difficulty::Medium));
    /// assert_eq!(Difficulty::from_choice("medium"), None);
    /// ```
    #[must_use]
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Self::Easy),
            "2" => Some(Self::Medium),
            "3" => Some(Self::Hard),
            _ => None,
        }
    }

    /// Menu key for this tier
    #[must_use]
    pub const fn choice(self) -> char {
        match self {
            Self::Easy => '1',
            Self::Medium => '2',
            Self::Hard => '3',
        }
    }

    /// Number of colors in the secret code
    #[must_use]
    pub const fn code_length(self) -> usize {
        match self {
            Self::Easy => 4,
            Self::Medium => 6,
            Self::Hard => 8,
        }
    }

    /// Number of colors to choose from
    #[must_use]
    pub const fn color_count(self) -> usize {
        match self {
            Self::Easy => 6,
            Self::Medium => 8,
            Self::Hard => 10,
        }
    }

    /// The palette for this tier: the first `color_count` base colors
    ///
    /// # Errors
    /// Returns `PaletteError::TooManyColors` if the base list is too short.
    pub fn palette(self) -> Result<Palette, PaletteError> {
        Palette::base(self.color_count())
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "easy" => Ok(Self::Easy),
            "2" | "medium" => Ok(Self::Medium),
            "3" | "hard" => Ok(Self::Hard),
            _ => Err(format!("Invalid difficulty '{s}' (use 1-3 or easy/medium/hard)")),
        }
    }
}
