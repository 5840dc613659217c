//! Palettes and guess validation

use super::{Code, Color, GuessError};
use crate::colors::COLOR_NAMES_COUNT;
use std::fmt;

/// The colors available in a round
///
/// Always non-empty and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

/// Error type for palettes that cannot be built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    Empty,
    Duplicate(Color),
    /// More colors requested than the base list names
    TooManyColors { requested: usize, available: usize },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Palette must contain at least one color"),
            Self::Duplicate(color) => write!(f, "Palette lists '{color}' more than once"),
            Self::TooManyColors {
                requested,
                available,
            } => write!(
                f,
                "Palette needs {requested} colors but only {available} are defined"
            ),
        }
    }
}

impl std::error::Error for PaletteError {}

impl Palette {
    /// Build a palette from an explicit list of colors
    ///
    /// # Errors
    /// Returns `PaletteError` if the list is empty or repeats a color.
    pub fn new(colors: Vec<Color>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }

        for (i, color) in colors.iter().enumerate() {
            if colors[..i].contains(color) {
                return Err(PaletteError::Duplicate(*color));
            }
        }

        Ok(Self { colors })
    }

    /// The first `count` colors of the base list
    ///
    /// Never truncates: asking for more colors than exist is an error.
    ///
    /// # Errors
    /// Returns `PaletteError` if `count` is zero or exceeds the base list.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Palette;
    ///
    /// let palette = Palette::base(6).unwrap();
    /// assert_eq!(palette.to_string(), "red, blue, green, yellow, orange, purple");
    ///
    /// assert!(Palette::base(99).is_err());
    /// ```
    pub fn base(count: usize) -> Result<Self, PaletteError> {
        if count > COLOR_NAMES_COUNT {
            return Err(PaletteError::TooManyColors {
                requested: count,
                available: COLOR_NAMES_COUNT,
            });
        }
        Self::new(Color::all().take(count).collect())
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    /// Check that `guess` has exactly `length` colors, all from this palette
    ///
    /// Duplicate colors are allowed. Palette membership is checked before
    /// length, so an out-of-palette color is reported whatever the length.
    ///
    /// # Errors
    /// Returns `GuessError::OutsidePalette` or `GuessError::WrongLength`.
    pub fn validate(&self, guess: &[Color], length: usize) -> Result<(), GuessError> {
        if let Some(&stray) = guess.iter().find(|&&color| !self.contains(color)) {
            return Err(GuessError::OutsidePalette(stray));
        }

        if guess.len() != length {
            return Err(GuessError::WrongLength {
                expected: length,
                got: guess.len(),
            });
        }

        Ok(())
    }

    /// Parse a line of color names and validate it in one step
    ///
    /// # Errors
    /// Returns the first `GuessError` found.
    pub fn parse_guess(&self, line: &str, length: usize) -> Result<Code, GuessError> {
        let code = Code::parse(line)?;
        self.validate(code.colors(), length)?;
        Ok(code)
    }
}

/// True iff `guess` has length `length` and only uses colors from `palette`
#[must_use]
pub fn is_valid_guess(guess: &[Color], palette: &Palette, length: usize) -> bool {
    palette.validate(guess, length).is_ok()
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.colors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}
