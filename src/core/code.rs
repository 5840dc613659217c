//! Color sequences: secrets and guesses
//!
//! A `Code` is an ordered sequence of colors. Parsing only checks that every
//! name is a known color; whether a code fits a round is `Palette::validate`'s job.

use super::Color;
use std::fmt;

/// An ordered sequence of colors
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code(Vec<Color>);

/// Why a guess cannot be scored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// A word in the input is not a color name at all
    UnknownColor(String),
    /// The color exists but is not part of this round's palette
    OutsidePalette(Color),
    WrongLength { expected: usize, got: usize },
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownColor(name) => write!(f, "'{name}' is not a color"),
            Self::OutsidePalette(color) => {
                write!(f, "'{color}' is not one of the available colors")
            }
            Self::WrongLength { expected, got } => {
                write!(f, "expected {expected} colors, got {got}")
            }
        }
    }
}

impl std::error::Error for GuessError {}

impl Code {
    /// Parse a line of whitespace-separated color names
    ///
    /// Names are case-insensitive. Blank input parses to an empty code.
    ///
    /// # Errors
    /// Returns `GuessError::UnknownColor` for the first word that names no color.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    ///
    /// let code = Code::parse("  Red blue\tRED ").unwrap();
    /// assert_eq!(code.to_string(), "red, blue, red");
    ///
    /// assert!(Code::parse("red magenta").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Self, GuessError> {
        line.split_whitespace()
            .map(|word| {
                Color::from_name(word).ok_or_else(|| GuessError::UnknownColor(word.to_lowercase()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Color>> for Code {
    fn from(colors: Vec<Color>) -> Self {
        Self(colors)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}
