//! Formatting utilities for terminal output

use crate::core::{Color, Feedback};
use colored::{ColoredString, Colorize};

/// Glyph for a pin in the right position
pub const EXACT_PIN: char = '●';
/// Glyph for a right color in the wrong position
pub const PARTIAL_PIN: char = '○';
/// Glyph for a position that earned nothing
pub const EMPTY_PIN: char = '·';

/// Format feedback as a row of `length` pins: exact first, then partial, then empty
#[must_use]
pub fn pins(feedback: Feedback, length: usize) -> String {
    let empty = length.saturating_sub(feedback.total());

    format!(
        "{}{}{}",
        EXACT_PIN.to_string().repeat(feedback.exact).green().bold(),
        PARTIAL_PIN.to_string().repeat(feedback.partial).yellow(),
        EMPTY_PIN.to_string().repeat(empty).bright_black()
    )
}

/// A color name painted in its own color where the terminal has one
#[must_use]
pub fn paint_color(color: Color) -> ColoredString {
    let name = color.name();
    match terminal_color(name) {
        Some(shade) => name.color(shade).bold(),
        None => name.normal(),
    }
}

/// Comma-separated, painted color names
#[must_use]
pub fn paint_colors(colors: &[Color]) -> String {
    colors
        .iter()
        .map(|&color| paint_color(color).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn terminal_color(name: &str) -> Option<colored::Color> {
    match name {
        "orange" => Some(colored::Color::TrueColor {
            r: 255,
            g: 165,
            b: 0,
        }),
        "brown" => Some(colored::Color::TrueColor {
            r: 150,
            g: 90,
            b: 40,
        }),
        "pink" => Some(colored::Color::TrueColor {
            r: 255,
            g: 140,
            b: 200,
        }),
        other => other.parse().ok(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
