//! ANSI escape sequences for colouring and styling console output.

use std::fmt::Display;

/// Represents a text style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Style {
    Bold,
    Underline,
}

impl Style {
    /// Applies the style to the given displayable object.
    pub fn with<T>(self, display: T) -> Painted<T> {
        Painted {
            code: match self {
                Self::Bold => "\x1B[1m",
                Self::Underline => "\x1B[4m",
            },
            display,
        }
    }
}

/// Represents a foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Cyan,
}

impl Color {
    /// Applies the color to the given displayable object.
    pub fn with<T>(self, display: T) -> Painted<T> {
        Painted {
            code: match self {
                Self::Red => "\x1B[31m",
                Self::Green => "\x1B[32m",
                Self::Yellow => "\x1B[33m",
                Self::Cyan => "\x1B[36m",
            },
            display,
        }
    }
}

/// A displayable object wrapped in an ANSI escape sequence, reset after the object is printed.
///
/// Created by [`Style::with`] and [`Color::with`]; painters nest, so
/// `Style::Bold.with(Color::Red.with("x"))` prints a bold red `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Painted<T> {
    code: &'static str,

    /// The wrapped displayable object.
    pub display: T,
}

impl<T: Display> Display for Painted<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}\x1B[0m", self.code, self.display)
    }
}
