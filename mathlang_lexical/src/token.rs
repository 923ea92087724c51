//! Is a module containing the [`Token`] type and all of its related types.

use std::{collections::HashMap, fmt::Display, str::FromStr};

use derive_more::From;
use derive_new::new;
use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};
use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

/// Is an enumeration of the words that always lex as a [`Name`], whatever else they look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum ReservedWord {
    /// Starts a note statement.
    Note,

    /// Starts a print statement.
    Print,

    /// Starts a variable assignment.
    Let,
}

/// Is an error that is returned when a string cannot be parsed into a [`ReservedWord`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of reserved word.")]
pub struct ReservedWordParseError;

impl FromStr for ReservedWord {
    type Err = ReservedWordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref STRING_RESERVED_WORD_MAP: HashMap<&'static str, ReservedWord> =
                ReservedWord::iter().map(|word| (word.as_str(), word)).collect();
        }
        STRING_RESERVED_WORD_MAP
            .get(s)
            .copied()
            .ok_or(ReservedWordParseError)
    }
}

impl ReservedWord {
    /// Gets the string representation of the reserved word as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Print => "print",
            Self::Let => "let",
        }
    }
}

impl Display for ReservedWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

/// Is an enumeration of the single-character symbols of MathLang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum SymbolKind {
    /// `;`, ends a statement.
    Semicolon,

    /// `=`, assigns a value.
    Equals,

    /// `+`
    Plus,

    /// `-`
    Minus,
}

/// Is an error that is returned when a character is not one of the [`SymbolKind`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
#[error("`{0}` is not a symbol.")]
pub struct SymbolParseError(pub char);

impl TryFrom<char> for SymbolKind {
    type Error = SymbolParseError;

    fn try_from(character: char) -> Result<Self, Self::Error> {
        Self::iter()
            .find(|kind| kind.as_char() == character)
            .ok_or(SymbolParseError(character))
    }
}

impl SymbolKind {
    /// Gets the character the symbol is written as.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Semicolon => ';',
            Self::Equals => '=',
            Self::Plus => '+',
            Self::Minus => '-',
        }
    }
}

/// Is an enumeration containing all kinds of tokens in MathLang.
///
/// Tokens are plain values: they own their text and hold no reference to the tokenizer or the
/// source they were read from.
#[derive(Debug, Clone, PartialEq, PartialOrd, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Token {
    Name(Name),
    Symbol(Symbol),
    Number(Number),
    String(StringLiteral),
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name.identifier()),
            Self::Symbol(symbol) => write!(f, "{}", symbol.symbol()),
            Self::Number(number) => write!(f, "{}", number.value()),
            Self::String(string) => write!(f, "\"{}\"", string.text()),
        }
    }
}

/// Represents an identifier: a reserved word or a single letter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, new)]
pub struct Name {
    /// Gets the text of the identifier.
    #[get = "pub"]
    identifier: String,
}

impl Name {
    /// Gets the [`ReservedWord`] this name spells, if any.
    #[must_use]
    pub fn reserved_word(&self) -> Option<ReservedWord> { self.identifier.parse().ok() }
}

/// Represents one of the four [`SymbolKind`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, CopyGetters, new)]
pub struct Symbol {
    /// Gets the kind of the symbol.
    #[get_copy = "pub"]
    kind: SymbolKind,
}

impl Symbol {
    /// Gets the character of the symbol.
    #[must_use]
    pub fn symbol(&self) -> char { self.kind.as_char() }
}

/// Represents a numeric literal, already converted to its value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, CopyGetters, new)]
pub struct Number {
    /// Gets the value of the literal.
    #[get_copy = "pub"]
    value: f64,
}

/// Represents a string: the content of a quoted string, or an unquoted lexeme that is neither
/// a name nor a number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, new)]
pub struct StringLiteral {
    /// Gets the content of the string, without any surrounding quotes.
    #[get = "pub"]
    text: String,
}
