//! Contains the [`Classifier`], deciding which [`Token`] a bare lexeme stands for.

use std::collections::HashSet;

use strum::IntoEnumIterator;

use crate::token::{Name, Number, ReservedWord, StringLiteral, Symbol, SymbolKind, Token};

/// Turns bare (unquoted) lexemes into [`Token`]s.
///
/// A single-character lexeme is a symbol, a letter or a digit. A longer lexeme goes through an
/// ordered chain of checks, and the first one that matches wins:
///
/// 1. a reserved word becomes a [`Name`],
/// 2. a lexeme that parses as a 64-bit float becomes a [`Number`],
/// 3. anything else becomes a [`StringLiteral`].
///
/// The reserved words default to [`ReservedWord`] and can be extended with
/// [`Classifier::with_reserved_word`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    reserved_words: HashSet<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            reserved_words: ReservedWord::iter()
                .map(|word| word.as_str().to_owned())
                .collect(),
        }
    }
}

impl Classifier {
    /// Creates a [`Classifier`] that reserves the words of [`ReservedWord`].
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Adds a word that always classifies as a [`Name`].
    ///
    /// Only affects lexemes longer than one character; single characters are always classified
    /// by what kind of character they are.
    #[must_use]
    pub fn with_reserved_word(mut self, word: impl Into<String>) -> Self {
        self.reserved_words.insert(word.into());
        self
    }

    /// Checks whether the lexeme is a reserved word.
    #[must_use]
    pub fn is_reserved(&self, lexeme: &str) -> bool { self.reserved_words.contains(lexeme) }

    /// Classifies a bare lexeme.
    ///
    /// Returns [`None`] if the lexeme is empty, or is a single character that is neither a
    /// symbol, a letter nor a decimal digit.
    #[must_use]
    pub fn classify(&self, lexeme: &str) -> Option<Token> {
        let mut characters = lexeme.chars();

        match (characters.next(), characters.next()) {
            (None, _) => None,
            (Some(character), None) => Self::classify_character(character),
            (Some(_), Some(_)) => Some(self.classify_word(lexeme)),
        }
    }

    fn classify_character(character: char) -> Option<Token> {
        if let Ok(kind) = SymbolKind::try_from(character) {
            Some(Symbol::new(kind).into())
        } else if character.is_alphabetic() {
            Some(Name::new(character.to_string()).into())
        } else {
            character
                .to_digit(10)
                .map(|digit| Number::new(f64::from(digit)).into())
        }
    }

    fn classify_word(&self, lexeme: &str) -> Token {
        if self.is_reserved(lexeme) {
            return Name::new(lexeme.to_owned()).into();
        }

        if let Some(value) = parse_number(lexeme) {
            return Number::new(value).into();
        }

        StringLiteral::new(lexeme.to_owned()).into()
    }
}

/// Parses a decimal float literal such as `42`, `-3.5` or `1e3`.
///
/// `inf`, `NaN` and the like are accepted by [`str::parse`] but are words, not literals.
fn parse_number(lexeme: &str) -> Option<f64> {
    if lexeme
        .chars()
        .any(|character| character.is_alphabetic() && !matches!(character, 'e' | 'E'))
    {
        return None;
    }

    lexeme.parse().ok()
}
