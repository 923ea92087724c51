//! Contains all kinds of lexical errors that can occur while tokenizing the source code.

use std::fmt::Display;

use derive_more::From;
use enum_as_inner::EnumAsInner;
use mathlang_base::{
    log::{Message, Severity, SourceCodeDisplay},
    source_file::{ByteIndex, Span},
};

/// The source code opens a string with `"` but never closes it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnterminatedString {
    /// The span from the opening `"` to the end of the source code.
    pub span: Span,
}

impl Display for UnterminatedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, "found an unterminated string"),
            SourceCodeDisplay::new(&self.span, Some("this string is never closed by a `\"`"))
        )
    }
}

/// A lexeme of a single character is neither a symbol, a letter, nor a digit.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnknownCharacter {
    /// The span of the offending character.
    pub span: Span,

    /// The offending character.
    pub character: char,
}

impl Display for UnknownCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Error,
                format!("found an unknown character `{}`", self.character)
            ),
            SourceCodeDisplay::new(
                &self.span,
                Some("expected `;`, `=`, `+`, `-`, a letter or a digit")
            )
        )
    }
}

/// The tokenizer tried to read past the end of the source code.
///
/// This is a bug in the tokenizer, not a problem with the source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScanError {
    /// The byte index the tokenizer tried to read at.
    pub cursor: ByteIndex,
}

impl Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Message::new(
                Severity::Error,
                format!(
                    "the tokenizer read past the end of the source code at byte {}",
                    self.cursor
                )
            )
        )
    }
}

/// Is an enumeration containing all kinds of lexical errors that can occur while tokenizing the
/// source code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error("{0}")]
    UnterminatedString(UnterminatedString),

    #[error("{0}")]
    UnknownCharacter(UnknownCharacter),

    #[error("{0}")]
    ScanError(ScanError),
}

impl Error {
    /// Gets the byte index in the source code where the error starts.
    #[must_use]
    pub fn offset(&self) -> ByteIndex {
        match self {
            Self::UnterminatedString(error) => error.span.start(),
            Self::UnknownCharacter(error) => error.span.start(),
            Self::ScanError(error) => error.cursor,
        }
    }
}
