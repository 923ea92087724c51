//! Contains the [`Tokenizer`], pulling [`Token`]s out of a source file one at a time.

use std::sync::Arc;

use getset::{CopyGetters, Getters};
use mathlang_base::source_file::{ByteIndex, SourceFile, Span};

use crate::{
    classifier::Classifier,
    error::{Error, ScanError, UnknownCharacter, UnterminatedString},
    token::{StringLiteral, Token},
};

/// Scans a source file into [`Token`]s on demand.
///
/// The cursor only ever moves forward; a character is never examined again once it has been
/// consumed.
///
/// Besides [`Tokenizer::next_token`], the tokenizer is an [`Iterator`] over
/// `Result<Token, Error>`. The iterator ends at the end of the source code and also right after
/// the first error, since a lexical error invalidates the rest of the input.
#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct Tokenizer {
    /// Gets the source file being tokenized.
    #[get = "pub"]
    source_file: Arc<SourceFile>,

    /// Gets the classifier used for bare lexemes.
    #[get = "pub"]
    classifier: Classifier,

    /// Gets the byte index of the next character to be scanned.
    #[get_copy = "pub"]
    cursor: ByteIndex,

    halted: bool,
}

impl Tokenizer {
    /// Creates a tokenizer positioned at the start of the source file.
    #[must_use]
    pub fn new(source_file: Arc<SourceFile>) -> Self {
        Self {
            source_file,
            classifier: Classifier::default(),
            cursor: 0,
            halted: false,
        }
    }

    /// Creates a tokenizer over text held in memory.
    #[must_use]
    pub fn from_source(source: impl Into<String>) -> Self {
        Self::new(SourceFile::from_string("<input>", source))
    }

    /// Replaces the classifier used for bare lexemes.
    #[must_use]
    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    fn remaining(&self) -> usize { self.source_file.content().len() - self.cursor }

    fn peek(&self) -> Result<char, Error> {
        self.source_file.content()[self.cursor..]
            .chars()
            .next()
            .ok_or_else(|| {
                ScanError {
                    cursor: self.cursor,
                }
                .into()
            })
    }

    fn read(&mut self) -> Result<char, Error> {
        let character = self.peek()?;
        self.cursor += character.len_utf8();
        Ok(character)
    }

    fn span(&self, start: ByteIndex, end: ByteIndex) -> Result<Span, Error> {
        Span::new(self.source_file.clone(), start, end)
            .ok_or_else(|| ScanError { cursor: start }.into())
    }

    fn skip_whitespace(&mut self) -> Result<(), Error> {
        while self.remaining() > 0 && self.peek()?.is_whitespace() {
            self.read()?;
        }

        Ok(())
    }

    /// Reads a `"`-delimited string; the quotes are not part of the content.
    fn read_quoted(&mut self) -> Result<Token, Error> {
        let start = self.cursor;

        if self.read()? != '"' {
            return Err(ScanError { cursor: start }.into());
        }

        let content_start = self.cursor;

        loop {
            if self.remaining() == 0 {
                return Err(UnterminatedString {
                    span: self.span(start, self.cursor)?,
                }
                .into());
            }

            if self.read()? == '"' {
                break;
            }
        }

        // the closing quote is one byte wide
        let content = &self.source_file.content()[content_start..self.cursor - 1];
        Ok(StringLiteral::new(content.to_owned()).into())
    }

    /// Reads a run of non-whitespace characters and returns its start index.
    fn read_lexeme(&mut self) -> Result<ByteIndex, Error> {
        let start = self.cursor;

        while self.remaining() > 0 && !self.peek()?.is_whitespace() {
            self.read()?;
        }

        Ok(start)
    }

    /// Scans the next token.
    ///
    /// Returns `Ok(None)` once only whitespace is left, and keeps returning it on every later
    /// call without moving the cursor.
    ///
    /// # Errors
    /// - [`Error::UnterminatedString`]: a `"` is not followed by a closing `"`.
    /// - [`Error::UnknownCharacter`]: a single-character lexeme is neither a symbol, a letter
    ///   nor a digit.
    /// - [`Error::ScanError`]: the tokenizer read past the end of the source code.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        self.skip_whitespace()?;

        if self.remaining() == 0 {
            return Ok(None);
        }

        if self.peek()? == '"' {
            return self.read_quoted().map(Some);
        }

        let start = self.read_lexeme()?;
        let lexeme = &self.source_file.content()[start..self.cursor];

        match self.classifier.classify(lexeme) {
            Some(token) => Ok(Some(token)),
            None => Err(UnknownCharacter {
                span: self.span(start, self.cursor)?,
                character: self.source_file.content()[start..].chars().next().ok_or(
                    ScanError { cursor: start },
                )?,
            }
            .into()),
        }
    }
}

impl Iterator for Tokenizer {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }

        let item = self.next_token().transpose();
        self.halted = matches!(item, None | Some(Err(_)));

        item
    }
}

#[cfg(test)]
mod tests;
