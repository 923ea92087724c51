//! Contains the [`TokenStream`] struct, holding every token of a source file.

use std::{ops::Index, sync::Arc};

use derive_more::Deref;
use mathlang_base::{diagnostic::Handler, source_file::SourceFile};

use crate::{classifier::Classifier, error, token::Token, tokenizer::Tokenizer};

/// Is the list of all [`Token`]s of a source file, in source order.
///
/// This struct is the final output of the lexical analysis phase and is meant to be used by the
/// parser.
#[derive(Debug, Clone, PartialEq, PartialOrd, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Tokenizes the given source file with the default [`Classifier`].
    ///
    /// See [`TokenStream::tokenize_with`].
    #[must_use]
    pub fn tokenize(
        source_file: &Arc<SourceFile>,
        handler: &dyn Handler<error::Error>,
    ) -> Option<Self> {
        Self::tokenize_with(source_file, Classifier::default(), handler)
    }

    /// Tokenizes the given source file by pulling tokens from a [`Tokenizer`] until the end of
    /// the source code.
    ///
    /// Tokenization is all-or-nothing: the first lexical error is reported to the `handler` and
    /// [`None`] is returned.
    #[must_use]
    pub fn tokenize_with(
        source_file: &Arc<SourceFile>,
        classifier: Classifier,
        handler: &dyn Handler<error::Error>,
    ) -> Option<Self> {
        let mut tokens = Vec::new();

        for result in Tokenizer::new(source_file.clone()).with_classifier(classifier) {
            match result {
                Ok(token) => tokens.push(token),
                Err(error) => {
                    handler.receive(error);
                    return None;
                }
            }
        }

        Some(Self { tokens })
    }

    /// Dissolves this struct into the underlying list of tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> { self.tokens }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output { &self.tokens[index] }
}
