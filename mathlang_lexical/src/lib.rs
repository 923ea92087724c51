//! This crate implements the lexical analysis phase of MathLang. This phase is responsible for
//! turning the source text into the tokens the parser consumes.
//!
//! The [`tokenizer::Tokenizer`] pulls one [`token::Token`] at a time; a
//! [`token_stream::TokenStream`] holds all tokens of a source file at once.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod classifier;
pub mod error;
pub mod token;
pub mod token_stream;
pub mod tokenizer;
