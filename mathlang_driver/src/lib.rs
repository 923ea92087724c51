//! Command-line driver: loads a MathLang source file and prints its tokens.

use std::{fmt::Display, fs::File, path::PathBuf, process::ExitCode};

pub use clap::Parser;
use mathlang_base::{
    diagnostic::Handler,
    log::{Message, Severity},
    source_file::SourceFile,
};
use mathlang_lexical::{classifier::Classifier, token_stream::TokenStream};

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "mathlang",
    about = "Tokenizes MathLang programs.",
    author = "66011245@kmitl.ac.th"
)]
pub struct Argument {
    /// The input file to tokenize.
    pub file: PathBuf,

    /// Treats the given word as reserved, in addition to `note`, `print` and `let`.
    #[clap(long = "reserved", value_name = "WORD")]
    pub reserved: Vec<String>,

    /// Prints only the number of tokens.
    #[clap(long = "count")]
    pub count: bool,
}

impl Argument {
    /// Builds the [`Classifier`] described by the arguments.
    #[must_use]
    pub fn classifier(&self) -> Classifier {
        self.reserved
            .iter()
            .fold(Classifier::new(), |classifier, word| {
                classifier.with_reserved_word(word.as_str())
            })
    }
}

/// A struct that implements [`Handler`] but prints all the message to the standard error stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
struct Printer;

impl<E: Display> Handler<E> for Printer {
    fn receive(&self, error: E) { eprintln!("{error}"); }
}

fn report(argument: &Argument, error: impl Display) -> ExitCode {
    let msg = Message::new(
        Severity::Error,
        format!("{}: {error}", argument.file.display()),
    );

    eprintln!("{msg}");
    ExitCode::FAILURE
}

/// Renders the tokens the way [`run`] prints them: one `<index>: <token>` line per token, or
/// just the token count if `--count` was given.
#[must_use]
pub fn render(argument: &Argument, token_stream: &TokenStream) -> String {
    if argument.count {
        return format!("{}\n", token_stream.len());
    }

    token_stream
        .iter()
        .enumerate()
        .map(|(index, token)| format!("{index}: {token}\n"))
        .collect()
}

/// Runs the program with the given arguments.
pub fn run(argument: Argument) -> ExitCode {
    let file = match File::open(&argument.file) {
        Ok(file) => file,
        Err(error) => return report(&argument, error),
    };

    let source_file = match SourceFile::load(file, argument.file.clone()) {
        Ok(source_file) => source_file,
        Err(error) => return report(&argument, error),
    };

    let Some(token_stream) =
        TokenStream::tokenize_with(&source_file, argument.classifier(), &Printer)
    else {
        return ExitCode::FAILURE;
    };

    print!("{}", render(&argument, &token_stream));

    ExitCode::SUCCESS
}
