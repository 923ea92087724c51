use mathlang_test::input::Input;
use proptest::{
    prelude::Arbitrary,
    prop_assert, proptest,
    strategy::Strategy,
    test_runner::TestCaseError,
};

use super::Tokenizer;
use crate::{
    classifier::Classifier,
    error::{Error, ScanError},
    token::{self, Name, Number, ReservedWord, StringLiteral, Symbol, SymbolKind, Token},
};

fn tokenize_all(source: &str) -> Result<Vec<Token>, Error> {
    Tokenizer::from_source(source).collect()
}

fn name(identifier: &str) -> Token { Name::new(identifier.to_owned()).into() }

fn symbol(kind: SymbolKind) -> Token { Symbol::new(kind).into() }

fn number(value: f64) -> Token { Number::new(value).into() }

fn string(text: &str) -> Token { StringLiteral::new(text.to_owned()).into() }

#[test]
fn empty_source() {
    let mut tokenizer = Tokenizer::from_source("");
    assert_eq!(tokenizer.next_token(), Ok(None));
    assert_eq!(tokenizer.cursor(), 0);
}

#[test]
fn whitespace_only_source() {
    let mut tokenizer = Tokenizer::from_source(" \t\r\n \u{3000}");
    assert_eq!(tokenizer.next_token(), Ok(None));
    assert_eq!(tokenizer.cursor(), tokenizer.source_file().content().len());
}

#[test]
fn end_of_input_is_repeatable() {
    let mut tokenizer = Tokenizer::from_source("print  ");

    assert_eq!(tokenizer.next_token(), Ok(Some(name("print"))));
    assert_eq!(tokenizer.next_token(), Ok(None));

    let cursor = tokenizer.cursor();
    assert_eq!(tokenizer.next_token(), Ok(None));
    assert_eq!(tokenizer.next_token(), Ok(None));
    assert_eq!(tokenizer.cursor(), cursor);
}

#[test]
fn single_symbols() {
    for kind in [
        SymbolKind::Semicolon,
        SymbolKind::Equals,
        SymbolKind::Plus,
        SymbolKind::Minus,
    ] {
        let mut tokenizer = Tokenizer::from_source(kind.as_char().to_string());

        let token = tokenizer.next_token().unwrap().unwrap();
        assert_eq!(token.as_symbol().map(Symbol::symbol), Some(kind.as_char()));
        assert_eq!(tokenizer.next_token(), Ok(None));
    }
}

#[test]
fn reserved_words() {
    assert_eq!(
        tokenize_all("note print let"),
        Ok(vec![name("note"), name("print"), name("let")])
    );
}

#[test]
fn names_know_their_reserved_word() {
    let words = tokenize_all("note print let x")
        .unwrap()
        .iter()
        .map(|token| token.as_name().and_then(Name::reserved_word))
        .collect::<Vec<_>>();

    assert_eq!(
        words,
        vec![
            Some(ReservedWord::Note),
            Some(ReservedWord::Print),
            Some(ReservedWord::Let),
            None
        ]
    );
}

#[test]
fn reserved_word_precedes_number() {
    let mut tokenizer =
        Tokenizer::from_source("42 43").with_classifier(Classifier::new().with_reserved_word("42"));

    assert_eq!(tokenizer.next_token(), Ok(Some(name("42"))));
    assert_eq!(tokenizer.next_token(), Ok(Some(number(43.0))));
}

#[test]
fn numbers() {
    assert_eq!(
        tokenize_all("0 42 3.5"),
        Ok(vec![number(0.0), number(42.0), number(3.5)])
    );
}

#[test]
fn quoted_string() {
    let mut tokenizer = Tokenizer::from_source("\"hello world\" x");

    let token = tokenizer.next_token().unwrap().unwrap();
    assert_eq!(
        token.as_string().map(|string| string.text().as_str()),
        Some("hello world")
    );
    assert_eq!(tokenizer.cursor(), 13);
}

#[test]
fn quoted_string_keeps_inner_whitespace_and_symbols() {
    assert_eq!(
        tokenize_all("print \"a = 1 ;\n b\" ;"),
        Ok(vec![
            name("print"),
            string("a = 1 ;\n b"),
            symbol(SymbolKind::Semicolon)
        ])
    );
}

#[test]
fn empty_quoted_string() {
    assert_eq!(tokenize_all("\"\""), Ok(vec![string("")]));
}

#[test]
fn quoted_string_ends_at_closing_quote() {
    assert_eq!(
        tokenize_all("\"ab\"cd"),
        Ok(vec![string("ab"), string("cd")])
    );
}

#[test]
fn bare_lexeme_is_string() {
    assert_eq!(tokenize_all("abc123"), Ok(vec![string("abc123")]));
}

#[test]
fn let_statement() {
    assert_eq!(
        tokenize_all("let x = 5 ;"),
        Ok(vec![
            name("let"),
            name("x"),
            symbol(SymbolKind::Equals),
            number(5.0),
            symbol(SymbolKind::Semicolon),
        ])
    );
}

#[test]
fn statement_without_spaces_is_one_lexeme() {
    assert_eq!(tokenize_all("x=5;"), Ok(vec![string("x=5;")]));
}

#[test]
fn unterminated_string() {
    let mut tokenizer = Tokenizer::from_source("print \"abc");

    assert_eq!(tokenizer.next_token(), Ok(Some(name("print"))));

    let error = tokenizer.next_token().unwrap_err();
    let error = error.as_unterminated_string().unwrap();
    assert_eq!(error.span.str(), "\"abc");
    assert_eq!(error.span.start(), 6);
}

#[test]
fn unknown_character() {
    let mut tokenizer = Tokenizer::from_source("let # = 5");

    assert_eq!(tokenizer.next_token(), Ok(Some(name("let"))));

    let error = tokenizer.next_token().unwrap_err();
    assert_eq!(error.offset(), 4);

    let error = error.into_unknown_character().unwrap();
    assert_eq!(error.character, '#');
    assert_eq!(error.span.str(), "#");
}

#[test]
fn error_display_names_the_problem() {
    let error = Tokenizer::from_source("  #").next_token().unwrap_err();
    assert!(error.to_string().contains("unknown character `#`"));

    let error = Tokenizer::from_source("\"open").next_token().unwrap_err();
    assert!(error.to_string().contains("unterminated string"));
}

#[test]
fn reading_past_the_end_is_a_scan_error() {
    let mut tokenizer = Tokenizer::from_source("+");

    assert_eq!(tokenizer.read(), Ok('+'));
    assert_eq!(
        tokenizer.read(),
        Err(Error::ScanError(ScanError { cursor: 1 }))
    );
    assert_eq!(tokenizer.cursor(), 1);
}

#[test]
fn multi_byte_characters() {
    assert_eq!(
        tokenize_all("é \"ünï\" ab→"),
        Ok(vec![name("é"), string("ünï"), string("ab→")])
    );
}

#[test]
fn iterator_stops_after_first_error() {
    let mut tokenizer = Tokenizer::from_source("x # y");

    assert_eq!(tokenizer.next(), Some(Ok(name("x"))));
    assert!(matches!(tokenizer.next(), Some(Err(Error::UnknownCharacter(_)))));
    assert_eq!(tokenizer.next(), None);
    assert_eq!(tokenizer.next(), None);
}

proptest! {
    #[test]
    fn token_sequence_test(
        inputs in proptest::collection::vec(
            (token::tests::Token::arbitrary(), token::tests::WhiteSpaces::arbitrary()),
            0..16,
        )
    ) {
        let source: String = inputs
            .iter()
            .map(|(token, white_spaces)| format!("{token}{white_spaces}"))
            .collect();
        let tokens = Tokenizer::from_source(source)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|error| TestCaseError::fail(error.to_string()))?;

        let inputs = inputs.into_iter().map(|(token, _)| token).collect::<Vec<_>>();
        inputs.as_slice().assert(tokens.as_slice())?;
    }

    #[test]
    fn whitespace_only_test(
        white_spaces in proptest::collection::vec(token::tests::WhiteSpaces::arbitrary(), 0..8)
            .prop_map(|white_spaces| {
                white_spaces.iter().map(ToString::to_string).collect::<String>()
            })
    ) {
        let mut tokenizer = Tokenizer::from_source(white_spaces);

        prop_assert!(tokenizer.next_token() == Ok(None));
        prop_assert!(tokenizer.next_token() == Ok(None));
    }
}
