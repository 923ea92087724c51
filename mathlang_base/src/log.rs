//! Provides the functions related to logging/printing messages to the console.

use std::fmt::{Display, Write};

use derive_new::new;
use formatting::{Color, Style};

use crate::source_file::{ByteIndex, Location, SourceFile, Span};

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Info,
    Warning,
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header = match self.severity {
            Severity::Error => Color::Red.with("[error]:"),
            Severity::Info => Color::Green.with("[info]:"),
            Severity::Warning => Color::Yellow.with("[warning]:"),
        };

        write!(
            f,
            "{} {}",
            Style::Bold.with(header),
            Style::Bold.with(&self.display)
        )
    }
}

/// Prints the lines of source code covered by a span, highlighting the spanned characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The span of the source code to be printed.
    pub span: &'a Span,

    /// The help message printed under the highlighted code.
    pub help_display: Option<T>,
}

fn digits(mut number: usize) -> usize {
    let mut count = 1;
    while number >= 10 {
        number /= 10;
        count += 1;
    }
    count
}

/// Locates the byte index, falling back to just past the last character of the file.
fn locate(source_file: &SourceFile, byte_index: ByteIndex) -> Location {
    source_file.get_location(byte_index).unwrap_or_else(|| {
        let line = source_file.line_number();
        let column = source_file
            .get_line(line)
            .map_or(0, |text| text.trim_end_matches(['\n', '\r']).chars().count());

        Location {
            line,
            column: column + 1,
        }
    })
}

impl<'a, T> SourceCodeDisplay<'a, T> {
    fn gutter(f: &mut std::fmt::Formatter<'_>, width: usize, symbol: &str) -> std::fmt::Result {
        write!(
            f,
            "{:width$} {} ",
            "",
            Style::Bold.with(Color::Cyan.with(symbol))
        )
    }

    fn write_line(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        line: usize,
        width: usize,
    ) -> std::fmt::Result {
        let source_file = self.span.source_file();
        let (Some(range), Some(text)) = (source_file.line_range(line), source_file.get_line(line))
        else {
            return Ok(());
        };

        write!(
            f,
            "{} {} ",
            Style::Bold.with(Color::Cyan.with(format_args!("{line:>width$}"))),
            Style::Bold.with(Color::Cyan.with("┃"))
        )?;

        for (offset, character) in text.char_indices() {
            let index = range.start + offset;

            match character {
                '\n' | '\r' => {}
                '\t' => f.write_str("    ")?,
                character if (self.span.start()..self.span.end()).contains(&index) => {
                    write!(
                        f,
                        "{}",
                        Style::Underline.with(Style::Bold.with(Color::Red.with(character)))
                    )?;
                }
                character => f.write_char(character)?,
            }
        }

        writeln!(f)
    }
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source_file = self.span.source_file();
        let start = locate(source_file, self.span.start());
        let last_character = self
            .span
            .str()
            .char_indices()
            .last()
            .map_or(self.span.start(), |(offset, _)| self.span.start() + offset);
        let end = locate(source_file, last_character);
        let width = digits(end.line);

        writeln!(
            f,
            "{:width$}{} {}:{}:{}",
            "",
            Style::Bold.with(Color::Cyan.with("-->")),
            source_file.full_path().display(),
            start.line,
            start.column
        )?;

        Self::gutter(f, width, "┃")?;
        writeln!(f)?;

        for line in start.line..=end.line {
            self.write_line(f, line, width)?;
        }

        Self::gutter(f, width, if start.line == end.line { "┃" } else { "=" })?;

        if let Some(help) = &self.help_display {
            if start.line == end.line {
                let indent: usize = source_file.get_line(start.line).map_or(0, |text| {
                    text.chars()
                        .take(start.column - 1)
                        .map(|character| if character == '\t' { 4 } else { 1 })
                        .sum()
                });
                let carets = self.span.str().chars().count().max(1);

                write!(
                    f,
                    "{:indent$}{} ",
                    "",
                    Style::Bold.with(Color::Red.with("^".repeat(carets)))
                )?;
            }

            write!(f, "{}: {help}", Style::Bold.with("help"))?;
        }

        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::{digits, Message, Severity, SourceCodeDisplay};
    use crate::source_file::{SourceFile, Span};

    #[test]
    fn test_digits() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(120), 3);
    }

    #[test]
    fn message_contains_text() {
        let message = Message::new(Severity::Error, "unknown character").to_string();
        assert!(message.contains("[error]:"));
        assert!(message.contains("unknown character"));
    }

    #[test]
    fn source_code_display_points_at_span() {
        let source_file = SourceFile::from_string("input.mlang", "let x = 5 ;\nprint # ;");
        let span = Span::new(source_file, 18, 19).unwrap();

        let rendered = SourceCodeDisplay::new(&span, Some("not a symbol")).to_string();

        assert!(rendered.contains("input.mlang:2:7"));
        assert!(rendered.contains("print "));
        assert!(rendered.contains("not a symbol"));
        assert!(!rendered.contains("let x"));
    }

    #[test]
    fn source_code_display_at_end_of_file() {
        let source_file = SourceFile::from_string("input.mlang", "print \"abc");
        let span = Span::to_end(source_file, 6).unwrap();

        let rendered = SourceCodeDisplay::new(&span, Option::<&str>::None).to_string();

        assert!(rendered.contains("input.mlang:1:7"));
    }
}
