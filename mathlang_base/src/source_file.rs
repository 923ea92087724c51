//! Contains the source text handed to the tokenizer and the spans that point into it.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    fs::File,
    ops::Range,
    path::PathBuf,
    sync::Arc,
};

use getset::{CopyGetters, Getters};
use memmap::MmapOptions;
use ouroboros::self_referencing;
use thiserror::Error;

/// Represents an error that occurs when loading/creating a source file.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Utf8Error(#[from] std::str::Utf8Error),
}

#[self_referencing]
struct MappedSource {
    file: File,
    mapped: Option<memmap::Mmap>,

    #[borrows(mapped)]
    text: &'this str,
}

impl MappedSource {
    fn create(file: File) -> Result<Self, Error> {
        // zero-length files cannot be mapped
        let mapped = if file.metadata()?.len() == 0 {
            None
        } else {
            Some(unsafe { MmapOptions::new().map(&file)? })
        };

        MappedSourceTryBuilder {
            file,
            mapped,
            text_builder: |mapped| {
                mapped
                    .as_ref()
                    .map_or(Ok(""), |mapped| std::str::from_utf8(mapped).map_err(Error::from))
            },
        }
        .try_build()
    }
}

enum Contents {
    Mapped(MappedSource),
    Owned(String),
}

impl Contents {
    fn as_str(&self) -> &str {
        match self {
            Self::Mapped(mapped) => mapped.borrow_text(),
            Self::Owned(string) => string.as_str(),
        }
    }
}

/// Represents the immutable text of one program, either memory-mapped from a file or held in
/// memory.
#[derive(Getters)]
pub struct SourceFile {
    contents: Contents,

    /// Gets the path the source was loaded from, or the name given to an in-memory source.
    #[get = "pub"]
    full_path: PathBuf,

    lines: Vec<Range<usize>>,
}

impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("full_path", &self.full_path)
            .field("lines", &self.lines)
            .finish_non_exhaustive()
    }
}

impl SourceFile {
    fn new(full_path: PathBuf, contents: Contents) -> Arc<Self> {
        let lines = line_ranges(contents.as_str());
        Arc::new(Self {
            contents,
            full_path,
            lines,
        })
    }

    /// Gets the text of the source file.
    #[must_use]
    pub fn content(&self) -> &str { self.contents.as_str() }

    /// Gets the line at the given line number, including its terminator.
    ///
    /// The line number starts at 1.
    #[must_use]
    pub fn get_line(&self, line: usize) -> Option<&str> {
        self.line_range(line).map(|range| &self.content()[range])
    }

    /// Gets the byte range of the line at the given line number, including its terminator.
    ///
    /// The line number starts at 1.
    #[must_use]
    pub fn line_range(&self, line: usize) -> Option<Range<ByteIndex>> {
        self.lines.get(line.checked_sub(1)?).cloned()
    }

    /// Gets the number of lines in the source file.
    #[must_use]
    pub fn line_number(&self) -> usize { self.lines.len() }

    /// Loads the source file by memory-mapping the given file.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when mapping the file to memory.
    /// - [`Error::Utf8Error`]: The mapped bytes are not valid UTF-8.
    pub fn load(file: File, path: PathBuf) -> Result<Arc<Self>, Error> {
        let mapped = MappedSource::create(file)?;
        Ok(Self::new(path, Contents::Mapped(mapped)))
    }

    /// Creates a source file from text already held in memory.
    ///
    /// The `name` is used in place of a file path when the source is displayed in
    /// diagnostics.
    #[must_use]
    pub fn from_string(name: impl Into<PathBuf>, content: impl Into<String>) -> Arc<Self> {
        Self::new(name.into(), Contents::Owned(content.into()))
    }

    /// Writes the given displayable object to a temporary file and loads it back.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when creating, writing to, or mapping the
    ///   temporary file.
    /// - [`Error::Utf8Error`]: The mapped bytes are not valid UTF-8.
    pub fn temp(display: impl Display) -> Result<Arc<Self>, Error> {
        use std::io::Write;

        let mut tempfile = tempfile::Builder::new()
            .prefix("mathlang")
            .suffix(".mlang")
            .tempfile()?;

        write!(tempfile.as_file_mut(), "{display}")?;
        let path = tempfile.path().to_owned();

        Self::load(tempfile.into_file(), path)
    }

    /// Gets the [`Location`] of the character starting at the given byte index.
    ///
    /// Returns [`None`] if the index is at or past the end of the source or does not lie on a
    /// character boundary.
    #[must_use]
    pub fn get_location(&self, byte_index: ByteIndex) -> Option<Location> {
        let content = self.content();
        if byte_index >= content.len() || !content.is_char_boundary(byte_index) {
            return None;
        }

        let line = self.lines.partition_point(|range| range.end <= byte_index);
        let range = self.lines.get(line)?;
        let column = content[range.start..byte_index].chars().count() + 1;

        Some(Location {
            line: line + 1,
            column,
        })
    }
}

/// Is an unsigned integer that represents a byte index in the source code.
pub type ByteIndex = usize;

/// Is a struct pointing to a particular location in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
    /// The line number of the location (starts at 1).
    pub line: usize,

    /// The column number of the location, counted in characters (starts at 1).
    pub column: usize,
}

/// Represents a range of characters in a source file.
#[derive(Clone, Getters, CopyGetters)]
pub struct Span {
    /// Gets the start byte index of the span.
    #[get_copy = "pub"]
    start: ByteIndex,

    /// Gets the end byte index of the span (exclusive).
    #[get_copy = "pub"]
    end: ByteIndex,

    /// Gets the source file that the span is located in.
    #[get = "pub"]
    source_file: Arc<SourceFile>,
}

impl Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Span")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("content", &self.str())
            .finish()
    }
}

impl Span {
    /// Creates a span from the given start and end byte indices in the source file.
    ///
    /// Returns [`None`] unless `start <= end <= content.len()` and both indices lie on
    /// character boundaries.
    #[must_use]
    pub fn new(source_file: Arc<SourceFile>, start: ByteIndex, end: ByteIndex) -> Option<Self> {
        let content = source_file.content();
        if start > end
            || end > content.len()
            || !content.is_char_boundary(start)
            || !content.is_char_boundary(end)
        {
            return None;
        }

        Some(Self {
            start,
            end,
            source_file,
        })
    }

    /// Creates a span from the given start byte index to the end of the source file.
    #[must_use]
    pub fn to_end(source_file: Arc<SourceFile>, start: ByteIndex) -> Option<Self> {
        let end = source_file.content().len();
        Self::new(source_file, start, end)
    }

    /// Gets the string slice of the source code that the span represents.
    #[must_use]
    pub fn str(&self) -> &str { &self.source_file.content()[self.start..self.end] }

    /// Gets the starting [`Location`] of the span.
    ///
    /// Returns [`None`] for an empty span at the end of the source file.
    #[must_use]
    pub fn start_location(&self) -> Option<Location> { self.source_file.get_location(self.start) }

    /// Gets the ending [`Location`] of the span.
    ///
    /// Returns [`None`] if the end of the span is the end of the source file.
    #[must_use]
    pub fn end_location(&self) -> Option<Location> { self.source_file.get_location(self.end) }

    /// Joins the starting position of this span with the end position of the given span.
    #[must_use]
    pub fn join(&self, end: &Self) -> Option<Self> {
        if !Arc::ptr_eq(&self.source_file, &end.source_file) || self.start > end.end {
            return None;
        }

        Some(Self {
            start: self.start,
            end: end.end,
            source_file: self.source_file.clone(),
        })
    }

    fn key(&self) -> (usize, ByteIndex, ByteIndex) {
        (Arc::as_ptr(&self.source_file) as usize, self.start, self.end)
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Self) -> bool { self.key() == other.key() }
}

impl Eq for Span {}

impl PartialOrd for Span {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for Span {
    fn cmp(&self, other: &Self) -> Ordering { self.key().cmp(&other.key()) }
}

impl std::hash::Hash for Span {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) { self.key().hash(state); }
}

/// Splits the text into line ranges, each including its `\n`, `\r\n` or lone `\r`
/// terminator. The last range holds whatever follows the final terminator and may be empty.
fn line_ranges(text: &str) -> Vec<Range<usize>> {
    let bytes = text.as_bytes();
    let mut ranges = Vec::new();
    let mut start = 0;
    let mut index = 0;

    while index < bytes.len() {
        let terminator = match (bytes[index], bytes.get(index + 1)) {
            (b'\r', Some(b'\n')) => 2,
            (b'\n' | b'\r', _) => 1,
            _ => 0,
        };

        if terminator == 0 {
            index += 1;
            continue;
        }

        index += terminator;
        ranges.push(start..index);
        start = index;
    }

    ranges.push(start..text.len());
    ranges
}
