//! Byte ranges in the source, and looking up which lines they are on.

use std::ops::Range;

/// A range of bytes in the source code
#[must_use]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
  /// The byte index of the start of the span
  pub start: u32,
  /// The byte index after the end of the span
  pub end: u32,
}

impl Span {
  /// Create a new `Span` from a start and end position
  #[inline]
  pub const fn new(start: u32, end: u32) -> Self {
    Self { start, end }
  }

  /// Combine two `Span`s into one, covering both of them
  pub fn merge(self, other: Self) -> Self {
    Self::new(self.start.min(other.start), self.end.max(other.end))
  }

  /// Check if a `Span` contains another `Span`
  #[must_use]
  pub const fn contains(self, other: Self) -> bool {
    self.start <= other.start && other.end <= self.end
  }

  /// The length of the span in bytes
  #[must_use]
  pub const fn len(self) -> u32 {
    self.end - self.start
  }

  /// Does the span cover no bytes?
  #[must_use]
  pub const fn is_empty(self) -> bool {
    self.start >= self.end
  }

  /// The span as a range of byte indices
  #[must_use]
  pub fn range(self) -> Range<usize> {
    self.start as usize..self.end as usize
  }

  /// Get the source text for a `Span` from a source string
  #[must_use]
  pub fn source_text(self, source_text: &str) -> &str {
    &source_text[self.range()]
  }
}

type FilePosition = u32;
type LineNumber = usize;

/// Index for looking up the line number from source positions
///
/// Line numbers given start at 1
#[must_use]
#[derive(Debug)]
pub struct LineIndex {
  line_starts: Vec<FilePosition>,
  file_length: FilePosition,
}
impl LineIndex {
  /// Create a new `LineIndex` from a source string.
  ///
  /// # Panics
  ///
  /// Panics if the source string is longer than `u32::MAX` bytes.
  #[allow(clippy::cast_possible_truncation, reason = "source.len() < u32::MAX")]
  pub fn from_source(source: &str) -> Self {
    assert!(source.len() < u32::MAX as usize);

    let bytes = source.as_bytes();
    // a `\r\n` pair is one line break
    let line_starts = std::iter::once(0)
      .chain(
        (bytes.iter().enumerate())
          .filter(|(index, character)| match character {
            b'\n' => true,
            b'\r' => bytes.get(index + 1) != Some(&b'\n'),
            _ => false,
          })
          .map(|(index, _)| index as FilePosition + 1),
      )
      .collect();

    Self {
      line_starts,
      file_length: source.len() as FilePosition,
    }
  }

  fn line_of(&self, position: FilePosition) -> LineNumber {
    match self.line_starts.binary_search(&position) {
      Ok(line) => line + 1,
      Err(line) => line,
    }
  }

  /// Get the line number which a `Span` starts on
  #[must_use]
  pub fn line(&self, span: Span) -> LineNumber {
    self.line_of(span.start)
  }

  /// Get the line number which a `Span` ends on
  ///
  /// The end of a span is exclusive, so a span ending just after a new line is on the
  /// line of the new line.
  #[must_use]
  pub fn final_line(&self, span: Span) -> LineNumber {
    self.line_of(span.end.saturating_sub(1).max(span.start))
  }

  /// The column of a position, as a byte offset from the start of its line
  #[must_use]
  pub fn column(&self, position: FilePosition) -> u32 {
    position - self.line_starts[self.line_of(position) - 1]
  }

  /// How many lines are in the file
  #[must_use]
  pub fn line_count(&self) -> LineNumber {
    self.line_starts.len()
  }

  /// Get a `Span` for a given line number
  ///
  /// # Panics
  /// Panics if the line number doesn't exist
  pub fn line_span(&self, line: LineNumber) -> Span {
    let start = self.line_starts[line - 1];
    let end = *self.line_starts.get(line).unwrap_or(&self.file_length);

    Span::new(start, end)
  }

  /// Get a `Span` for the entire file
  pub fn file_span(&self) -> Span {
    Span::new(0, self.file_length)
  }
}
