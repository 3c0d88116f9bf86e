//! Source location tracking.
//!
//! `Span` tracks the position of tokens and syntax nodes in source text.
//! Every downstream stage reconstructs text by span rather than
//! re-scanning, so offsets must be byte-exact.

/// A span of source text.
///
/// Tracks byte offsets and 1-based line/column positions for both
/// endpoints. Composite nodes compute their span once at construction
/// from their first and last consumed token; spans are never recomputed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset where this span starts.
    pub start: usize,
    /// Byte offset where this span ends (exclusive).
    pub end: usize,
    /// 1-based line number where this span starts.
    pub start_line: u32,
    /// 1-based column number where this span starts.
    pub start_column: u32,
    /// 1-based line number where this span ends.
    pub end_line: u32,
    /// 1-based column number just past the end of this span.
    pub end_column: u32,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(
        start: usize,
        end: usize,
        start_line: u32,
        start_column: u32,
        end_line: u32,
        end_column: u32,
    ) -> Self {
        Self {
            start,
            end,
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    /// Creates a span at the start of input.
    #[must_use]
    pub const fn at_start() -> Self {
        Self {
            start: 0,
            end: 0,
            start_line: 1,
            start_column: 1,
            end_line: 1,
            end_column: 1,
        }
    }

    /// Creates a span covering the range from this span to another.
    #[must_use]
    pub const fn to(self, other: Self) -> Self {
        Self {
            start: self.start,
            end: other.end,
            start_line: self.start_line,
            start_column: self.start_column,
            end_line: other.end_line,
            end_column: other.end_column,
        }
    }

    /// Returns the length of this span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if this span fully contains another span.
    #[must_use]
    pub const fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns the text this span covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}
