//! Source location tracking
//!
//! Positions and spans identify where a token came from in the input.
//! Classification does not depend on them; they exist for reproducible
//! output ordering and for log context.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in source text with line and column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, counted in characters)
    pub column: u32,
}

impl Position {
    /// Create a new position
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Create the starting position of a line (column 1)
    pub fn line_start(line: u32) -> Self {
        Self { line, column: 1 }
    }

    /// Advance by n characters within the same line
    pub fn advance(self, n: u32) -> Self {
        Self {
            line: self.line,
            column: self.column + n,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A span of source text from start to end position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl Span {
    /// Create a new span
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(
            start.line < end.line || (start.line == end.line && start.column <= end.column),
            "Span start must not be after end"
        );
        Self { start, end }
    }

    /// Span covering `len` characters starting at `start`
    pub fn at(start: Position, len: u32) -> Self {
        Self {
            start,
            end: start.advance(len),
        }
    }

    /// Get the start position of this span
    pub fn start(&self) -> Position {
        self.start
    }

    /// Get the end position of this span
    pub fn end(&self) -> Position {
        self.end
    }

    /// Character length of a single-line span
    pub fn len(&self) -> usize {
        (self.end.column - self.start.column) as usize
    }

    /// Check if this span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Create an unknown/dummy span (useful for synthetic tokens in tests)
    pub fn dummy() -> Self {
        Self {
            start: Position::line_start(1),
            end: Position::line_start(1),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(
                f,
                "{}:{}-{}",
                self.start.line, self.start.column, self.end.column
            )
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// A value with its source location
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Spanned<T> {
    /// The value
    pub value: T,
    /// The source span
    pub span: Span,
}

impl<T> Spanned<T> {
    /// Create a new spanned value
    pub fn new(value: T, span: Span) -> Self {
        Self { value, span }
    }

    /// Map the value while preserving the span
    pub fn map<U, F>(self, f: F) -> Spanned<U>
    where
        F: FnOnce(T) -> U,
    {
        Spanned {
            value: f(self.value),
            span: self.span,
        }
    }

    /// Get a reference to the inner value
    pub fn as_ref(&self) -> Spanned<&T> {
        Spanned {
            value: &self.value,
            span: self.span,
        }
    }

    /// Get the inner value
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: fmt::Display> fmt::Display for Spanned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_advance() {
        let pos = Position::line_start(3);
        assert_eq!(pos.advance(4), Position::new(3, 5));
    }

    #[test]
    fn test_span_at() {
        let span = Span::at(Position::new(2, 7), 3);
        assert_eq!(span.start, Position::new(2, 7));
        assert_eq!(span.end, Position::new(2, 10));
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_display() {
        let span = Span::at(Position::new(1, 5), 2);
        assert_eq!(span.to_string(), "1:5-7");
    }

    #[test]
    fn test_spanned_map() {
        let spanned = Spanned::new("abc", Span::dummy());
        let mapped = spanned.map(|s| s.len());
        assert_eq!(mapped.value, 3);
    }
}
