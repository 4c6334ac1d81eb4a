//! Raw and classified token types

use super::category::Category;
use crate::utils::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A token as produced by the tokenizer, before classification.
///
/// Raw tokens carry the exact source text, including the surrounding
/// quotes of string segments. The text is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawToken {
    /// Exact source text of the token
    pub text: String,
    /// Source location
    pub span: Span,
}

impl RawToken {
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        let text = text.into();
        debug_assert!(!text.is_empty(), "Raw tokens must not be empty");
        Self { text, span }
    }

    /// Token text length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for RawToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token paired with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedToken {
    pub token: RawToken,
    pub category: Category,
}

impl ClassifiedToken {
    pub fn new(token: RawToken, category: Category) -> Self {
        Self { token, category }
    }

    pub fn text(&self) -> &str {
        &self.token.text
    }

    pub fn span(&self) -> Span {
        self.token.span
    }

    /// Per-token report line
    pub fn report_line(&self) -> String {
        format!("{} -> {}", self.token.text, self.category)
    }
}

impl fmt::Display for ClassifiedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.report_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{Position, Span};

    fn span_at(line: u32, column: u32, len: u32) -> Span {
        Span::at(Position::new(line, column), len)
    }

    #[test]
    fn test_raw_token() {
        let token = RawToken::new("while", span_at(1, 1, 5));
        assert_eq!(token.text, "while");
        assert_eq!(token.len(), 5);
        assert!(!token.is_empty());
    }

    #[test]
    fn test_report_line() {
        let token = RawToken::new("count", span_at(2, 5, 5));
        let classified = ClassifiedToken::new(token, Category::Identifier);
        assert_eq!(classified.report_line(), "count -> identifier");
    }

    #[test]
    fn test_string_literal_report_line() {
        let token = RawToken::new("\"hi\"", span_at(1, 1, 4));
        let classified = ClassifiedToken::new(token, Category::StringLiteral);
        assert_eq!(classified.report_line(), "\"hi\" -> string literal");
    }
}
