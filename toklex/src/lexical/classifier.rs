//! Ordered token classifier
//!
//! Assigns each raw token exactly one category. Predicates are tried in a
//! fixed order and the first match wins: keyword, identifier, number,
//! operator, string literal, other. Classification is total; it never fails.

use crate::grammar::{is_operator_symbol, is_reserved_keyword};
use crate::tokens::{Category, ClassifiedToken, RawToken};

/// Check the keyword predicate: exact, case-sensitive table match
pub fn is_keyword(text: &str) -> bool {
    is_reserved_keyword(text)
}

/// Check the identifier predicate: ASCII letter or `_` first, then ASCII
/// alphanumerics or `_`
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Check the number predicate: one or more ASCII digits, nothing else
pub fn is_number(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

/// Check the operator predicate: exact operator-table match
pub fn is_operator(text: &str) -> bool {
    is_operator_symbol(text)
}

/// Check the string-literal predicate: at least two characters, first and
/// last both `"`
pub fn is_string_literal(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), text.chars().last()) {
        (Some('"'), Some('"')) => text.chars().count() >= 2,
        _ => false,
    }
}

/// Classify token text into exactly one category
pub fn classify(text: &str) -> Category {
    if is_keyword(text) {
        Category::Keyword
    } else if is_identifier(text) {
        Category::Identifier
    } else if is_number(text) {
        Category::Number
    } else if is_operator(text) {
        Category::Operator
    } else if is_string_literal(text) {
        Category::StringLiteral
    } else {
        Category::Other
    }
}

/// Classify a raw token, pairing it with its category
pub fn classify_token(token: RawToken) -> ClassifiedToken {
    let category = classify(&token.text);
    ClassifiedToken::new(token, category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_win_over_identifiers() {
        // Every keyword also satisfies the identifier predicate
        assert!(is_identifier("while"));
        assert_eq!(classify("while"), Category::Keyword);
        assert_eq!(classify("return"), Category::Keyword);
    }

    #[test]
    fn test_case_sensitive_keywords() {
        assert_eq!(classify("While"), Category::Identifier);
        assert_eq!(classify("INT"), Category::Identifier);
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(classify("count"), Category::Identifier);
        assert_eq!(classify("_tmp"), Category::Identifier);
        assert_eq!(classify("x1"), Category::Identifier);
        assert_eq!(classify("_"), Category::Identifier);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(classify("0"), Category::Number);
        assert_eq!(classify("42"), Category::Number);
        assert_eq!(classify("007"), Category::Number);
    }

    #[test]
    fn test_digit_prefixed_words_are_other() {
        // Fails identifier (digit first) and number (letter inside)
        assert_eq!(classify("9lives"), Category::Other);
        assert_eq!(classify("3_x"), Category::Other);
    }

    #[test]
    fn test_operators() {
        assert_eq!(classify("+"), Category::Operator);
        assert_eq!(classify("="), Category::Operator);
        assert_eq!(classify("!"), Category::Operator);
        // Multi-character table entries classify when presented whole
        assert_eq!(classify("=="), Category::Operator);
        assert_eq!(classify("&&"), Category::Operator);
        assert_eq!(classify("+="), Category::Operator);
    }

    #[test]
    fn test_string_literals() {
        assert_eq!(classify("\"hello\""), Category::StringLiteral);
        assert_eq!(classify("\"\""), Category::StringLiteral);
        assert_eq!(classify("\"a + b;\""), Category::StringLiteral);
    }

    #[test]
    fn test_lone_quote_is_other() {
        // One character, so the length requirement fails
        assert_eq!(classify("\""), Category::Other);
        // Unterminated segment flushed at end of line
        assert_eq!(classify("\"abc"), Category::Other);
    }

    #[test]
    fn test_punctuation_is_other() {
        assert_eq!(classify(";"), Category::Other);
        assert_eq!(classify("("), Category::Other);
        assert_eq!(classify("{"), Category::Other);
        assert_eq!(classify(","), Category::Other);
    }

    #[test]
    fn test_classification_is_total() {
        // Arbitrary junk always gets a category
        for text in ["@", "#!", "€", "12ab!", "'c'", "\u{0}"] {
            let _ = classify(text);
        }
    }
}
