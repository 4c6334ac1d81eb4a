//! Operator symbol table
//!
//! The table carries both single- and multi-character entries. The tokenizer
//! emits punctuation one character at a time, so the multi-character entries
//! only match tokens constructed directly (e.g. in tests or by embedders);
//! the table keeps them so the classifier and tokenizer stay independent.
use serde::{Deserialize, Serialize};

/// Operator symbols of the analyzed language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    // === ARITHMETIC ===
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // === ASSIGNMENT AND COMPARISON ===
    Assign,
    EqualEqual,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,

    // === INCREMENT / DECREMENT ===
    Increment,
    Decrement,

    // === COMPOUND ASSIGNMENT ===
    PlusAssign,
    MinusAssign,
    StarAssign,
    SlashAssign,
    PercentAssign,

    // === LOGICAL AND BITWISE ===
    LogicalAnd,
    LogicalOr,
    Not,
    BitAnd,
    BitOr,
}

impl Operator {
    /// Get the exact string representation as it appears in source
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",

            Self::Assign => "=",
            Self::EqualEqual => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",

            Self::Increment => "++",
            Self::Decrement => "--",

            Self::PlusAssign => "+=",
            Self::MinusAssign => "-=",
            Self::StarAssign => "*=",
            Self::SlashAssign => "/=",
            Self::PercentAssign => "%=",

            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
            Self::Not => "!",
            Self::BitAnd => "&",
            Self::BitOr => "|",
        }
    }

    /// Parse operator from string with exact matching
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Self::Plus),
            "-" => Some(Self::Minus),
            "*" => Some(Self::Star),
            "/" => Some(Self::Slash),
            "%" => Some(Self::Percent),

            "=" => Some(Self::Assign),
            "==" => Some(Self::EqualEqual),
            "!=" => Some(Self::NotEqual),
            "<" => Some(Self::Less),
            ">" => Some(Self::Greater),
            "<=" => Some(Self::LessEqual),
            ">=" => Some(Self::GreaterEqual),

            "++" => Some(Self::Increment),
            "--" => Some(Self::Decrement),

            "+=" => Some(Self::PlusAssign),
            "-=" => Some(Self::MinusAssign),
            "*=" => Some(Self::StarAssign),
            "/=" => Some(Self::SlashAssign),
            "%=" => Some(Self::PercentAssign),

            "&&" => Some(Self::LogicalAnd),
            "||" => Some(Self::LogicalOr),
            "!" => Some(Self::Not),
            "&" => Some(Self::BitAnd),
            "|" => Some(Self::BitOr),

            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The complete operator symbol table
pub fn operator_symbols() -> &'static [&'static str] {
    &[
        "+", "-", "*", "/", "%", "=", "==", "!=", "<", ">", "<=", ">=", "++", "--", "+=", "-=",
        "*=", "/=", "%=", "&&", "||", "!", "&", "|",
    ]
}

/// Check if a string is an operator symbol
pub fn is_operator_symbol(s: &str) -> bool {
    Operator::from_str(s).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_round_trip() {
        for &symbol in operator_symbols() {
            let operator = Operator::from_str(symbol).unwrap();
            assert_eq!(operator.as_str(), symbol);
        }
    }

    #[test]
    fn test_operator_count() {
        assert_eq!(operator_symbols().len(), 24);
    }

    #[test]
    fn test_single_character_operators() {
        assert!(is_operator_symbol("+"));
        assert!(is_operator_symbol("="));
        assert!(is_operator_symbol("!"));
        assert!(is_operator_symbol("&"));
    }

    #[test]
    fn test_multi_character_operators() {
        // Present in the table even though the tokenizer never produces them
        assert!(is_operator_symbol("=="));
        assert!(is_operator_symbol("&&"));
        assert!(is_operator_symbol("+="));
    }

    #[test]
    fn test_non_operators() {
        assert!(!is_operator_symbol(";"));
        assert!(!is_operator_symbol("("));
        assert!(!is_operator_symbol("=>"));
        assert!(!is_operator_symbol(""));
        assert!(!is_operator_symbol("~"));
    }
}
