//! Reserved keyword table
//!
//! Closed, case-sensitive set of reserved words. Keywords are recognized by
//! exact match only; `If`, `INT`, or `While` fall through to identifiers.
use serde::{Deserialize, Serialize};

/// Reserved words of the analyzed language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    // === TYPE KEYWORDS ===
    Int,
    Float,
    Double,
    Char,
    Void,

    // === CONTROL FLOW KEYWORDS ===
    If,
    Else,
    While,
    For,
    Do,
    Switch,
    Case,
    Break,
    Continue,
    Return,

    // === OBJECT AND ACCESS KEYWORDS ===
    Class,
    Public,
    Private,
    New,
    Delete,

    // === EXCEPTION KEYWORDS ===
    Try,
    Catch,
}

impl Keyword {
    /// Get the exact string representation as it appears in source
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Double => "double",
            Self::Char => "char",
            Self::Void => "void",

            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::For => "for",
            Self::Do => "do",
            Self::Switch => "switch",
            Self::Case => "case",
            Self::Break => "break",
            Self::Continue => "continue",
            Self::Return => "return",

            Self::Class => "class",
            Self::Public => "public",
            Self::Private => "private",
            Self::New => "new",
            Self::Delete => "delete",

            Self::Try => "try",
            Self::Catch => "catch",
        }
    }

    /// Parse keyword from string with exact case matching
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            "char" => Some(Self::Char),
            "void" => Some(Self::Void),

            "if" => Some(Self::If),
            "else" => Some(Self::Else),
            "while" => Some(Self::While),
            "for" => Some(Self::For),
            "do" => Some(Self::Do),
            "switch" => Some(Self::Switch),
            "case" => Some(Self::Case),
            "break" => Some(Self::Break),
            "continue" => Some(Self::Continue),
            "return" => Some(Self::Return),

            "class" => Some(Self::Class),
            "public" => Some(Self::Public),
            "private" => Some(Self::Private),
            "new" => Some(Self::New),
            "delete" => Some(Self::Delete),

            "try" => Some(Self::Try),
            "catch" => Some(Self::Catch),

            // Everything else becomes an identifier or other token
            _ => None,
        }
    }

    /// Check if this keyword names a type
    pub const fn is_type(self) -> bool {
        matches!(
            self,
            Self::Int | Self::Float | Self::Double | Self::Char | Self::Void
        )
    }

    /// Check if this keyword is a control-flow keyword
    pub const fn is_control_flow(self) -> bool {
        matches!(
            self,
            Self::If
                | Self::Else
                | Self::While
                | Self::For
                | Self::Do
                | Self::Switch
                | Self::Case
                | Self::Break
                | Self::Continue
                | Self::Return
        )
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The complete list of reserved keywords
pub fn reserved_keywords() -> &'static [&'static str] {
    &[
        "int", "float", "double", "char", "void", "if", "else", "while", "for", "do", "switch",
        "case", "break", "continue", "return", "class", "public", "private", "new", "delete",
        "try", "catch",
    ]
}

/// Check if a string is a reserved keyword
pub fn is_reserved_keyword(s: &str) -> bool {
    Keyword::from_str(s).is_some()
}
