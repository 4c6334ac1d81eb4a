//! Token categories
//!
//! Each raw token gets exactly one category. Classification is total:
//! anything the first five categories reject lands in `Other`.
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six token categories, in classification precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Keyword,
    Identifier,
    Number,
    Operator,
    StringLiteral,
    Other,
}

impl Category {
    /// Display name used in per-token report lines
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::Operator => "operator",
            Self::StringLiteral => "string literal",
            Self::Other => "other",
        }
    }

    /// All categories in classification precedence order
    pub const fn all() -> [Category; 6] {
        [
            Self::Keyword,
            Self::Identifier,
            Self::Number,
            Self::Operator,
            Self::StringLiteral,
            Self::Other,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
