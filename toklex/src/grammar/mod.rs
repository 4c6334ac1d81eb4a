//! Grammar definitions: reserved keywords and operator symbols

pub mod keywords;
pub mod operators;

pub use keywords::{is_reserved_keyword, reserved_keywords, Keyword};
pub use operators::{is_operator_symbol, operator_symbols, Operator};
