//! Token data model
//!
//! Raw tokens come out of the tokenizer carrying exact source text and a
//! span. The classifier pairs each raw token with one of six categories,
//! and tallies accumulate per-category counts for the summary report.

pub mod category;
pub mod tally;
pub mod token;

pub use category::Category;
pub use tally::TokenTally;
pub use token::{ClassifiedToken, RawToken};

// Re-export span types from utils
pub use crate::utils::{Position, Span, Spanned};
