//! Per-category token tallies and the summary report

use super::category::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Running per-category counts.
///
/// The sum of the six category counts always equals `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenTally {
    pub keywords: usize,
    pub identifiers: usize,
    pub numbers: usize,
    pub operators: usize,
    pub string_literals: usize,
    pub others: usize,
}

impl TokenTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one token of the given category
    pub fn record(&mut self, category: Category) {
        match category {
            Category::Keyword => self.keywords += 1,
            Category::Identifier => self.identifiers += 1,
            Category::Number => self.numbers += 1,
            Category::Operator => self.operators += 1,
            Category::StringLiteral => self.string_literals += 1,
            Category::Other => self.others += 1,
        }
    }

    /// Count for a single category
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Keyword => self.keywords,
            Category::Identifier => self.identifiers,
            Category::Number => self.numbers,
            Category::Operator => self.operators,
            Category::StringLiteral => self.string_literals,
            Category::Other => self.others,
        }
    }

    /// Total tokens recorded across all categories
    pub fn total(&self) -> usize {
        self.keywords
            + self.identifiers
            + self.numbers
            + self.operators
            + self.string_literals
            + self.others
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Merge another tally into this one
    pub fn merge(&mut self, other: &TokenTally) {
        self.keywords += other.keywords;
        self.identifiers += other.identifiers;
        self.numbers += other.numbers;
        self.operators += other.operators;
        self.string_literals += other.string_literals;
        self.others += other.others;
    }

    /// Plain-text summary block, emitted after the per-token lines.
    ///
    /// Starts with a blank line; label order is fixed and independent of
    /// classification precedence.
    pub fn summary(&self) -> String {
        format!(
            "\nIdentifiers Tokens: {}\n\
             Keywords Tokens: {}\n\
             String Tokens: {}\n\
             Operator Tokens: {}\n\
             Number Tokens: {}\n\
             Other Tokens: {}\n\
             Total Tokens: {}\n",
            self.identifiers,
            self.keywords,
            self.string_literals,
            self.operators,
            self.numbers,
            self.others,
            self.total(),
        )
    }
}

impl fmt::Display for TokenTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tally() {
        let tally = TokenTally::new();
        assert!(tally.is_empty());
        assert_eq!(tally.total(), 0);
    }

    #[test]
    fn test_record_and_total() {
        let mut tally = TokenTally::new();
        tally.record(Category::Keyword);
        tally.record(Category::Keyword);
        tally.record(Category::Identifier);
        tally.record(Category::Other);

        assert_eq!(tally.keywords, 2);
        assert_eq!(tally.identifiers, 1);
        assert_eq!(tally.others, 1);
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn test_counts_sum_to_total() {
        let mut tally = TokenTally::new();
        for category in Category::all() {
            tally.record(category);
            tally.record(category);
        }

        let sum: usize = Category::all().iter().map(|c| tally.count(*c)).sum();
        assert_eq!(sum, tally.total());
        assert_eq!(tally.total(), 12);
    }

    #[test]
    fn test_merge() {
        let mut a = TokenTally::new();
        a.record(Category::Number);
        a.record(Category::Operator);

        let mut b = TokenTally::new();
        b.record(Category::Number);
        b.record(Category::StringLiteral);

        a.merge(&b);
        assert_eq!(a.numbers, 2);
        assert_eq!(a.operators, 1);
        assert_eq!(a.string_literals, 1);
        assert_eq!(a.total(), 4);
    }

    #[test]
    fn test_summary_format() {
        let mut tally = TokenTally::new();
        tally.record(Category::Keyword);
        tally.record(Category::Identifier);
        tally.record(Category::Identifier);
        tally.record(Category::Operator);
        tally.record(Category::Number);

        let summary = tally.summary();
        assert!(summary.starts_with('\n'));
        assert!(summary.contains("Identifiers Tokens: 2\n"));
        assert!(summary.contains("Keywords Tokens: 1\n"));
        assert!(summary.contains("String Tokens: 0\n"));
        assert!(summary.contains("Operator Tokens: 1\n"));
        assert!(summary.contains("Number Tokens: 1\n"));
        assert!(summary.contains("Other Tokens: 0\n"));
        assert!(summary.ends_with("Total Tokens: 5\n"));
    }

    #[test]
    fn test_summary_label_order() {
        let summary = TokenTally::new().summary();
        let identifiers = summary.find("Identifiers Tokens").unwrap();
        let keywords = summary.find("Keywords Tokens").unwrap();
        let strings = summary.find("String Tokens").unwrap();
        let operators = summary.find("Operator Tokens").unwrap();
        let numbers = summary.find("Number Tokens").unwrap();
        let others = summary.find("Other Tokens").unwrap();
        let total = summary.find("Total Tokens").unwrap();

        assert!(identifiers < keywords);
        assert!(keywords < strings);
        assert!(strings < operators);
        assert!(operators < numbers);
        assert!(numbers < others);
        assert!(others < total);
    }
}
