//! Lexical analysis: tokenization and classification
//!
//! The analyzer runs the two core stages in order. The tokenizer splits
//! source text into raw tokens line by line; the classifier assigns each
//! token exactly one category and the tally accumulates per-category
//! counts. Neither stage can fail: any input line produces a (possibly
//! empty) token sequence and every token gets a category.

pub mod classifier;
pub mod tokenizer;

use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::tokens::{ClassifiedToken, RawToken, TokenTally};
use crate::{log_debug, log_success};

pub use classifier::{classify, classify_token};
pub use tokenizer::Tokenizer;

/// Complete result of analyzing one source text
#[derive(Debug, Clone)]
pub struct LexicalAnalysis {
    /// Classified tokens in source order: line by line, left to right
    pub tokens: Vec<ClassifiedToken>,
    /// Per-category counts over `tokens`
    pub tally: TokenTally,
}

impl LexicalAnalysis {
    /// Per-token report lines followed by the summary block
    pub fn report(&self) -> String {
        let mut output = String::new();
        for token in &self.tokens {
            output.push_str(&token.report_line());
            output.push('\n');
        }
        output.push_str(&self.tally.summary());
        output
    }

    /// Like `report`, but each token line is prefixed with its source span
    pub fn report_with_positions(&self) -> String {
        let mut output = String::new();
        for token in &self.tokens {
            output.push_str(&format!("{}: {}\n", token.span(), token.report_line()));
        }
        output.push_str(&self.tally.summary());
        output
    }
}

/// Essential lexical analysis metrics
#[derive(Debug, Default, Clone)]
pub struct LexicalMetrics {
    pub lines_processed: usize,
    pub total_tokens: usize,
    pub max_tokens_per_line: usize,
}

impl LexicalMetrics {
    fn record_line(&mut self, token_count: usize) {
        self.lines_processed += 1;
        self.total_tokens += token_count;
        self.max_tokens_per_line = self.max_tokens_per_line.max(token_count);
    }
}

/// Core analyzer running tokenization then classification
pub struct LexicalAnalyzer {
    tokenizer: Tokenizer,
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            metrics: LexicalMetrics::default(),
            preferences: LexicalPreferences::default(),
        }
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    /// Tokenize source text into raw tokens, line by line
    pub fn tokenize(&mut self, source: &str) -> Vec<RawToken> {
        self.metrics = LexicalMetrics::default();

        let mut tokens = Vec::new();
        for (index, line) in source.lines().enumerate() {
            let line_number = index as u32 + 1;
            let line_tokens = self.tokenizer.tokenize_line(line, line_number);

            if self.preferences.log_line_statistics {
                log_debug!("Line tokenized",
                    "line" => line_number,
                    "tokens" => line_tokens.len()
                );
            }

            self.metrics.record_line(line_tokens.len());
            tokens.extend(line_tokens);
        }

        log_success!(codes::success::TOKENIZATION_COMPLETE, "Tokenization complete",
            "lines" => self.metrics.lines_processed,
            "tokens" => tokens.len()
        );

        tokens
    }

    /// Run both stages on source text
    pub fn analyze(&mut self, source: &str) -> LexicalAnalysis {
        let raw_tokens = self.tokenize(source);

        let mut tally = TokenTally::new();
        let tokens: Vec<ClassifiedToken> = raw_tokens
            .into_iter()
            .map(|raw| {
                let classified = classify_token(raw);
                tally.record(classified.category);
                classified
            })
            .collect();

        log_success!(codes::success::CLASSIFICATION_COMPLETE, "Classification complete",
            "tokens" => tally.total(),
            "keywords" => tally.keywords,
            "identifiers" => tally.identifiers
        );

        LexicalAnalysis { tokens, tally }
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyze source text with default preferences
pub fn analyze_source(source: &str) -> LexicalAnalysis {
    LexicalAnalyzer::new().analyze(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::Category;

    #[test]
    fn test_analyze_declaration() {
        let analysis = analyze_source("int count = 42;\n");

        let report: Vec<String> = analysis.tokens.iter().map(|t| t.report_line()).collect();
        assert_eq!(
            report,
            vec![
                "int -> keyword",
                "count -> identifier",
                "= -> operator",
                "42 -> number",
                "; -> other",
            ]
        );

        assert_eq!(analysis.tally.keywords, 1);
        assert_eq!(analysis.tally.identifiers, 1);
        assert_eq!(analysis.tally.operators, 1);
        assert_eq!(analysis.tally.numbers, 1);
        assert_eq!(analysis.tally.others, 1);
        assert_eq!(analysis.tally.total(), 5);
    }

    #[test]
    fn test_analyze_comparison_splits_operator() {
        let analysis = analyze_source("if (x == 10)\n");

        let report: Vec<String> = analysis.tokens.iter().map(|t| t.report_line()).collect();
        assert_eq!(
            report,
            vec![
                "if -> keyword",
                "( -> other",
                "x -> identifier",
                "= -> operator",
                "= -> operator",
                "10 -> number",
                ") -> other",
            ]
        );
        assert_eq!(analysis.tally.operators, 2);
    }

    #[test]
    fn test_analyze_string_literal() {
        let analysis = analyze_source("msg = \"hi there\";\n");

        assert_eq!(analysis.tokens[2].text(), "\"hi there\"");
        assert_eq!(analysis.tokens[2].category, Category::StringLiteral);
        assert_eq!(analysis.tally.string_literals, 1);
    }

    #[test]
    fn test_analyze_unterminated_string_is_other() {
        let analysis = analyze_source("s = \"oops\n");

        let last = analysis.tokens.last().unwrap();
        assert_eq!(last.text(), "\"oops");
        assert_eq!(last.category, Category::Other);
    }

    #[test]
    fn test_analyze_empty_source() {
        let analysis = analyze_source("");
        assert!(analysis.tokens.is_empty());
        assert!(analysis.tally.is_empty());
        assert_eq!(analysis.tally.summary(), analysis.report());
    }

    #[test]
    fn test_tally_matches_token_list() {
        let analysis = analyze_source("while (i < 9) { total += i; i++; }\n\"done\"\n");

        let mut recount = TokenTally::new();
        for token in &analysis.tokens {
            recount.record(token.category);
        }
        assert_eq!(recount, analysis.tally);
        assert_eq!(analysis.tally.total(), analysis.tokens.len());
    }

    #[test]
    fn test_metrics() {
        let mut analyzer = LexicalAnalyzer::new();
        analyzer.analyze("int x;\n\ny = 2 + 2;\n");

        let metrics = analyzer.metrics();
        assert_eq!(metrics.lines_processed, 3);
        assert_eq!(metrics.max_tokens_per_line, 6);
        assert_eq!(metrics.total_tokens, 9);
    }

    #[test]
    fn test_report_with_positions() {
        let analysis = analyze_source("int x;\n");
        let report = analysis.report_with_positions();
        assert!(report.starts_with("1:1-4: int -> keyword\n"));
        assert!(report.contains("1:5-6: x -> identifier\n"));
    }

    #[test]
    fn test_report_ends_with_summary() {
        let analysis = analyze_source("x = 1;\n");
        let report = analysis.report();
        assert!(report.starts_with("x -> identifier\n"));
        assert!(report.contains("\nIdentifiers Tokens: 1\n"));
        assert!(report.ends_with("Total Tokens: 4\n"));
    }
}
