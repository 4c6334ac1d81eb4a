//! Line-oriented tokenizer
//!
//! Splits source text into raw tokens one line at a time. Tokenizer state
//! (the pending word buffer and the inside-string flag) never survives a
//! line boundary, so an unclosed quote is flushed as a plain token at end
//! of line rather than swallowing the rest of the file.
//!
//! Segmentation rules, applied per character:
//! - inside a string segment, every character joins the token; a closing
//!   `"` ends the segment
//! - `"` outside a string flushes any pending word and opens a segment
//! - ASCII alphanumerics and `_` grow the pending word
//! - ASCII whitespace flushes the pending word
//! - any other character flushes the pending word, then becomes its own
//!   single-character token; adjacent punctuation is NEVER merged (`==`
//!   arrives as two `=` tokens)
//!
//! Character classes are ASCII-only. Non-ASCII text is neither word
//! material nor whitespace, so each such character becomes a
//! single-character token.

use crate::config::compile_time::lexical::TOKENS_PER_LINE_HINT;
use crate::tokens::RawToken;
use crate::utils::{Position, Span};

/// Tokenizer over source text. Stateless between calls.
#[derive(Debug, Default, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokenize a single line. `line` must not contain `\n`.
    ///
    /// `line_number` is 1-based and only feeds span construction.
    pub fn tokenize_line(&self, line: &str, line_number: u32) -> Vec<RawToken> {
        let mut tokens = Vec::with_capacity(TOKENS_PER_LINE_HINT.min(line.len()));

        let mut buffer = String::new();
        let mut buffer_start: u32 = 1;
        let mut in_string = false;

        let mut column: u32 = 0;
        for c in line.chars() {
            column += 1;

            if in_string {
                buffer.push(c);
                if c == '"' {
                    flush(&mut tokens, &mut buffer, line_number, buffer_start, column + 1);
                    in_string = false;
                }
            } else if c == '"' {
                if !buffer.is_empty() {
                    flush(&mut tokens, &mut buffer, line_number, buffer_start, column);
                }
                buffer_start = column;
                buffer.push(c);
                in_string = true;
            } else if c.is_ascii_alphanumeric() || c == '_' {
                if buffer.is_empty() {
                    buffer_start = column;
                }
                buffer.push(c);
            } else if !c.is_ascii_whitespace() {
                if !buffer.is_empty() {
                    flush(&mut tokens, &mut buffer, line_number, buffer_start, column);
                }
                // Single-character token; never merged with a neighbor
                tokens.push(RawToken::new(
                    c.to_string(),
                    Span::new(
                        Position::new(line_number, column),
                        Position::new(line_number, column + 1),
                    ),
                ));
            } else if !buffer.is_empty() {
                flush(&mut tokens, &mut buffer, line_number, buffer_start, column);
            }
        }

        // End of line flushes whatever is pending, including an unclosed
        // string segment. No error is raised for the missing quote.
        if !buffer.is_empty() {
            flush(&mut tokens, &mut buffer, line_number, buffer_start, column + 1);
        }

        tokens
    }

    /// Tokenize full source text, line by line.
    pub fn tokenize_source(&self, source: &str) -> Vec<RawToken> {
        let mut tokens = Vec::new();
        for (index, line) in source.lines().enumerate() {
            tokens.extend(self.tokenize_line(line, index as u32 + 1));
        }
        tokens
    }
}

fn flush(
    tokens: &mut Vec<RawToken>,
    buffer: &mut String,
    line: u32,
    start_column: u32,
    end_column: u32,
) {
    tokens.push(RawToken::new(
        std::mem::take(buffer),
        Span::new(
            Position::new(line, start_column),
            Position::new(line, end_column),
        ),
    ));
}
