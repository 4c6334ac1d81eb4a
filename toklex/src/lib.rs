// Internal modules
pub mod config;
pub mod file_processor;
pub mod grammar;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use lexical::{analyze_source, LexicalAnalysis, LexicalAnalyzer};
pub use pipeline::{PipelineError, PipelineResult};
pub use tokens::{Category, ClassifiedToken, RawToken, TokenTally};
