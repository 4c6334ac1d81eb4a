//! End-to-end pipeline: file processing -> tokenization -> classification

mod error;
mod info;
mod result;
mod validation;

pub use error::PipelineError;
pub use info::{get_pipeline_info, PipelineInfo};
pub use result::PipelineResult;
pub use validation::validate_pipeline;

use crate::config::runtime::LexicalPreferences;
use crate::logging;
use std::path::PathBuf;
use std::time::Instant;

/// Process a single file through the complete pipeline
/// (file -> tokenization -> classification)
pub fn process_file(file_path: &str) -> Result<PipelineResult, PipelineError> {
    process_file_with_preferences(file_path, &LexicalPreferences::default())
}

/// Process a single file with custom lexical preferences
pub fn process_file_with_preferences(
    file_path: &str,
    preferences: &LexicalPreferences,
) -> Result<PipelineResult, PipelineError> {
    let start_time = Instant::now();

    // Set up file context for global logging
    logging::with_file_context(PathBuf::from(file_path), || {
        crate::log_info!("Starting lexical analysis pipeline", "file" => file_path);

        // Stage 1: File processing
        let file_result = crate::file_processor::process_file(file_path)?;

        // Stages 2 and 3: Tokenization and classification. Both stages are
        // total, so no error path exists past this point.
        let mut analyzer = crate::lexical::LexicalAnalyzer::with_preferences(preferences.clone());
        let analysis = analyzer.analyze(&file_result.source);
        let lexical_metrics = analyzer.metrics().clone();

        let result = PipelineResult::new(
            analysis,
            file_result.metadata,
            lexical_metrics,
            start_time.elapsed(),
        );

        result.log_success(file_path);

        Ok(result)
    })
}

/// Analyze source text directly, bypassing file processing
pub fn process_source(source: &str) -> PipelineResult {
    let start_time = Instant::now();

    let mut analyzer = crate::lexical::LexicalAnalyzer::new();
    let analysis = analyzer.analyze(source);
    let lexical_metrics = analyzer.metrics().clone();

    PipelineResult::new(
        analysis,
        in_memory_metadata(source),
        lexical_metrics,
        start_time.elapsed(),
    )
}

fn in_memory_metadata(source: &str) -> crate::file_processor::FileMetadata {
    crate::file_processor::FileMetadata {
        path: PathBuf::from("<memory>"),
        size: source.len() as u64,
        extension: None,
        line_count: source.lines().count(),
        modified: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_validate_pipeline() {
        let _ = crate::logging::init_global_logging();
        let result = validate_pipeline();
        assert!(result.is_ok());
    }

    #[test]
    fn test_pipeline_error_creation() {
        let error = PipelineError::pipeline_error("stage out of order");
        match error {
            PipelineError::Pipeline { message } => {
                assert_eq!(message, "stage out of order");
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_process_file_end_to_end() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("sample.c");
        fs::write(&file_path, "int count = 42;\nmsg = \"hi\";\n").unwrap();

        let result = process_file(file_path.to_str().unwrap()).unwrap();
        assert_eq!(result.tally().keywords, 1);
        assert_eq!(result.tally().string_literals, 1);
        assert_eq!(result.token_count(), result.tally().total());

        let report = result.report();
        assert!(report.starts_with("int -> keyword\n"));
        assert!(report.ends_with("Total Tokens: 9\n"));
    }

    #[test]
    fn test_process_missing_file() {
        let result = process_file("no_such_file.c");
        assert_matches!(result, Err(PipelineError::FileProcessing(_)));
    }

    #[test]
    fn test_process_empty_file_yields_zero_summary() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("empty.c");
        fs::write(&file_path, "").unwrap();

        let result = process_file(file_path.to_str().unwrap()).unwrap();
        assert!(result.tally().is_empty());
        assert_eq!(result.report(), result.tally().summary());
    }

    #[test]
    fn test_process_source() {
        let result = process_source("while (x) x = x - 1;\n");
        assert_eq!(result.tally().keywords, 1);
        assert_eq!(result.file_metadata.line_count, 1);
    }

    #[test]
    fn test_pipeline_info() {
        let info = get_pipeline_info();
        assert_eq!(info.pipeline_stages, 3);
        assert_eq!(info.token_categories, 6);
        assert_eq!(info.keyword_count, 22);
        assert_eq!(info.operator_count, 24);
        assert!(info.report().contains("Token Categories: 6"));
    }
}
