use crate::file_processor::FileMetadata;
use crate::lexical::{LexicalAnalysis, LexicalMetrics};
use crate::tokens::TokenTally;
use std::time::Duration;

/// Complete pipeline result covering all processing stages
#[derive(Debug)]
pub struct PipelineResult {
    pub analysis: LexicalAnalysis,
    pub file_metadata: FileMetadata,
    pub lexical_metrics: LexicalMetrics,
    pub processing_duration: Duration,
}

impl PipelineResult {
    pub fn new(
        analysis: LexicalAnalysis,
        file_metadata: FileMetadata,
        lexical_metrics: LexicalMetrics,
        processing_duration: Duration,
    ) -> Self {
        Self {
            analysis,
            file_metadata,
            lexical_metrics,
            processing_duration,
        }
    }

    /// Per-category tally over the classified tokens
    pub fn tally(&self) -> &TokenTally {
        &self.analysis.tally
    }

    /// Total number of tokens produced
    pub fn token_count(&self) -> usize {
        self.analysis.tokens.len()
    }

    /// Plain-text report: one line per token followed by the summary block
    pub fn report(&self) -> String {
        self.analysis.report()
    }

    /// Report with each token line prefixed by its source span
    pub fn report_with_positions(&self) -> String {
        self.analysis.report_with_positions()
    }

    pub fn log_success(&self, file_path: &str) {
        let duration_secs = self.processing_duration.as_secs_f64();
        let token_rate = if duration_secs > 0.0 {
            self.token_count() as f64 / duration_secs
        } else {
            0.0
        };
        crate::log_success!(
            crate::logging::codes::success::OPERATION_COMPLETED_SUCCESSFULLY,
            "Lexical analysis pipeline succeeded",
            "file" => file_path,
            "lines" => self.lexical_metrics.lines_processed,
            "tokens" => self.token_count(),
            "duration_ms" => format!("{:.2}", duration_secs * 1000.0),
            "tokens_per_sec" => format!("{:.0}", token_rate)
        );
    }
}
