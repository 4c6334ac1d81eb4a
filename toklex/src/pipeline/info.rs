use crate::config::constants::compile_time::file_processing::MAX_FILE_SIZE;
use crate::grammar;
use crate::tokens::Category;

/// Information about pipeline capabilities
#[derive(Debug, Clone)]
pub struct PipelineInfo {
    pub pipeline_stages: usize,
    pub supports_file_processing: bool,
    pub supports_tokenization: bool,
    pub supports_classification: bool,
    pub token_categories: usize,
    pub keyword_count: usize,
    pub operator_count: usize,
    pub max_file_size: u64,
    pub global_logging_enabled: bool,
}

impl PipelineInfo {
    pub fn report(&self) -> String {
        format!(
            "Lexical Analysis Pipeline:\n\
             - Pipeline Stages: {}\n\
             - File Processing: {}\n\
             - Tokenization: {}\n\
             - Classification: {}\n\
             - Token Categories: {}\n\
             - Keywords: {}\n\
             - Operators: {}\n\
             - Max File Size: {} MB\n\
             - Global Logging: {}",
            self.pipeline_stages,
            self.supports_file_processing,
            self.supports_tokenization,
            self.supports_classification,
            self.token_categories,
            self.keyword_count,
            self.operator_count,
            self.max_file_size / (1024 * 1024),
            self.global_logging_enabled
        )
    }

    pub fn summary(&self) -> String {
        format!(
            "{}-stage lexical analyzer classifying tokens into {} categories",
            self.pipeline_stages, self.token_categories
        )
    }
}

/// Get pipeline capabilities information
pub fn get_pipeline_info() -> PipelineInfo {
    PipelineInfo {
        pipeline_stages: 3,
        supports_file_processing: true,
        supports_tokenization: true,
        supports_classification: true,
        token_categories: Category::all().len(),
        keyword_count: grammar::reserved_keywords().len(),
        operator_count: grammar::operator_symbols().len(),
        max_file_size: MAX_FILE_SIZE,
        global_logging_enabled: true,
    }
}
