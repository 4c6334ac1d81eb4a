use crate::file_processor::FileProcessorError;

/// Pipeline processing errors
///
/// Tokenization and classification are total, so the only fallible stage
/// is file processing; everything after the file is read cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("File processing failed: {0}")]
    FileProcessing(#[from] FileProcessorError),

    #[error("Pipeline error: {message}")]
    Pipeline { message: String },
}

impl PipelineError {
    pub fn pipeline_error(message: &str) -> Self {
        Self::Pipeline {
            message: message.to_string(),
        }
    }

    /// Get the logging code associated with this error
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            PipelineError::FileProcessing(e) => e.error_code(),
            PipelineError::Pipeline { .. } => crate::logging::codes::system::INTERNAL_ERROR,
        }
    }
}
