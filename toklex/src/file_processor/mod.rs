//! File processor module with compile-time constants and global logging integration

mod processor;

use crate::config::constants::compile_time::file_processing::{
    LARGE_FILE_THRESHOLD, MAX_FILE_SIZE, MAX_LINE_COUNT_FOR_ANALYSIS,
};
use crate::log_debug;
pub use processor::{
    create_processor, create_processor_from_preferences, get_max_file_size, process_file,
    should_halt_on_error, FileMetadata, FileProcessingResult, FileProcessor, FileProcessorError,
};

/// Startup validation: every file-processing code must be registered
pub fn init_file_processor_logging() -> Result<(), String> {
    let required_codes = [
        crate::logging::codes::file_processing::FILE_NOT_FOUND,
        crate::logging::codes::file_processing::FILE_TOO_LARGE,
        crate::logging::codes::file_processing::PERMISSION_DENIED,
        crate::logging::codes::file_processing::INVALID_ENCODING,
        crate::logging::codes::file_processing::IO_ERROR,
        crate::logging::codes::file_processing::INVALID_PATH,
        crate::logging::codes::file_processing::TOO_MANY_LINES,
    ];

    for code in &required_codes {
        if crate::logging::codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "File processor error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    log_debug!("File processor compile-time configuration loaded",
        "max_file_size" => MAX_FILE_SIZE,
        "large_file_threshold" => LARGE_FILE_THRESHOLD,
        "max_line_count" => MAX_LINE_COUNT_FOR_ANALYSIS);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_module_api() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("sample.c");
        fs::write(&file_path, "int main() { return 0; }\n").unwrap();

        let result = process_file(file_path.to_str().unwrap());
        assert!(result.is_ok());
    }

    #[test]
    fn test_error_helpers() {
        let error = FileProcessorError::FileNotFound {
            path: "sample.c".to_string(),
        };

        assert!(should_halt_on_error(&error));
        assert_eq!(error.error_code().as_str(), "E005");
    }

    #[test]
    fn test_init_logging() {
        let result = init_file_processor_logging();
        assert!(result.is_ok());
    }
}
