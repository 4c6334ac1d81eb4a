//! File processor implementation with compile-time limits and global logging integration

use crate::config::constants::compile_time::file_processing::{
    LARGE_FILE_THRESHOLD, MAX_FILE_SIZE, MAX_LINE_COUNT_FOR_ANALYSIS,
};
use crate::config::runtime::FileProcessorPreferences;
use crate::logging::codes;
use crate::{log_debug, log_error, log_success, log_warning};
use std::fs;
use std::path::{Path, PathBuf};

/// File processor specific errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum FileProcessorError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("File too large: {size} bytes (max: {max_size})")]
    FileTooLarge { size: u64, max_size: u64 },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid UTF-8 encoding in file: {path}")]
    InvalidEncoding { path: String },

    #[error("I/O error reading file: {message}")]
    IoError { message: String },

    #[error("Invalid file path: {path}")]
    InvalidPath { path: String },

    #[error("File exceeds maximum line count: {lines} (max: {max_lines})")]
    TooManyLines { lines: usize, max_lines: usize },
}

impl FileProcessorError {
    /// Get the appropriate error code for this error type
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            FileProcessorError::FileNotFound { .. } => codes::file_processing::FILE_NOT_FOUND,
            FileProcessorError::FileTooLarge { .. } => codes::file_processing::FILE_TOO_LARGE,
            FileProcessorError::PermissionDenied { .. } => {
                codes::file_processing::PERMISSION_DENIED
            }
            FileProcessorError::InvalidEncoding { .. } => codes::file_processing::INVALID_ENCODING,
            FileProcessorError::IoError { .. } => codes::file_processing::IO_ERROR,
            FileProcessorError::InvalidPath { .. } => codes::file_processing::INVALID_PATH,
            FileProcessorError::TooManyLines { .. } => codes::file_processing::TOO_MANY_LINES,
        }
    }

    /// Check if this error should halt processing
    pub fn requires_halt(&self) -> bool {
        crate::logging::codes::requires_halt(self.error_code().as_str())
    }

    /// Get error severity
    pub fn severity(&self) -> &'static str {
        crate::logging::codes::get_severity(self.error_code().as_str()).as_str()
    }

    /// Get error category
    pub fn category(&self) -> &'static str {
        crate::logging::codes::get_category(self.error_code().as_str())
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        crate::logging::codes::is_recoverable(self.error_code().as_str())
    }
}

/// File metadata collected during processing
#[derive(Debug, Clone)]
pub struct FileMetadata {
    /// Canonical file path
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
    /// File extension (if any)
    pub extension: Option<String>,
    /// Number of lines in file
    pub line_count: usize,
    /// File modification time (if available)
    pub modified: Option<std::time::SystemTime>,
}

impl FileMetadata {
    /// Get file size in human-readable format
    pub fn human_readable_size(&self) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
        let mut size = self.size as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", self.size, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }

    /// Check if file is likely to be large for processing (compile-time threshold)
    pub fn is_large_file(&self) -> bool {
        self.size > LARGE_FILE_THRESHOLD
    }

    /// Check if line count is within safe bounds for analysis
    pub fn is_safe_for_analysis(&self) -> bool {
        self.line_count <= MAX_LINE_COUNT_FOR_ANALYSIS
    }
}

/// File processing result containing source and metadata
#[derive(Debug, Clone)]
pub struct FileProcessingResult {
    /// File contents as UTF-8 string
    pub source: String,
    /// File metadata
    pub metadata: FileMetadata,
    /// Processing duration
    pub processing_duration: std::time::Duration,
}

impl FileProcessingResult {
    /// Get character count
    pub fn char_count(&self) -> usize {
        self.source.chars().count()
    }

    /// Check if file is empty content-wise (only whitespace)
    pub fn is_effectively_empty(&self) -> bool {
        self.source.trim().is_empty()
    }

    /// Get processing rate (characters per millisecond)
    pub fn processing_rate(&self) -> f64 {
        let duration_ms = self.processing_duration.as_secs_f64() * 1000.0;
        if duration_ms > 0.0 {
            self.char_count() as f64 / duration_ms
        } else {
            0.0
        }
    }
}

/// Recognized source extensions. Anything else is still processed; the
/// processor can only warn about it.
const KNOWN_EXTENSIONS: &[&str] = &["c", "h", "cpp", "hpp", "cc", "java", "src", "txt"];

/// File processor with compile-time limits and runtime preferences
pub struct FileProcessor {
    /// Whether to enable detailed performance logging (runtime preference)
    pub enable_performance_logging: bool,
    /// Whether to warn on unrecognized extensions (runtime preference)
    pub warn_on_unknown_extension: bool,
}

impl FileProcessor {
    /// Create new file processor with default preferences
    pub fn new() -> Self {
        Self {
            enable_performance_logging: true,
            warn_on_unknown_extension: false,
        }
    }

    /// Create file processor from runtime preferences
    pub fn from_preferences(prefs: &FileProcessorPreferences) -> Self {
        Self {
            enable_performance_logging: prefs.enable_performance_logging,
            warn_on_unknown_extension: prefs.warn_on_unknown_extension,
        }
    }

    /// Enable or disable performance logging
    pub fn with_performance_logging(mut self, enabled: bool) -> Self {
        self.enable_performance_logging = enabled;
        self
    }

    /// Enable or disable unknown-extension warnings
    pub fn with_unknown_extension_warning(mut self, enabled: bool) -> Self {
        self.warn_on_unknown_extension = enabled;
        self
    }

    /// Get the compile-time maximum file size
    pub fn max_file_size() -> u64 {
        MAX_FILE_SIZE
    }

    /// Get the compile-time large file threshold
    pub fn large_file_threshold() -> u64 {
        LARGE_FILE_THRESHOLD
    }

    /// Process a file and return contents with metadata.
    ///
    /// An empty file is valid input and yields an empty source string.
    pub fn process_file(
        &self,
        file_path: &str,
    ) -> Result<FileProcessingResult, FileProcessorError> {
        let start_time = std::time::Instant::now();

        log_debug!("Starting file processing", "file" => file_path);

        let path = self.validate_path(file_path)?;
        let metadata = self.get_metadata(&path)?;
        self.validate_file(&metadata, file_path)?;
        let source = self.read_file(&path, file_path)?;

        let line_count = source.lines().count();
        if line_count > MAX_LINE_COUNT_FOR_ANALYSIS {
            let error = FileProcessorError::TooManyLines {
                lines: line_count,
                max_lines: MAX_LINE_COUNT_FOR_ANALYSIS,
            };
            log_error!(error.error_code(), "File exceeds maximum line count for safe analysis",
                "file" => file_path,
                "lines" => line_count,
                "max_lines" => MAX_LINE_COUNT_FOR_ANALYSIS);
            return Err(error);
        }

        let mut final_metadata = metadata;
        final_metadata.line_count = line_count;

        let result = FileProcessingResult {
            source,
            metadata: final_metadata,
            processing_duration: start_time.elapsed(),
        };

        self.log_processing_success(&result, file_path);

        if self.warn_on_unknown_extension {
            let known = result
                .metadata
                .extension
                .as_deref()
                .map(|ext| KNOWN_EXTENSIONS.contains(&ext))
                .unwrap_or(false);
            if !known {
                let ext_str = result.metadata.extension.as_deref().unwrap_or("none");
                log_warning!("Unrecognized source extension",
                    "file" => file_path,
                    "extension" => ext_str);
            }
        }

        Ok(result)
    }

    /// Log processing success with metrics
    fn log_processing_success(&self, result: &FileProcessingResult, file_path: &str) {
        if self.enable_performance_logging {
            log_success!(
                codes::success::FILE_PROCESSING_SUCCESS,
                "File processed successfully with performance metrics",
                "file" => file_path,
                "size_bytes" => result.metadata.size,
                "size_human" => result.metadata.human_readable_size(),
                "lines" => result.metadata.line_count,
                "chars" => result.char_count(),
                "duration_ms" => format!("{:.2}", result.processing_duration.as_secs_f64() * 1000.0),
                "chars_per_ms" => format!("{:.2}", result.processing_rate()),
                "is_large_file" => result.metadata.is_large_file()
            );
        } else {
            log_success!(
                codes::success::FILE_PROCESSING_SUCCESS,
                "File processed successfully",
                "file" => file_path,
                "size_bytes" => result.metadata.size,
                "lines" => result.metadata.line_count,
                "chars" => result.char_count()
            );
        }
    }

    /// Validate file path and check existence
    fn validate_path(&self, file_path: &str) -> Result<PathBuf, FileProcessorError> {
        if file_path.is_empty() {
            let error = FileProcessorError::InvalidPath {
                path: file_path.to_string(),
            };
            log_error!(error.error_code(), "Empty file path provided");
            return Err(error);
        }

        let path = Path::new(file_path);

        if !path.exists() {
            let error = FileProcessorError::FileNotFound {
                path: file_path.to_string(),
            };
            log_error!(error.error_code(), "File not found", "path" => file_path);
            return Err(error);
        }

        if !path.is_file() {
            let error = FileProcessorError::InvalidPath {
                path: file_path.to_string(),
            };
            log_error!(error.error_code(), "Path is not a file", "path" => file_path);
            return Err(error);
        }

        match path.canonicalize() {
            Ok(canonical_path) => {
                log_debug!("Path validation successful",
                    "canonical_path" => canonical_path.display());
                Ok(canonical_path)
            }
            Err(e) => {
                let error = FileProcessorError::IoError {
                    message: format!("Failed to resolve path '{}': {}", file_path, e),
                };
                log_error!(error.error_code(), "Failed to canonicalize path",
                    "path" => file_path,
                    "io_error" => e);
                Err(error)
            }
        }
    }

    /// Get file metadata
    fn get_metadata(&self, path: &Path) -> Result<FileMetadata, FileProcessorError> {
        let metadata = match fs::metadata(path) {
            Ok(meta) => meta,
            Err(e) => {
                let error = match e.kind() {
                    std::io::ErrorKind::PermissionDenied => {
                        let err = FileProcessorError::PermissionDenied {
                            path: path.display().to_string(),
                        };
                        log_error!(err.error_code(), "Permission denied accessing file",
                            "path" => path.display());
                        err
                    }
                    _ => {
                        let err = FileProcessorError::IoError {
                            message: format!(
                                "Failed to read metadata for '{}': {}",
                                path.display(),
                                e
                            ),
                        };
                        log_error!(err.error_code(), "Failed to read file metadata",
                            "path" => path.display(),
                            "io_error" => e);
                        err
                    }
                };
                return Err(error);
            }
        };

        let size = metadata.len();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|s| s.to_lowercase());
        let modified = metadata.modified().ok();

        let file_metadata = FileMetadata {
            path: path.to_path_buf(),
            size,
            extension: extension.clone(),
            line_count: 0, // Updated after reading
            modified,
        };

        log_debug!("File metadata collected",
            "size_bytes" => size,
            "size_human" => file_metadata.human_readable_size(),
            "extension" => extension.as_deref().unwrap_or("none"),
            "is_large_file" => file_metadata.is_large_file());

        Ok(file_metadata)
    }

    /// Validate file properties using compile-time constants
    fn validate_file(
        &self,
        metadata: &FileMetadata,
        file_path: &str,
    ) -> Result<(), FileProcessorError> {
        if metadata.size > MAX_FILE_SIZE {
            let error = FileProcessorError::FileTooLarge {
                size: metadata.size,
                max_size: MAX_FILE_SIZE,
            };
            log_error!(error.error_code(), "File exceeds maximum size limit",
                "file" => file_path,
                "size_bytes" => metadata.size,
                "limit_bytes" => MAX_FILE_SIZE);
            return Err(error);
        }

        // Empty files are valid input; they produce an all-zero summary
        if metadata.size == 0 {
            log_debug!("File is empty; summary will report zero tokens",
                "file" => file_path);
        }

        Ok(())
    }

    /// Read file contents with validation
    fn read_file(&self, path: &Path, file_path: &str) -> Result<String, FileProcessorError> {
        match fs::read_to_string(path) {
            Ok(content) => {
                log_debug!("File content read successfully",
                    "file" => file_path,
                    "chars" => content.chars().count(),
                    "bytes" => content.len(),
                    "lines" => content.lines().count());

                Ok(content)
            }
            Err(e) => {
                let error = match e.kind() {
                    std::io::ErrorKind::PermissionDenied => {
                        let err = FileProcessorError::PermissionDenied {
                            path: path.display().to_string(),
                        };
                        log_error!(err.error_code(), "Permission denied reading file",
                            "file" => file_path);
                        err
                    }
                    std::io::ErrorKind::InvalidData => {
                        let err = FileProcessorError::InvalidEncoding {
                            path: path.display().to_string(),
                        };
                        log_error!(err.error_code(), "Invalid UTF-8 encoding in file",
                            "file" => file_path);
                        err
                    }
                    _ => {
                        let err = FileProcessorError::IoError {
                            message: format!("Failed to read file '{}': {}", path.display(), e),
                        };
                        log_error!(err.error_code(), "I/O error reading file",
                            "file" => file_path,
                            "io_error" => e);
                        err
                    }
                };
                Err(error)
            }
        }
    }
}

impl Default for FileProcessor {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// MODULE API FUNCTIONS
// ============================================================================

/// Process a file with default settings
pub fn process_file(file_path: &str) -> Result<FileProcessingResult, FileProcessorError> {
    let processor = FileProcessor::new();
    processor.process_file(file_path)
}

/// Create a file processor with default settings
pub fn create_processor() -> FileProcessor {
    FileProcessor::new()
}

/// Create a file processor from runtime preferences
pub fn create_processor_from_preferences(prefs: &FileProcessorPreferences) -> FileProcessor {
    FileProcessor::from_preferences(prefs)
}

/// Check if an error should halt processing
pub fn should_halt_on_error(error: &FileProcessorError) -> bool {
    error.requires_halt()
}

/// Get the compile-time maximum file size limit
pub fn get_max_file_size() -> u64 {
    MAX_FILE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_process_valid_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.c");
        let content = "int main() {\n    return 0;\n}\n";
        fs::write(&file_path, content).unwrap();

        let processor = FileProcessor::new();
        let result = processor.process_file(file_path.to_str().unwrap());

        assert!(result.is_ok());
        let result = result.unwrap();
        assert_eq!(result.metadata.line_count, 3);
        assert_eq!(result.char_count(), content.chars().count());
        assert!(!result.is_effectively_empty());
    }

    #[test]
    fn test_file_not_found() {
        let processor = FileProcessor::new();
        let result = processor.process_file("nonexistent.c");

        assert_matches!(result, Err(FileProcessorError::FileNotFound { .. }));
    }

    #[test]
    fn test_empty_path() {
        let processor = FileProcessor::new();
        let result = processor.process_file("");

        assert_matches!(result, Err(FileProcessorError::InvalidPath { .. }));
    }

    #[test]
    fn test_directory_is_invalid_path() {
        let dir = tempdir().unwrap();

        let processor = FileProcessor::new();
        let result = processor.process_file(dir.path().to_str().unwrap());

        assert_matches!(result, Err(FileProcessorError::InvalidPath { .. }));
    }

    #[test]
    fn test_empty_file_is_valid() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("empty.c");
        fs::write(&file_path, "").unwrap();

        let processor = FileProcessor::new();
        let result = processor.process_file(file_path.to_str().unwrap());

        assert!(result.is_ok());
        let result = result.unwrap();
        assert_eq!(result.metadata.line_count, 0);
        assert!(result.is_effectively_empty());
    }

    #[test]
    fn test_invalid_encoding() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("binary.c");
        fs::write(&file_path, [0xFF, 0xFE, 0x00, 0x80]).unwrap();

        let processor = FileProcessor::new();
        let result = processor.process_file(file_path.to_str().unwrap());

        assert_matches!(result, Err(FileProcessorError::InvalidEncoding { .. }));
    }

    #[test]
    fn test_error_methods() {
        let error = FileProcessorError::FileNotFound {
            path: "test.c".to_string(),
        };

        assert_eq!(error.error_code().as_str(), "E005");
        assert_eq!(error.category(), "FileProcessing");
        assert_eq!(error.severity(), "Medium");
        assert!(!error.is_recoverable());
        assert!(error.requires_halt());
    }

    #[test]
    fn test_too_many_lines_error_code() {
        let error = FileProcessorError::TooManyLines {
            lines: MAX_LINE_COUNT_FOR_ANALYSIS + 1,
            max_lines: MAX_LINE_COUNT_FOR_ANALYSIS,
        };
        assert_eq!(error.error_code().as_str(), "E013");
        assert!(error.requires_halt());
    }

    #[test]
    fn test_from_preferences() {
        let prefs = FileProcessorPreferences {
            enable_performance_logging: false,
            warn_on_unknown_extension: true,
        };

        let processor = FileProcessor::from_preferences(&prefs);
        assert!(!processor.enable_performance_logging);
        assert!(processor.warn_on_unknown_extension);
    }

    #[test]
    fn test_compile_time_constants_access() {
        assert_eq!(FileProcessor::max_file_size(), MAX_FILE_SIZE);
        assert_eq!(FileProcessor::large_file_threshold(), LARGE_FILE_THRESHOLD);
        assert_eq!(get_max_file_size(), MAX_FILE_SIZE);
    }
}
