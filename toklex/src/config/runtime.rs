// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileProcessorPreferences {
    /// Whether to enable detailed performance logging (user preference)
    pub enable_performance_logging: bool,

    /// Whether to warn when the source has no recognizable extension
    pub warn_on_unknown_extension: bool,
}

impl Default for FileProcessorPreferences {
    fn default() -> Self {
        Self {
            enable_performance_logging: env::var("TOKLEX_ENABLE_PERFORMANCE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            warn_on_unknown_extension: env::var("TOKLEX_WARN_ON_UNKNOWN_EXTENSION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexicalPreferences {
    /// Whether to log per-line token statistics
    pub log_line_statistics: bool,

    /// Whether to include line/column positions in per-token output
    pub include_positions_in_output: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            log_line_statistics: env::var("TOKLEX_LEXICAL_LOG_LINE_STATS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            include_positions_in_output: env::var("TOKLEX_LEXICAL_INCLUDE_POSITIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

/// Log level as a user-facing preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    /// Convert to the event-system log level
    pub fn to_events_log_level(self) -> crate::logging::LogLevel {
        match self {
            Self::Error => crate::logging::LogLevel::Error,
            Self::Warning => crate::logging::LogLevel::Warning,
            Self::Info => crate::logging::LogLevel::Info,
            Self::Debug => crate::logging::LogLevel::Debug,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Minimum level to emit
    pub min_log_level: LogLevel,

    /// Whether to emit JSON instead of plain text
    pub use_structured_logging: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            min_log_level: match env::var("TOKLEX_LOG_LEVEL").ok().as_deref() {
                Some("error") => LogLevel::Error,
                Some("warning") => LogLevel::Warning,
                Some("debug") => LogLevel::Debug,
                _ => LogLevel::Info,
            },
            use_structured_logging: env::var("TOKLEX_STRUCTURED_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

/// Aggregate runtime configuration, loadable from a TOML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub file_processor: FileProcessorPreferences,
    pub lexical: LexicalPreferences,
    pub logging: LoggingPreferences,
}

/// Errors loading a runtime configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl RuntimeConfig {
    /// Load configuration from a TOML file, falling back to env/defaults
    /// for any section the file omits.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = RuntimeConfig::default();
        assert!(config.file_processor.enable_performance_logging);
        assert!(!config.lexical.include_positions_in_output);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[logging]\nmin_log_level = \"debug\"\nuse_structured_logging = true\n"
        )
        .unwrap();

        let config = RuntimeConfig::from_file(file.path()).unwrap();
        assert_eq!(config.logging.min_log_level, LogLevel::Debug);
        assert!(config.logging.use_structured_logging);
        // Omitted sections fall back to defaults
        assert!(!config.lexical.log_line_statistics);
    }

    #[test]
    fn test_from_missing_file() {
        let result = RuntimeConfig::from_file(Path::new("no_such_config.toml"));
        assert_matches!(result, Err(ConfigError::Io { .. }));
    }

    #[test]
    fn test_from_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not = [valid").unwrap();

        let result = RuntimeConfig::from_file(file.path());
        assert_matches!(result, Err(ConfigError::Parse { .. }));
    }
}
