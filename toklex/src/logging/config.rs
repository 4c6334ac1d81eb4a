//! Configuration access for the logging subsystem
//!
//! Resource boundaries come from compile-time constants; user-visible
//! behavior (level, output format) comes from runtime preferences.

use crate::config::compile_time::logging::MAX_LOG_MESSAGE_LENGTH;
use crate::config::runtime::LoggingPreferences;
use std::sync::OnceLock;

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

/// Install runtime preferences; callable once, before logging starts
pub fn init_runtime_preferences(preferences: LoggingPreferences) -> Result<(), String> {
    RUNTIME_PREFERENCES
        .set(preferences)
        .map_err(|_| "Runtime preferences already initialized".to_string())
}

fn get_runtime_preferences() -> LoggingPreferences {
    RUNTIME_PREFERENCES.get().cloned().unwrap_or_default()
}

/// Minimum log level (user preference)
pub fn get_min_log_level() -> crate::logging::events::LogLevel {
    get_runtime_preferences().min_log_level.to_events_log_level()
}

/// Whether to emit JSON instead of plain text (user preference)
pub fn use_structured_logging() -> bool {
    get_runtime_preferences().use_structured_logging
}

/// Validate compile-time logging bounds
pub fn validate_config() -> Result<(), String> {
    if MAX_LOG_MESSAGE_LENGTH < 80 {
        return Err(format!(
            "Max log message length too small: {}",
            MAX_LOG_MESSAGE_LENGTH
        ));
    }
    if MAX_LOG_MESSAGE_LENGTH > 1_000_000 {
        return Err(format!(
            "Max log message length too large: {}",
            MAX_LOG_MESSAGE_LENGTH
        ));
    }
    Ok(())
}
