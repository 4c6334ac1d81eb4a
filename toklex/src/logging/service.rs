//! Logging service: level filtering in front of an output sink

use super::config;
use super::events::{LogEvent, LogLevel};
use std::sync::Arc;

/// Output sink for log events
pub trait Logger: Send + Sync {
    fn log(&self, event: &LogEvent);
}

/// Level-filtering front end over a logger
pub struct LoggingService {
    logger: Arc<dyn Logger>,
    min_level: LogLevel,
}

impl LoggingService {
    pub fn new(logger: Arc<dyn Logger>, min_level: LogLevel) -> Self {
        Self { logger, min_level }
    }

    /// Build the service the runtime preferences ask for: plain console
    /// output, or JSON when structured logging is enabled
    pub fn with_config() -> Self {
        let min_level = config::get_min_log_level();
        let logger: Arc<dyn Logger> = if config::use_structured_logging() {
            Arc::new(StructuredLogger)
        } else {
            Arc::new(ConsoleLogger)
        };
        Self::new(logger, min_level)
    }

    pub fn should_log(&self, level: LogLevel) -> bool {
        level <= self.min_level
    }

    pub fn log_event(&self, event: LogEvent) {
        if self.should_log(event.level) {
            self.logger.log(&event);
        }
    }
}

/// Plain-text logger: errors to stderr, everything else to stdout
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, event: &LogEvent) {
        if event.is_error() {
            eprintln!("{}", event.format());
        } else {
            println!("{}", event.format());
        }
    }
}

/// JSON logger for tooling integration, with plain-text fallback
pub struct StructuredLogger;

impl Logger for StructuredLogger {
    fn log(&self, event: &LogEvent) {
        let line = event
            .format_json()
            .unwrap_or_else(|_| event.format());
        if event.is_error() {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

/// Create logging service based on current configuration
pub fn create_configured_service() -> LoggingService {
    LoggingService::with_config()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;
    use std::sync::Mutex;

    /// Test sink capturing every event it receives
    struct CapturingLogger {
        events: Mutex<Vec<LogEvent>>,
    }

    impl CapturingLogger {
        fn new() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
            }
        }

        fn codes(&self) -> Vec<String> {
            self.events
                .lock()
                .unwrap()
                .iter()
                .map(|e| e.code.as_str().to_string())
                .collect()
        }
    }

    impl Logger for CapturingLogger {
        fn log(&self, event: &LogEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn test_events_reach_the_sink() {
        let sink = Arc::new(CapturingLogger::new());
        let service = LoggingService::new(sink.clone(), LogLevel::Debug);

        service.log_event(LogEvent::error(
            codes::file_processing::PERMISSION_DENIED,
            "denied",
        ));
        service.log_event(LogEvent::success(
            codes::success::FILE_PROCESSING_SUCCESS,
            "done",
        ));

        assert_eq!(sink.codes(), vec!["E009", "I006"]);
    }

    #[test]
    fn test_min_level_filters() {
        let sink = Arc::new(CapturingLogger::new());
        let service = LoggingService::new(sink.clone(), LogLevel::Error);

        service.log_event(LogEvent::debug("dropped"));
        service.log_event(LogEvent::info("dropped"));
        service.log_event(LogEvent::warning("dropped"));
        service.log_event(LogEvent::error(codes::system::INTERNAL_ERROR, "kept"));

        assert_eq!(sink.codes(), vec!["ERR001"]);
    }

    #[test]
    fn test_should_log_ordering() {
        let sink = Arc::new(CapturingLogger::new());
        let service = LoggingService::new(sink, LogLevel::Info);

        assert!(service.should_log(LogLevel::Error));
        assert!(service.should_log(LogLevel::Warning));
        assert!(service.should_log(LogLevel::Info));
        assert!(!service.should_log(LogLevel::Debug));
    }

    #[test]
    fn test_console_logger_does_not_panic() {
        ConsoleLogger.log(&LogEvent::info("console message"));
        ConsoleLogger.log(&LogEvent::error(codes::system::INTERNAL_ERROR, "oops"));
    }

    #[test]
    fn test_structured_logger_does_not_panic() {
        StructuredLogger.log(
            &LogEvent::error(codes::file_processing::FILE_NOT_FOUND, "missing")
                .with_context("file", "test.src"),
        );
    }
}
