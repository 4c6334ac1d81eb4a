//! Log events
//!
//! One event per logged occurrence: a level, a code, a message, optional
//! source span, and string context pairs. Context uses a BTreeMap so
//! rendered output is deterministic.

use super::codes::{self, Code};
use crate::config::compile_time::logging::MAX_LOG_MESSAGE_LENGTH;
use crate::utils::Span;
use std::collections::BTreeMap;
use std::time::SystemTime;

/// Log severity levels, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

/// Core log event structure
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub timestamp: SystemTime,
    pub level: LogLevel,
    pub code: Code,
    pub message: String,
    pub span: Option<Span>,
    pub context: BTreeMap<String, String>,
}

impl LogEvent {
    fn at_level(level: LogLevel, code: Code, message: &str) -> Self {
        let mut message = message.to_string();
        // Resource bound, not a formatting concern
        if message.len() > MAX_LOG_MESSAGE_LENGTH {
            let mut cut = MAX_LOG_MESSAGE_LENGTH;
            while !message.is_char_boundary(cut) {
                cut -= 1;
            }
            message.truncate(cut);
        }
        Self {
            timestamp: SystemTime::now(),
            level,
            code,
            message,
            span: None,
            context: BTreeMap::new(),
        }
    }

    pub fn error(error_code: Code, message: &str) -> Self {
        Self::at_level(LogLevel::Error, error_code, message)
    }

    /// Warnings carry a generic code
    pub fn warning(message: &str) -> Self {
        Self::at_level(LogLevel::Warning, Code::new("W000"), message)
    }

    /// Plain info carries a generic code
    pub fn info(message: &str) -> Self {
        Self::at_level(LogLevel::Info, Code::new("I000"), message)
    }

    /// Success is info with a specific success code
    pub fn success(success_code: Code, message: &str) -> Self {
        Self::at_level(LogLevel::Info, success_code, message)
    }

    pub fn debug(message: &str) -> Self {
        Self::at_level(LogLevel::Debug, Code::new("D000"), message)
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_context(mut self, key: &str, value: &str) -> Self {
        self.context.insert(key.to_string(), value.to_string());
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == LogLevel::Error
    }

    /// Severity name from the code registry
    pub fn severity(&self) -> &'static str {
        codes::get_severity(self.code.as_str()).as_str()
    }

    /// Category name from the code registry
    pub fn category(&self) -> &'static str {
        codes::get_category(self.code.as_str())
    }

    /// Timestamp in RFC 3339 form
    pub fn timestamp_rfc3339(&self) -> String {
        chrono::DateTime::<chrono::Utc>::from(self.timestamp).to_rfc3339()
    }

    /// One-line plain-text rendering
    pub fn format(&self) -> String {
        let mut line = format!(
            "[{}] {} - {}",
            self.level.as_str(),
            self.code.as_str(),
            self.message
        );
        if let Some(span) = &self.span {
            line.push_str(&format!(" at {}", span.start()));
        }
        for (key, value) in &self.context {
            line.push_str(&format!(" {}={}", key, value));
        }
        line
    }

    /// JSON rendering for structured logging
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::json!({
            "timestamp": self.timestamp_rfc3339(),
            "level": self.level.as_str(),
            "code": self.code.as_str(),
            "message": self.message,
            "category": self.category(),
            "severity": self.severity(),
        });

        if let Some(span) = &self.span {
            json["span"] = serde_json::json!({
                "line": span.start().line,
                "start_column": span.start().column,
                "end_column": span.end().column,
            });
        }

        if !self.context.is_empty() {
            json["context"] = serde_json::Value::Object(
                self.context
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                    .collect(),
            );
        }

        serde_json::to_string(&json)
    }
}
