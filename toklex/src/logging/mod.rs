//! Global logging
//!
//! One process-wide `LoggingService` behind a `OnceLock`, plus a
//! per-thread file context so every event logged while a file is being
//! processed names that file without threading it through call signatures.

pub mod codes;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, StructuredLogger};

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

thread_local! {
    static FILE_CONTEXT: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Initialize global logging system
pub fn init_global_logging() -> Result<(), String> {
    config::validate_config().map_err(|e| format!("Configuration validation failed: {}", e))?;

    let logging_service = Arc::new(service::create_configured_service());

    GLOBAL_LOGGER
        .set(logging_service.clone())
        .map_err(|_| "Global logger already initialized")?;

    // Sanity-check the code registry before anything logs through it
    for code in ["ERR001", "E005", "E011"] {
        if codes::get_description(code) == "Unknown error" {
            return Err(format!("Missing metadata for error code: {}", code));
        }
    }

    logging_service.log_event(LogEvent::success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    ));

    Ok(())
}

fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

/// Set the file context for the current thread
pub fn set_file_context(file_path: PathBuf) {
    FILE_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = Some(file_path);
    });
}

/// Clear the file context for the current thread
pub fn clear_file_context() {
    FILE_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = None;
    });
}

/// Run `f` with the file context set, clearing it afterwards
pub fn with_file_context<F, R>(file_path: PathBuf, f: F) -> R
where
    F: FnOnce() -> R,
{
    set_file_context(file_path);
    let result = f();
    clear_file_context();
    result
}

/// Get the current thread's file context
pub fn get_current_file_context() -> Option<PathBuf> {
    FILE_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// Dispatch an event to the global service, tagging it with the current
/// file context. Drops the event silently when logging is uninitialized
/// (library consumers need not set up the global service).
pub fn emit(event: LogEvent) {
    let event = match get_current_file_context() {
        Some(path) => event.with_context("file", &path.display().to_string()),
        None => event,
    };
    if let Some(logger) = try_get_global_logger() {
        logger.log_event(event);
    }
}
