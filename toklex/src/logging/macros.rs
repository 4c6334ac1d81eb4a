//! Logging macros
//!
//! Each macro builds a `LogEvent` and hands it to `logging::emit`, which
//! attaches the per-thread file context and dispatches to the global
//! service. Context values are any `Display` type.

/// Log an error with its code: `log_error!(code, "msg", "key" => value, ...)`
#[macro_export]
macro_rules! log_error {
    ($code:expr, $message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::logging::emit(
            $crate::logging::LogEvent::error($code, $message)
                $(.with_context($key, &format!("{}", $value)))*
        )
    };
}

/// Log a success with its code: `log_success!(code, "msg", "key" => value, ...)`
#[macro_export]
macro_rules! log_success {
    ($code:expr, $message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::logging::emit(
            $crate::logging::LogEvent::success($code, $message)
                $(.with_context($key, &format!("{}", $value)))*
        )
    };
}

/// Log an informational message: `log_info!("msg", "key" => value, ...)`
#[macro_export]
macro_rules! log_info {
    ($message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::logging::emit(
            $crate::logging::LogEvent::info($message)
                $(.with_context($key, &format!("{}", $value)))*
        )
    };
}

/// Log a warning: `log_warning!("msg", "key" => value, ...)`
#[macro_export]
macro_rules! log_warning {
    ($message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::logging::emit(
            $crate::logging::LogEvent::warning($message)
                $(.with_context($key, &format!("{}", $value)))*
        )
    };
}

/// Log a debug message: `log_debug!("msg", "key" => value, ...)`
///
/// Gated on the configured level before the event is built, so context
/// formatting costs nothing when debug logging is off.
#[macro_export]
macro_rules! log_debug {
    ($message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        if $crate::logging::config::get_min_log_level() >= $crate::logging::LogLevel::Debug {
            $crate::logging::emit(
                $crate::logging::LogEvent::debug($message)
                    $(.with_context($key, &format!("{}", $value)))*
            )
        }
    };
}
