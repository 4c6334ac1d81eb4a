//! Configuration: compile-time constants and runtime preferences
//!
//! Constants are security/resource boundaries fixed at build time; runtime
//! preferences only affect user-visible behavior (logging detail, output
//! formatting) and can be set via environment variables or a TOML file.

pub mod constants;
pub mod runtime;

pub use constants::compile_time;
pub use runtime::{
    FileProcessorPreferences, LexicalPreferences, LoggingPreferences, RuntimeConfig,
};
