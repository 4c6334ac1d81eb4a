pub mod compile_time {
    pub mod file_processing {
        /// Maximum file size allowed for processing (10MB)
        /// SECURITY: Prevents DoS via oversized inputs
        pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

        /// Threshold for considering a file "large" (1MB)
        /// PERFORMANCE: Only affects logging, never processing semantics
        pub const LARGE_FILE_THRESHOLD: u64 = 1024 * 1024;

        /// Maximum line count accepted for analysis
        /// SECURITY: Prevents algorithmic complexity attacks
        pub const MAX_LINE_COUNT_FOR_ANALYSIS: usize = 100_000;
    }

    pub mod lexical {
        /// Initial token vector capacity per line
        /// RESOURCE: Sizing hint only; lines may produce more tokens
        pub const TOKENS_PER_LINE_HINT: usize = 100;
    }

    pub mod logging {
        /// Maximum log message length; longer messages are truncated
        /// RESOURCE: Prevents memory attacks via huge messages
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 10_000;
    }
}
