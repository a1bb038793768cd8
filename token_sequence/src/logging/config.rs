//! Configuration module for logging
//!
//! Buffer sizes are compile-time constants; levels and output format come from
//! runtime preferences, which may be installed once before logging starts.

use crate::config::compile_time::logging::LOG_BUFFER_SIZE;
use crate::config::runtime::LoggingPreferences;
use crate::logging::events::LogLevel;
use std::sync::OnceLock;

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

/// Initialize runtime preferences
pub fn init_runtime_preferences(preferences: LoggingPreferences) -> Result<(), String> {
    RUNTIME_PREFERENCES
        .set(preferences)
        .map_err(|_| "Runtime preferences already initialized".to_string())
}

/// Get runtime preferences (with fallback to defaults)
fn get_runtime_preferences() -> &'static LoggingPreferences {
    RUNTIME_PREFERENCES.get_or_init(LoggingPreferences::default)
}

/// Get minimum log level
pub fn get_min_log_level() -> LogLevel {
    get_runtime_preferences().min_log_level
}

/// Check if structured logging is enabled
pub fn use_structured_logging() -> bool {
    get_runtime_preferences().use_structured_logging
}

/// Check if console logging is enabled
pub fn use_console_logging() -> bool {
    get_runtime_preferences().enable_console_logging
}

/// Check if failed significant-token searches should be logged
pub fn log_failed_searches() -> bool {
    get_runtime_preferences().log_failed_searches
}

/// Get event buffer size (compile-time constant)
pub fn get_error_buffer_size() -> usize {
    LOG_BUFFER_SIZE
}

/// Human-readable configuration summary
pub fn get_config_summary() -> String {
    let preferences = get_runtime_preferences();
    format!(
        "=== Logging Configuration ===\n\
         Min level: {}\n\
         Structured: {}\n\
         Console: {}\n\
         Buffer size: {}\n\
         Source: {}\n",
        preferences.min_log_level.as_str(),
        preferences.use_structured_logging,
        preferences.enable_console_logging,
        LOG_BUFFER_SIZE,
        crate::config::build_info::source_info()
    )
}
