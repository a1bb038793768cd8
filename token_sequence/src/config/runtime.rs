// RUNTIME PREFERENCES (User Experience)

use crate::logging::LogLevel;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Errors raised while loading runtime preferences from TOML
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalPreferences {
    /// Whether to collect per-category token metrics
    pub collect_detailed_metrics: bool,

    /// Whether to show position information in error messages
    pub include_position_in_errors: bool,

    /// Whether to log a token statistics summary after each run
    pub log_token_statistics: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            collect_detailed_metrics: env::var(env_vars::LEXICAL_DETAILED_METRICS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            include_position_in_errors: env::var(env_vars::LEXICAL_INCLUDE_POSITIONS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            log_token_statistics: env::var(env_vars::LEXICAL_LOG_TOKEN_STATS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging
    pub use_structured_logging: bool,

    /// Whether to enable console output
    pub enable_console_logging: bool,

    /// Minimum level that reaches a logger
    pub min_log_level: LogLevel,

    /// Whether failed significant-token searches are logged
    pub log_failed_searches: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var(env_vars::LOGGING_USE_STRUCTURED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var(env_vars::LOGGING_ENABLE_CONSOLE)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
            log_failed_searches: env::var(env_vars::LOGGING_LOG_FAILED_SEARCHES)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

/// Parse log level from string (used for environment variables)
pub(crate) fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub lexical: LexicalPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Parse preferences from TOML text; absent keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load preferences from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // Lexical
    pub const LEXICAL_DETAILED_METRICS: &str = "TOKSEQ_LEXICAL_DETAILED_METRICS";
    pub const LEXICAL_INCLUDE_POSITIONS: &str = "TOKSEQ_LEXICAL_INCLUDE_POSITIONS";
    pub const LEXICAL_LOG_TOKEN_STATS: &str = "TOKSEQ_LEXICAL_LOG_TOKEN_STATS";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "TOKSEQ_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "TOKSEQ_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "TOKSEQ_LOGGING_MIN_LEVEL";
    pub const LOGGING_LOG_FAILED_SEARCHES: &str = "TOKSEQ_LOGGING_LOG_FAILED_SEARCHES";
}
