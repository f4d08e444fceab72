//! Structured logging setup for docsync
//!
//! Initialization and configuration for structured logging using the
//! `tracing` ecosystem: console output by default, optional JSON output for
//! production, filtering via `RUST_LOG`, and runtime configuration through
//! `DOCSYNC_LOG_LEVEL` / `DOCSYNC_LOG_JSON`.
//!
//! # Example
//!
//! ```no_run
//! use docsync::util::logging;
//!
//! logging::init_from_env();
//!
//! use tracing::{debug, info};
//! info!("client starting");
//! debug!(key = "my-app", "activating");
//! ```

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Use JSON output format (for structured logging in production)
    pub use_json: bool,

    /// Include the module target (e.g., docsync::client) in logs
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,

    /// Include thread ID and name in logs
    pub include_thread_ids: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
            include_location: false,
            include_thread_ids: false,
        }
    }
}

impl LoggingConfig {
    /// Creates a logging configuration with the specified level
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Creates a logging configuration for production use
    ///
    /// This enables JSON output and includes more metadata for structured
    /// logging.
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            use_json: true,
            include_target: true,
            include_location: true,
            include_thread_ids: true,
        }
    }

    /// Creates a logging configuration for development use
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            use_json: false,
            include_target: true,
            include_location: false,
            include_thread_ids: false,
        }
    }
}

/// Parses a log level from a string, defaulting to INFO on invalid input.
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

/// Initializes the logging system with the provided configuration
///
/// Can only be called once - subsequent calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env()
            .add_directive(format!("docsync={}", config.level).parse().unwrap());

        // If RUST_LOG is not set, quiet the HTTP/2 plumbing
        if env::var("RUST_LOG").is_err() {
            filter = filter
                .add_directive("h2=warn".parse().unwrap())
                .add_directive("hyper=warn".parse().unwrap());
        }

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_thread_ids(config.include_thread_ids)
                        .with_thread_names(config.include_thread_ids),
                )
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_thread_ids(config.include_thread_ids)
                        .with_thread_names(config.include_thread_ids),
                )
                .init();
        }
    });
}

/// Initializes logging with default configuration
pub fn init_default() {
    init_logging(LoggingConfig::default());
}

/// Initializes logging from environment variables
///
/// Reads `DOCSYNC_LOG_LEVEL` (trace, debug, info, warn, error) and
/// `DOCSYNC_LOG_JSON` (true/false); `RUST_LOG` is respected for filtering.
pub fn init_from_env() {
    let level_str = env::var("DOCSYNC_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let level = parse_level(&level_str);

    let use_json = env::var("DOCSYNC_LOG_JSON")
        .ok()
        .and_then(|v| v.parse::<bool>().ok())
        .unwrap_or(false);

    let config = LoggingConfig {
        level,
        use_json,
        ..Default::default()
    };

    init_logging(config);
}

/// Initializes logging with a specific log level from string
pub fn with_level(level_str: &str) {
    let level = parse_level(level_str);
    init_logging(LoggingConfig::with_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("trace"), Level::TRACE);
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("info"), Level::INFO);
        assert_eq!(parse_level("warn"), Level::WARN);
        assert_eq!(parse_level("error"), Level::ERROR);
    }

    #[test]
    fn test_parse_level_case_insensitive() {
        assert_eq!(parse_level("TRACE"), Level::TRACE);
        assert_eq!(parse_level("Debug"), Level::DEBUG);
        assert_eq!(parse_level("INFO"), Level::INFO);
    }

    #[test]
    fn test_parse_level_invalid() {
        // Invalid levels default to INFO
        assert_eq!(parse_level("invalid"), Level::INFO);
        assert_eq!(parse_level(""), Level::INFO);
    }

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert!(!config.use_json);
        assert!(config.include_target);
        assert!(!config.include_location);
        assert!(!config.include_thread_ids);
    }

    #[test]
    fn test_production_config() {
        let config = LoggingConfig::production();
        assert_eq!(config.level, Level::INFO);
        assert!(config.use_json);
        assert!(config.include_location);
        assert!(config.include_thread_ids);
    }

    #[test]
    fn test_development_config() {
        let config = LoggingConfig::development();
        assert_eq!(config.level, Level::DEBUG);
        assert!(!config.use_json);
    }
}
