//! Global logging module for the micro-text tokenizer
//!
//! Provides thread-safe global logging with a clean macro interface. Nothing is
//! emitted until a logger is installed, so library users who never initialise
//! logging pay only for an atomic load per call site.

pub mod codes;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging from the runtime preferences
pub fn init_global_logging() -> Result<(), String> {
    config::validate_config().map_err(|e| format!("Configuration validation failed: {}", e))?;

    for code in [
        codes::usage::NOT_TOKENIZED,
        codes::usage::INDEX_OUT_OF_RANGE,
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
    ] {
        if codes::get_description(code.as_str()) == "Unknown error" {
            return Err(format!("Missing metadata for code: {}", code));
        }
    }

    let logging_service = Arc::new(service::create_configured_service());
    GLOBAL_LOGGER
        .set(logging_service.clone())
        .map_err(|_| "Global logger already initialized")?;

    logging_service.log_event(LogEvent::success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    ));

    Ok(())
}

/// Initialize with custom service (primarily for testing)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())
}

pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

/// Safe access to global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

/// Log error with context (used by log_error! macro)
pub fn log_error_with_context(
    code: Code,
    message: &str,
    span: Option<crate::utils::Span>,
    context: Vec<(&str, &str)>,
) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };

    let mut event = LogEvent::error(code, message);
    if let Some(s) = span {
        event = event.with_span(s);
    }
    for (key, value) in context {
        event = event.with_context(key, value);
    }
    logger.log_event(event);
}

/// Log success with context (used by log_success! macro)
pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    if let Some(logger) = try_get_global_logger() {
        let event = context
            .into_iter()
            .fold(LogEvent::success(code, message), |event, (key, value)| {
                event.with_context(key, value)
            });
        logger.log_event(event);
    }
}

/// Log info with context (used by log_info! macro)
pub fn log_info_with_context(message: &str, context: Vec<(&str, &str)>) {
    if let Some(logger) = try_get_global_logger() {
        let event = context
            .into_iter()
            .fold(LogEvent::info(message), |event, (key, value)| {
                event.with_context(key, value)
            });
        logger.log_event(event);
    }
}

// ============================================================================
// SAFE FALLBACK LOGGING
// ============================================================================

/// Error logging that falls back to stderr when no logger is installed
pub fn safe_log_error(code: Code, message: &str) {
    if let Some(logger) = try_get_global_logger() {
        logger.log_event(LogEvent::error(code, message));
    } else {
        eprintln!("[ERROR] FALLBACK: [{}] {}", code.as_str(), message);
    }
}

/// Diagnostics string printed by `microtext --diagnostics`
pub fn get_system_diagnostics() -> String {
    format!(
        "=== Logging System Diagnostics ===\nInitialized: {}\n{}\n{}",
        is_initialized(),
        crate::config::build_info::source_info(),
        config::get_config_summary()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macros_are_silent_without_logger() {
        // Whether or not another test installed a logger, these must not panic
        crate::log_error!(codes::system::INTERNAL_ERROR, "error", "k" => 1);
        crate::log_success!(codes::success::TOKENIZATION_COMPLETED, "done", "tokens" => 3);
        crate::log_info!("info", "k" => "v");
        crate::log_warning!(code = codes::input::LONG_INPUT, "long", "chars" => 10);
        crate::log_warning!("plain");
        crate::log_debug!("debug", "k" => 'x');
    }

    #[test]
    fn test_safe_logging() {
        safe_log_error(codes::system::INTERNAL_ERROR, "Test error");
    }

    #[test]
    fn test_diagnostics() {
        let diagnostics = get_system_diagnostics();
        assert!(diagnostics.contains("Logging System Diagnostics"));
        assert!(diagnostics.contains("Initialized:"));
    }
}
