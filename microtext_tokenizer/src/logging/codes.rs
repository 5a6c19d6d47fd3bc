//! Consolidated log codes and classification system
//!
//! Single source of truth for every code the tokenizer emits, together with
//! the metadata used to classify it.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for error, warning and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
    pub const CONFIGURATION_ERROR: Code = Code::new("ERR003");
}

/// API usage error codes
pub mod usage {
    use super::Code;

    pub const NOT_TOKENIZED: Code = Code::new("E010");
    pub const INDEX_OUT_OF_RANGE: Code = Code::new("E011");
    pub const TOKENIZER_REUSED: Code = Code::new("W010");
}

/// Input characteristic codes
pub mod input {
    use super::Code;

    pub const LONG_INPUT: Code = Code::new("W020");
    pub const EMPTY_INPUT: Code = Code::new("W021");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const TOKENIZATION_COMPLETED: Code = Code::new("I010");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

/// Metadata registry using OnceLock for thread safety
static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let entries = [
            // System
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                "Internal tokenizer error",
                "Report the input that triggered this error",
            ),
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                "Logging system initialization failure",
                "Check logging configuration and initialize only once",
            ),
            ErrorMetadata::new(
                "ERR003",
                "System",
                Severity::High,
                true,
                "Runtime configuration could not be loaded",
                "Check the configuration file path and TOML syntax",
            ),
            // Usage
            ErrorMetadata::new(
                "E010",
                "Usage",
                Severity::Medium,
                true,
                "Token data requested before tokenization",
                "Call tokenize() before reading tokens",
            ),
            ErrorMetadata::new(
                "E011",
                "Usage",
                Severity::Medium,
                true,
                "Token index out of range",
                "Use an index smaller than the token count",
            ),
            ErrorMetadata::new(
                "W010",
                "Usage",
                Severity::Low,
                true,
                "Tokenizer invoked more than once",
                "Reuse the first result or create a new tokenizer",
            ),
            // Input
            ErrorMetadata::new(
                "W020",
                "Input",
                Severity::Low,
                true,
                "Input is unusually long for micro-text",
                "Consider splitting the input into messages",
            ),
            ErrorMetadata::new(
                "W021",
                "Input",
                Severity::Low,
                true,
                "Input text is absent or empty",
                "No action required",
            ),
            // Success
            ErrorMetadata::new(
                "I001",
                "System",
                Severity::Low,
                true,
                "Logging system initialized",
                "No action required",
            ),
            ErrorMetadata::new(
                "I010",
                "Tokenization",
                Severity::Low,
                true,
                "Tokenization completed successfully",
                "No action required",
            ),
        ];

        entries
            .into_iter()
            .map(|metadata| (metadata.code, metadata))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get metadata for a specific code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get severity from code
pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if the condition is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Get human-readable description for code
pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for code
pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get category from code
pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
