//! Error types for Tailor
//!
//! Style problems are never errors. The types here cover configuration
//! mistakes, rule contract violations, and I/O failures.

use std::path::PathBuf;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML syntax or shape
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration parsed but failed validation
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Rule-related errors
///
/// Both variants indicate a bug in how rules are built or driven, not a
/// property of the checked source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// An event reached a rule with a payload that does not fit its kind
    #[error("Contract violation in rule '{rule}': {message}")]
    ContractViolation { rule: String, message: String },

    /// A rule was constructed with an unusable configuration value
    #[error("Invalid configuration for rule '{rule}': {message}")]
    InvalidConfig { rule: String, message: String },
}

/// Top-level error type for Tailor
#[derive(Debug, thiserror::Error)]
pub enum TailorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// A file check was aborted
    #[error("Check aborted for {file}: {source}")]
    Aborted { file: PathBuf, source: RuleError },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
