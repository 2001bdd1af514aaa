#![forbid(unsafe_code)]

//! Tailor: a style checker for source files
//!
//! Tailor feeds a file's event stream to pluggable rules and runs a fixed set
//! of spacing checks over each raw line, collecting every style problem found.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod rules;
pub mod spacing;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, RuleError, TailorError};

// Re-export core domain types for convenient access
pub use types::{EventKind, GlobPattern, Position, ProblemKind};
