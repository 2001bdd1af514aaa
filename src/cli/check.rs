//! Check command implementation
//!
//! This module implements the `tailor check` command, which:
//! - Loads configuration from tailor.toml (or `--config`)
//! - Discovers files to check
//! - Runs every enabled check over each file in parallel
//! - Formats output (human or JSONL)
//! - Returns appropriate exit code

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::cli::common::{
    EXIT_ERROR, EXIT_PARSE_ERROR, EXIT_PROBLEMS, EXIT_SUCCESS, discover_files, load_config,
};
use crate::config::{self, ColorOption};
use crate::engine::{ExecutionEngine, ExecutionResult};
use crate::engine::file_walker::FileWalkerError;
use crate::error::{ConfigError, RuleError};
use crate::output::{HumanFormatter, JsonlFormatter};
use std::path::PathBuf;

/// Error type specific to check command
#[derive(Debug, thiserror::Error)]
pub(crate) enum CheckError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    #[error("File walker error: {0}")]
    FileWalker(#[from] FileWalkerError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Options for a check run, as given on the command line
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub paths: Vec<String>,
    pub format: Option<OutputFormat>,
    pub config: Option<PathBuf>,
    pub color: Option<ColorChoice>,
    pub verbose: bool,
}

/// Run the check command
///
/// # Returns
///
/// Exit code:
/// - 0: No problems found
/// - 1: Problems found
/// - 2: Error (configuration/I/O error, or a file's run was aborted)
/// - 3: Parse error (invalid TOML configuration)
pub fn run_check(options: &CheckOptions) -> i32 {
    match run_check_inner(options) {
        Ok(result) => exit_code(&result),
        Err(e) => {
            eprintln!("Error: {}", e);
            match e {
                CheckError::Config(ConfigError::Parse(_)) => EXIT_PARSE_ERROR,
                _ => EXIT_ERROR,
            }
        }
    }
}

/// Exit code for a finished run; aborted files outrank problems
pub(crate) fn exit_code(result: &ExecutionResult) -> i32 {
    if !result.failures.is_empty() {
        EXIT_ERROR
    } else if result.total_problems() > 0 {
        EXIT_PROBLEMS
    } else {
        EXIT_SUCCESS
    }
}

fn run_check_inner(options: &CheckOptions) -> Result<ExecutionResult, CheckError> {
    let config = load_config(options.config.as_deref())?;

    let format = options
        .format
        .map(config::OutputFormat::from)
        .unwrap_or(config.output.format);
    let color = options
        .color
        .map(ColorOption::from)
        .unwrap_or(config.output.color);

    // Rule configuration problems surface before any file is read
    let engine = ExecutionEngine::new(config.style.clone())?;

    let files = discover_files(&options.paths, &config, options.verbose)?;

    if files.is_empty() {
        eprintln!("Warning: No files found to check.");
    }

    if format == config::OutputFormat::Human {
        eprintln!("Checking {} files...", files.len());
    }

    let result = engine.execute(files);

    match format {
        config::OutputFormat::Human => HumanFormatter::new().write_to_stderr(&result, color)?,
        config::OutputFormat::Jsonl => print!("{}", JsonlFormatter::new().format(&result)?),
    }

    Ok(result)
}
