//! List command implementation
//!
//! This module implements the `tailor list` command, which shows every
//! check, whether the active configuration enables it, and its setting.

use crate::cli::args::OutputFormat;
use crate::cli::common::{EXIT_ERROR, EXIT_PARSE_ERROR, EXIT_SUCCESS, load_config};
use crate::error::ConfigError;
use crate::output::{CheckListHumanFormatter, CheckListJsonlFormatter, check_entries};
use std::path::Path;

/// Run the list command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Error
/// - 3: Parse error (invalid TOML configuration)
pub fn run_list(format: OutputFormat, config: Option<&Path>) -> i32 {
    match render_list(format, config) {
        Ok(output) => {
            print!("{}", output);
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: Configuration error: {}", e);
            match e {
                ConfigError::Parse(_) => EXIT_PARSE_ERROR,
                _ => EXIT_ERROR,
            }
        }
    }
}

fn render_list(format: OutputFormat, config: Option<&Path>) -> Result<String, ConfigError> {
    let config = load_config(config)?;
    let entries = check_entries(&config.style);

    Ok(match format {
        OutputFormat::Human => CheckListHumanFormatter::new().format(&entries),
        OutputFormat::Jsonl => CheckListJsonlFormatter::new().format(&entries),
    })
}
