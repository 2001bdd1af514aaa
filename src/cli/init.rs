//! Initialize a tailor project
//!
//! Writes a commented `tailor.toml` holding the default settings.

use crate::config::CONFIG_FILE;
use std::fs;
use std::path::Path;

/// Default content for tailor.toml
const DEFAULT_TAILOR_TOML: &str = r#"[tailor]
# File patterns to include (defaults to all)
include = ["**/*"]

# File patterns to exclude
# exclude = ["**/vendor/**"]

[style]
# Newlines expected at the end of every file; false turns the check off
trailing_newlines = 1

# Set any of these to false to turn the check off
trailing_whitespace = true
more_than_one_space_after_comma = true
no_space_after_comma = true
space_before_comma = true
space_after_open_parenthesis = true
space_after_open_bracket = true
space_before_closed_parenthesis = true
space_before_closed_bracket = true

[output]
format = "human"
color = "auto"
"#;

/// Error type for init command
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// What `run_init` did with the configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    Skipped,
    Overwritten,
}

/// Run the init command in the current directory
pub fn run_init(force: bool) -> Result<InitOutcome, InitError> {
    init_in(Path::new("."), force)
}

/// Writes the default configuration into `dir`
///
/// An existing file is left alone unless `force` is set.
pub fn init_in(dir: &Path, force: bool) -> Result<InitOutcome, InitError> {
    let path = dir.join(CONFIG_FILE);

    if path.exists() {
        if !force {
            return Ok(InitOutcome::Skipped);
        }
        fs::write(&path, DEFAULT_TAILOR_TOML)?;
        return Ok(InitOutcome::Overwritten);
    }

    fs::write(&path, DEFAULT_TAILOR_TOML)?;
    Ok(InitOutcome::Created)
}
