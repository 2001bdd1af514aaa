//! Common helper functions shared across CLI commands

use crate::config::Config;
use crate::engine::file_walker::{FileEntry, FileWalker, FileWalkerError, WalkResult};
use crate::error::ConfigError;
use std::path::Path;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_PROBLEMS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Load configuration
///
/// An explicit path must exist. Without one, `tailor.toml` in the current
/// directory is used when present and defaults otherwise.
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file cannot be read, `ConfigError::Parse`
/// if it is not valid TOML, and `ConfigError::Validation` for bad values.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => Config::load(path),
        None => Config::load_or_default("."),
    }
}

/// Discover files to check using FileWalker
///
/// Paths are walked in the order given; each walk is sorted by file name.
///
/// # Errors
///
/// Returns `FileWalkerError` if a pattern is invalid or the walk fails.
pub(crate) fn discover_files(
    paths: &[String],
    config: &Config,
    verbose: bool,
) -> Result<Vec<FileEntry>, FileWalkerError> {
    let mut all_files = Vec::new();

    for path_str in paths {
        let path = Path::new(path_str);
        let walker = FileWalker::with_verbose(
            path,
            &config.tailor.include,
            &config.tailor.exclude,
            verbose,
        )?;

        for result in walker.walk_with_skip_info() {
            match result? {
                WalkResult::File(file) => all_files.push(file),
                WalkResult::Skipped { path, reason } => {
                    eprintln!("Skipping {}: {:?}", path.display(), reason);
                }
            }
        }
    }

    Ok(all_files)
}
