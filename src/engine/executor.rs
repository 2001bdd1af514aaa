#![forbid(unsafe_code)]

//! Parallel execution engine for checking many files
//!
//! This module provides the ExecutionEngine, which gives every file its own
//! FileCheck run and processes files in parallel using rayon.

use crate::config::StyleConfig;
use crate::engine::file_check::{FileCheck, FileReport};
use crate::engine::file_walker::FileEntry;
use crate::error::RuleError;
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;

/// A file whose run was aborted by a rule error
#[derive(Debug, Clone, PartialEq)]
pub struct FileFailure {
    pub file: PathBuf,
    pub error: RuleError,
}

/// Result of checking all files
#[derive(Debug, Default)]
pub struct ExecutionResult {
    /// One report per completed file, in input order
    pub reports: Vec<FileReport>,
    /// Files whose run was aborted
    pub failures: Vec<FileFailure>,
    /// Files that were read and checked, whether or not the run completed
    pub files_checked: usize,
    /// Files that could not be read
    pub files_skipped: usize,
}

impl ExecutionResult {
    /// Total number of problems across all reports
    pub fn total_problems(&self) -> usize {
        self.reports.iter().map(|report| report.problems.len()).sum()
    }

    /// True when no problems were found and no run failed
    pub fn passed(&self) -> bool {
        self.failures.is_empty() && self.total_problems() == 0
    }
}

enum FileOutcome {
    Report(FileReport),
    Failure(FileFailure),
    Skipped,
}

/// Execution engine that coordinates parallel file checks
#[derive(Debug, Clone)]
pub struct ExecutionEngine {
    style: StyleConfig,
}

impl ExecutionEngine {
    /// Creates a new ExecutionEngine for the given style
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidConfig` if the style cannot build its rules,
    /// so configuration mistakes surface before any file is read.
    pub fn new(style: StyleConfig) -> Result<Self, RuleError> {
        FileCheck::new(&style)?;
        Ok(Self { style })
    }

    /// Check every file
    ///
    /// Files are processed in parallel, but reports keep the input order.
    pub fn execute(&self, files: Vec<FileEntry>) -> ExecutionResult {
        let outcomes: Vec<FileOutcome> = files
            .par_iter()
            .map(|file| self.execute_file(file))
            .collect();

        let mut result = ExecutionResult::default();

        for outcome in outcomes {
            match outcome {
                FileOutcome::Report(report) => result.reports.push(report),
                FileOutcome::Failure(failure) => result.failures.push(failure),
                FileOutcome::Skipped => result.files_skipped += 1,
            }
        }
        result.files_checked = result.reports.len() + result.failures.len();

        result
    }

    /// Check one file with a fresh set of rules
    fn execute_file(&self, file: &FileEntry) -> FileOutcome {
        // Read file content - if we can't read it, log warning and skip
        let content = match fs::read_to_string(&file.path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!(
                    "Warning: Failed to read file {}: {}",
                    file.path.display(),
                    e
                );
                return FileOutcome::Skipped;
            }
        };

        let outcome = FileCheck::new(&self.style).and_then(|check| check.run(&file.path, &content));

        match outcome {
            Ok(report) => FileOutcome::Report(report),
            Err(error) => FileOutcome::Failure(FileFailure {
                file: file.path.clone(),
                error,
            }),
        }
    }
}
