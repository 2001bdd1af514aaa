#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line in a deterministic order:
//! 1. All problem records (files in input order, problems in report order)
//! 2. One error record per aborted file
//! 3. One status record
//!
//! Paths that are not valid UTF-8 are written lossily so their records are
//! never dropped.

use crate::engine::ExecutionResult;
use crate::rules::{Problem, ProblemDetail};
use crate::types::{Position, ProblemKind};
use serde::Serialize;
use std::borrow::Cow;
use std::path::Path;

/// JSONL output formatter
///
/// Formats execution results as JSON Lines (one JSON object per line).
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the execution result as JSONL
    ///
    /// # Errors
    ///
    /// Returns the serializer error if any record cannot be encoded.
    pub fn format(&self, result: &ExecutionResult) -> Result<String, serde_json::Error> {
        let mut output = String::new();

        for report in &result.reports {
            for problem in &report.problems {
                push_record(&mut output, &ProblemRecord::new(&report.file, problem))?;
            }
        }

        for failure in &result.failures {
            push_record(
                &mut output,
                &ErrorRecord {
                    record_type: "error",
                    file: failure.file.to_string_lossy(),
                    message: failure.error.to_string(),
                },
            )?;
        }

        push_record(
            &mut output,
            &StatusRecord {
                record_type: "status",
                passed: result.passed(),
                files_checked: result.files_checked as u64,
                files_with_problems: result.reports.iter().filter(|r| !r.is_clean()).count()
                    as u64,
                files_failed: result.failures.len() as u64,
                total_problems: result.total_problems() as u64,
            },
        )?;

        Ok(output)
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_record<T: Serialize>(output: &mut String, record: &T) -> Result<(), serde_json::Error> {
    output.push_str(&serde_json::to_string(record)?);
    output.push('\n');
    Ok(())
}

/// Problem record for JSONL output
#[derive(Debug, Serialize)]
struct ProblemRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    file: Cow<'a, str>,
    kind: ProblemKind,
    line: Position,
    column: Position,
    message: String,
    detail: &'a ProblemDetail,
}

impl<'a> ProblemRecord<'a> {
    fn new(file: &'a Path, problem: &'a Problem) -> Self {
        Self {
            record_type: "problem",
            file: file.to_string_lossy(),
            kind: problem.kind(),
            line: problem.line(),
            column: problem.column(),
            message: problem.message(),
            detail: problem.detail(),
        }
    }
}

/// Error record for JSONL output
#[derive(Debug, Serialize)]
struct ErrorRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    file: Cow<'a, str>,
    message: String,
}

/// Status record for JSONL output
#[derive(Debug, Serialize)]
struct StatusRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    passed: bool,
    files_checked: u64,
    files_with_problems: u64,
    files_failed: u64,
    total_problems: u64,
}
