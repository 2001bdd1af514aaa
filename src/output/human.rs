#![forbid(unsafe_code)]

//! Human-readable output formatter
//!
//! Prints one line per problem, then a per-kind summary and the final
//! pass/fail status. Colors are applied through `termcolor`, so the same
//! code serves terminals, pipes and in-memory buffers.

use crate::config::ColorOption;
use crate::engine::ExecutionResult;
use crate::types::ProblemKind;
use std::collections::BTreeMap;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Human-readable formatter
pub struct HumanFormatter;

impl HumanFormatter {
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Writes the full report to `out`
    pub fn write<W: WriteColor>(&self, out: &mut W, result: &ExecutionResult) -> io::Result<()> {
        let mut printed_problem = false;

        for report in &result.reports {
            for problem in &report.problems {
                write!(
                    out,
                    "{}:{}:{}: ",
                    report.file.display(),
                    problem.line(),
                    problem.column()
                )?;
                out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
                write!(out, "{}", problem.kind())?;
                out.reset()?;
                writeln!(out, " - {}", problem.message())?;
                printed_problem = true;
            }
        }

        for failure in &result.failures {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
            write!(out, "error")?;
            out.reset()?;
            writeln!(out, ": {}: {}", failure.file.display(), failure.error)?;
            printed_problem = true;
        }

        if printed_problem {
            writeln!(out)?;
        }

        self.write_summary(out, result)
    }

    fn write_summary<W: WriteColor>(&self, out: &mut W, result: &ExecutionResult) -> io::Result<()> {
        let mut counts: BTreeMap<ProblemKind, usize> = BTreeMap::new();
        for problem in result.reports.iter().flat_map(|report| &report.problems) {
            *counts.entry(problem.kind()).or_default() += 1;
        }

        writeln!(out, "Results:")?;
        if counts.is_empty() {
            writeln!(out, "  No problems found.")?;
        } else {
            for (kind, count) in &counts {
                writeln!(out, "  {}: {} problem(s)", kind, count)?;
            }
        }
        writeln!(out)?;

        if result.passed() {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
            write!(out, "✓ Check PASSED")?;
            out.reset()?;
            writeln!(out, ": {} file(s) checked", result.files_checked)?;
        } else {
            let files_with_problems = result.reports.iter().filter(|r| !r.is_clean()).count();
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            write!(out, "✗ Check FAILED")?;
            out.reset()?;
            write!(
                out,
                ": {} problem(s) in {} file(s)",
                result.total_problems(),
                files_with_problems
            )?;
            if !result.failures.is_empty() {
                write!(out, ", {} file(s) aborted", result.failures.len())?;
            }
            writeln!(out)?;
        }

        Ok(())
    }

    /// Writes the report to stderr
    pub fn write_to_stderr(&self, result: &ExecutionResult, color: ColorOption) -> io::Result<()> {
        let mut stream = StandardStream::stderr(color_choice(color));
        self.write(&mut stream, result)
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps the configured color option onto termcolor's choice
pub fn color_choice(color: ColorOption) -> ColorChoice {
    match color {
        ColorOption::Auto => {
            if io::IsTerminal::is_terminal(&io::stderr()) {
                ColorChoice::Auto
            } else {
                ColorChoice::Never
            }
        }
        ColorOption::Always => ColorChoice::Always,
        ColorOption::Never => ColorChoice::Never,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{FileFailure, FileReport};
    use crate::error::RuleError;
    use crate::rules::{Problem, ProblemDetail};
    use crate::types::Position;
    use std::path::PathBuf;
    use termcolor::Buffer;

    fn render(result: &ExecutionResult) -> String {
        let mut buffer = Buffer::no_color();
        HumanFormatter::new().write(&mut buffer, result).unwrap();
        String::from_utf8(buffer.into_inner()).unwrap()
    }

    #[test]
    fn test_clean_result() {
        let result = ExecutionResult {
            files_checked: 3,
            ..ExecutionResult::default()
        };
        let output = render(&result);

        assert!(output.contains("No problems found."));
        assert!(output.contains("Check PASSED: 3 file(s) checked"));
    }

    #[test]
    fn test_problem_lines() {
        let result = ExecutionResult {
            reports: vec![FileReport {
                file: PathBuf::from("lib/a.rb"),
                problems: vec![
                    Problem::new(
                        ProblemKind::SpaceAfterOpenParenthesis,
                        Position::At(2),
                        Position::At(5),
                        ProblemDetail::new()
                            .with("description", "Line has an open parenthesis with spaces after it"),
                    ),
                    Problem::at_eof(
                        ProblemKind::TrailingNewlines,
                        ProblemDetail::new()
                            .with("actual_trailing_newlines", 2)
                            .with("should_have", 1),
                    ),
                ],
            }],
            failures: vec![],
            files_checked: 1,
            files_skipped: 0,
        };
        let output = render(&result);

        assert!(output.contains(
            "lib/a.rb:2:5: space_after_open_parenthesis - Line has an open parenthesis with spaces after it"
        ));
        assert!(output.contains(
            "lib/a.rb:<EOF>:<EOF>: trailing_newlines - File has 2 trailing newline(s), but should have 1"
        ));
        assert!(output.contains("  trailing_newlines: 1 problem(s)"));
        assert!(output.contains("Check FAILED: 2 problem(s) in 1 file(s)"));
    }

    #[test]
    fn test_failure_lines() {
        let result = ExecutionResult {
            reports: vec![],
            failures: vec![FileFailure {
                file: PathBuf::from("x.rb"),
                error: RuleError::ContractViolation {
                    rule: "trailing_newlines".to_string(),
                    message: "bad payload".to_string(),
                },
            }],
            files_checked: 1,
            files_skipped: 0,
        };
        let output = render(&result);

        assert!(output.contains("error: x.rb:"));
        assert!(output.contains("1 file(s) aborted"));
    }

    #[test]
    fn test_color_choice_mapping() {
        assert_eq!(color_choice(ColorOption::Always), ColorChoice::Always);
        assert_eq!(color_choice(ColorOption::Never), ColorChoice::Never);
    }
}
