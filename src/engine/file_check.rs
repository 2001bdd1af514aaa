#![forbid(unsafe_code)]

//! A single file-check run
//!
//! A run owns a fresh rule set and line inspector, feeds them one file's
//! lines and events, and collects the resulting problems. Runs share nothing,
//! so independent runs may execute on different threads.

use crate::config::StyleConfig;
use crate::engine::{LineInspector, LineScanner};
use crate::error::{RuleError, TailorError};
use crate::rules::{Event, Problem, RuleSet};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Problems found in one file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    pub file: PathBuf,
    pub problems: Vec<Problem>,
}

impl FileReport {
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Rules and checks for one file
#[derive(Debug)]
pub struct FileCheck {
    rules: RuleSet,
    inspector: LineInspector,
}

impl FileCheck {
    /// Builds the rules and checks enabled by `style`
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidConfig` if a rule rejects its configuration.
    pub fn new(style: &StyleConfig) -> Result<Self, RuleError> {
        Ok(Self::with_parts(
            RuleSet::from_style(style)?,
            LineInspector::from_style(style),
        ))
    }

    /// Reads one file from disk and checks it under `style`
    ///
    /// # Errors
    ///
    /// Returns `TailorError::Io` if the file cannot be read, `TailorError::Rule`
    /// if the style is unusable, and `TailorError::Aborted` if a rule fails
    /// during the run.
    pub fn check_path(style: &StyleConfig, file: &Path) -> Result<FileReport, TailorError> {
        let check = Self::new(style)?;
        let content = fs::read_to_string(file)?;
        check
            .run(file, &content)
            .map_err(|source| TailorError::Aborted {
                file: file.to_path_buf(),
                source,
            })
    }

    pub fn with_parts(rules: RuleSet, inspector: LineInspector) -> Self {
        Self { rules, inspector }
    }

    /// Scans `content` and runs every check over it
    ///
    /// Line problems come first in line order, followed by each event rule's
    /// report in registration order.
    ///
    /// # Errors
    ///
    /// Returns the first rule error raised while dispatching events. The
    /// run is abandoned and no partial report is produced.
    pub fn run(self, file: &Path, content: &str) -> Result<FileReport, RuleError> {
        let scanned = LineScanner::new().scan(content);
        self.run_scanned(
            file,
            scanned.lines.iter().map(String::as_str),
            &scanned.events,
        )
    }

    /// Runs the checks over lines and events produced elsewhere
    pub fn run_scanned<'a>(
        mut self,
        file: &Path,
        lines: impl IntoIterator<Item = &'a str>,
        events: &[Event],
    ) -> Result<FileReport, RuleError> {
        let mut problems = self.inspector.inspect_lines(lines);

        for event in events {
            self.rules.dispatch(event)?;
        }

        problems.extend(self.rules.problems());

        Ok(FileReport {
            file: file.to_path_buf(),
            problems,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Payload;
    use crate::types::{EventKind, Position, ProblemKind};

    fn check(content: &str) -> FileReport {
        FileCheck::new(&StyleConfig::default())
            .unwrap()
            .run(Path::new("sample.rb"), content)
            .unwrap()
    }

    #[test]
    fn test_clean_file() {
        let report = check("def foo(a, b)\n  [a, b]\nend\n");
        assert!(report.is_clean(), "{:?}", report.problems);
        assert_eq!(report.file, PathBuf::from("sample.rb"));
    }

    #[test]
    fn test_missing_final_newline() {
        let report = check("puts 1");
        assert_eq!(report.problems.len(), 1);

        let problem = &report.problems[0];
        assert_eq!(problem.kind(), ProblemKind::TrailingNewlines);
        assert_eq!(problem.line(), Position::Eof);
        assert_eq!(
            problem.detail().get("actual_trailing_newlines"),
            Some(&serde_json::Value::from(0))
        );
    }

    #[test]
    fn test_line_problems_precede_file_problems() {
        let report = check("foo(a,b)\nbar[ 1]\n\n");
        let kinds: Vec<ProblemKind> = report.problems.iter().map(|p| p.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ProblemKind::NoSpaceAfterComma,
                ProblemKind::SpaceAfterOpenBracket,
                ProblemKind::TrailingNewlines,
            ]
        );
        assert_eq!(report.problems[0].line(), Position::At(1));
        assert_eq!(report.problems[1].line(), Position::At(2));
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let content = "a ,b  \n( x )\n";
        assert_eq!(check(content), check(content));
    }

    #[test]
    fn test_contract_violation_aborts_run() {
        let events = vec![Event::new(
            EventKind::FileEnd,
            Payload::Indent {
                line: 1,
                previous: 0,
                current: 2,
            },
        )];

        let result = FileCheck::new(&StyleConfig::default())
            .unwrap()
            .run_scanned(Path::new("x.rb"), ["x\n"], &events);
        assert!(matches!(result, Err(RuleError::ContractViolation { .. })));
    }

    #[test]
    fn test_check_path_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("a.rb");
        fs::write(&path, "x = [1,2 ]\n").unwrap();

        let report = FileCheck::check_path(&StyleConfig::default(), &path).unwrap();
        let kinds: Vec<ProblemKind> = report.problems.iter().map(|p| p.kind()).collect();
        assert_eq!(
            kinds,
            vec![ProblemKind::NoSpaceAfterComma, ProblemKind::SpaceBeforeClosedBracket]
        );
    }

    #[test]
    fn test_check_path_missing_file() {
        let result = FileCheck::check_path(&StyleConfig::default(), Path::new("/nonexistent.rb"));
        assert!(matches!(result, Err(TailorError::Io(_))));
    }

    #[test]
    fn test_invalid_style_rejected_at_construction() {
        let style = StyleConfig {
            trailing_newlines: Some(-1),
            ..StyleConfig::default()
        };
        assert!(FileCheck::new(&style).is_err());
    }
}
