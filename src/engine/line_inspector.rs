#![forbid(unsafe_code)]

//! Turns spacing check results into problems

use crate::config::StyleConfig;
use crate::rules::{Problem, ProblemDetail};
use crate::spacing::SpacingCheck;
use crate::types::Position;

/// Runs the enabled spacing checks over individual lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineInspector {
    checks: Vec<SpacingCheck>,
}

impl LineInspector {
    /// Creates an inspector; checks always run in their declared order
    pub fn new(checks: impl IntoIterator<Item = SpacingCheck>) -> Self {
        let mut checks: Vec<SpacingCheck> = checks.into_iter().collect();
        checks.sort();
        checks.dedup();
        Self { checks }
    }

    /// An inspector running every spacing check
    pub fn all() -> Self {
        Self::new(SpacingCheck::ALL)
    }

    pub fn from_style(style: &StyleConfig) -> Self {
        Self::new(style.enabled_checks())
    }

    pub fn checks(&self) -> &[SpacingCheck] {
        &self.checks
    }

    /// Inspects one line, returning a problem per check that fires
    pub fn inspect(&self, line_number: u32, line: &str) -> Vec<Problem> {
        self.checks
            .iter()
            .filter_map(|check| check.find(line))
            .map(|found| {
                let mut detail = ProblemDetail::new().with("description", found.description);
                if found.check == SpacingCheck::TrailingWhitespace {
                    detail = detail.with("trailing_whitespaces", found.length);
                }
                Problem::new(
                    found.check.kind(),
                    Position::At(line_number),
                    Position::At(found.column),
                    detail,
                )
            })
            .collect()
    }

    /// Inspects every line, numbering them from 1
    pub fn inspect_lines<'a>(&self, lines: impl IntoIterator<Item = &'a str>) -> Vec<Problem> {
        lines
            .into_iter()
            .enumerate()
            .flat_map(|(index, line)| self.inspect((index + 1) as u32, line))
            .collect()
    }
}

impl Default for LineInspector {
    fn default() -> Self {
        Self::all()
    }
}
