#![forbid(unsafe_code)]

//! Single-line spacing checks
//!
//! Each check looks at one raw line of source text and reports whether a
//! fixed pattern occurs in it. Checks are pure and independent of one
//! another; [`SpacingCheck::ALL`] fixes the order in which they run and are
//! reported.
//!
//! "Space" always means U+0020 and "word character" means `[0-9A-Za-z_]`.
//! A terminating `\n` is never part of the text being matched.

use crate::types::ProblemKind;
use regex::Regex;
use std::sync::OnceLock;

/// One of the line-level spacing checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpacingCheck {
    TrailingWhitespace,
    MoreThanOneSpaceAfterComma,
    NoSpaceAfterComma,
    SpaceBeforeComma,
    SpaceAfterOpenParenthesis,
    SpaceAfterOpenBracket,
    SpaceBeforeClosedParenthesis,
    SpaceBeforeClosedBracket,
}

/// Where and why a check fired on a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpacingMatch {
    pub check: SpacingCheck,
    /// 1-indexed character column where the offending text starts
    pub column: u32,
    /// Length in characters of the offending text
    pub length: usize,
    pub description: String,
}

static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

impl SpacingCheck {
    /// Every check, in evaluation and reporting order
    pub const ALL: [SpacingCheck; 8] = [
        SpacingCheck::TrailingWhitespace,
        SpacingCheck::MoreThanOneSpaceAfterComma,
        SpacingCheck::NoSpaceAfterComma,
        SpacingCheck::SpaceBeforeComma,
        SpacingCheck::SpaceAfterOpenParenthesis,
        SpacingCheck::SpaceAfterOpenBracket,
        SpacingCheck::SpaceBeforeClosedParenthesis,
        SpacingCheck::SpaceBeforeClosedBracket,
    ];

    /// The problem kind reported when this check fires
    pub fn kind(&self) -> ProblemKind {
        match self {
            SpacingCheck::TrailingWhitespace => ProblemKind::TrailingWhitespace,
            SpacingCheck::MoreThanOneSpaceAfterComma => ProblemKind::MoreThanOneSpaceAfterComma,
            SpacingCheck::NoSpaceAfterComma => ProblemKind::NoSpaceAfterComma,
            SpacingCheck::SpaceBeforeComma => ProblemKind::SpaceBeforeComma,
            SpacingCheck::SpaceAfterOpenParenthesis => ProblemKind::SpaceAfterOpenParenthesis,
            SpacingCheck::SpaceAfterOpenBracket => ProblemKind::SpaceAfterOpenBracket,
            SpacingCheck::SpaceBeforeClosedParenthesis => {
                ProblemKind::SpaceBeforeClosedParenthesis
            }
            SpacingCheck::SpaceBeforeClosedBracket => ProblemKind::SpaceBeforeClosedBracket,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// The regular expression this check searches for
    pub fn pattern(&self) -> &'static str {
        match self {
            SpacingCheck::TrailingWhitespace => r"( +|\t+)$",
            SpacingCheck::MoreThanOneSpaceAfterComma => r", {2,}",
            SpacingCheck::NoSpaceAfterComma => r"[0-9A-Za-z_] ?,[0-9A-Za-z_]",
            SpacingCheck::SpaceBeforeComma => r"[0-9A-Za-z_] +,",
            SpacingCheck::SpaceAfterOpenParenthesis => r"\( +",
            SpacingCheck::SpaceAfterOpenBracket => r"\[ +",
            SpacingCheck::SpaceBeforeClosedParenthesis => r" +\)",
            SpacingCheck::SpaceBeforeClosedBracket => r" +\]",
        }
    }

    fn regex(&self) -> &'static Regex {
        let patterns = PATTERNS.get_or_init(|| {
            Self::ALL
                .iter()
                .map(|check| Regex::new(check.pattern()).expect("invalid spacing pattern"))
                .collect()
        });
        &patterns[*self as usize]
    }

    /// Runs the check against one line
    ///
    /// Returns the first offending span, or `None` when the line is clean.
    pub fn find(&self, line: &str) -> Option<SpacingMatch> {
        let text = strip_line_ending(line);

        if *self == SpacingCheck::TrailingWhitespace && is_blank(text) {
            return None;
        }

        let found = self.regex().find(text)?;
        let length = found.as_str().chars().count();
        let column = text[..found.start()].chars().count() + 1;

        Some(SpacingMatch {
            check: *self,
            column: column as u32,
            length,
            description: self.describe(length),
        })
    }

    /// Runs the check and returns only the description of a violation
    pub fn check(&self, line: &str) -> Option<String> {
        self.find(line).map(|found| found.description)
    }

    /// One-line summary of what the check looks for
    pub fn summary(&self) -> String {
        match self {
            SpacingCheck::TrailingWhitespace => "Line ends with spaces or tabs".to_string(),
            _ => self.describe(0),
        }
    }

    fn describe(&self, length: usize) -> String {
        match self {
            SpacingCheck::TrailingWhitespace => {
                format!("Line contains {} trailing whitespace(s)", length)
            }
            SpacingCheck::MoreThanOneSpaceAfterComma => {
                "Line has a comma with > 1 space after it".to_string()
            }
            SpacingCheck::NoSpaceAfterComma => "Line has a comma with 0 spaces after it".to_string(),
            SpacingCheck::SpaceBeforeComma => {
                "Line has at least one space before a comma".to_string()
            }
            SpacingCheck::SpaceAfterOpenParenthesis => {
                "Line has an open parenthesis with spaces after it".to_string()
            }
            SpacingCheck::SpaceAfterOpenBracket => {
                "Line has an open bracket with spaces after it".to_string()
            }
            SpacingCheck::SpaceBeforeClosedParenthesis => {
                "Line has a closed parenthesis with spaces before it".to_string()
            }
            SpacingCheck::SpaceBeforeClosedBracket => {
                "Line has a closed bracket with spaces before it".to_string()
            }
        }
    }
}

/// Removes one terminating `\n`, if present
pub fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n').unwrap_or(line)
}

fn is_blank(text: &str) -> bool {
    text.chars().all(|c| c == ' ' || c == '\t')
}

/// Number of trailing spaces or trailing tabs on a line
///
/// Only the final run of a single character class counts: `"x \t\t"` has 2.
/// A line made up entirely of spaces and tabs has none.
pub fn trailing_whitespace_count(line: &str) -> usize {
    SpacingCheck::TrailingWhitespace
        .find(line)
        .map_or(0, |found| found.length)
}

pub fn trailing_whitespace(line: &str) -> Option<String> {
    SpacingCheck::TrailingWhitespace.check(line)
}

pub fn more_than_one_space_after_comma(line: &str) -> Option<String> {
    SpacingCheck::MoreThanOneSpaceAfterComma.check(line)
}

pub fn no_space_after_comma(line: &str) -> Option<String> {
    SpacingCheck::NoSpaceAfterComma.check(line)
}

pub fn space_before_comma(line: &str) -> Option<String> {
    SpacingCheck::SpaceBeforeComma.check(line)
}

pub fn space_after_open_parenthesis(line: &str) -> Option<String> {
    SpacingCheck::SpaceAfterOpenParenthesis.check(line)
}

pub fn space_after_open_bracket(line: &str) -> Option<String> {
    SpacingCheck::SpaceAfterOpenBracket.check(line)
}

pub fn space_before_closed_parenthesis(line: &str) -> Option<String> {
    SpacingCheck::SpaceBeforeClosedParenthesis.check(line)
}

pub fn space_before_closed_bracket(line: &str) -> Option<String> {
    SpacingCheck::SpaceBeforeClosedBracket.check(line)
}
