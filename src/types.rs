#![forbid(unsafe_code)]

//! Core domain types for Tailor
//!
//! This module defines the fundamental types used throughout the Tailor system.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Identifies which check raised a problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemKind {
    TrailingNewlines,
    TrailingWhitespace,
    MoreThanOneSpaceAfterComma,
    NoSpaceAfterComma,
    SpaceBeforeComma,
    SpaceAfterOpenParenthesis,
    SpaceAfterOpenBracket,
    SpaceBeforeClosedParenthesis,
    SpaceBeforeClosedBracket,
}

impl ProblemKind {
    /// Returns the snake_case name used in configuration and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemKind::TrailingNewlines => "trailing_newlines",
            ProblemKind::TrailingWhitespace => "trailing_whitespace",
            ProblemKind::MoreThanOneSpaceAfterComma => "more_than_one_space_after_comma",
            ProblemKind::NoSpaceAfterComma => "no_space_after_comma",
            ProblemKind::SpaceBeforeComma => "space_before_comma",
            ProblemKind::SpaceAfterOpenParenthesis => "space_after_open_parenthesis",
            ProblemKind::SpaceAfterOpenBracket => "space_after_open_bracket",
            ProblemKind::SpaceBeforeClosedParenthesis => "space_before_closed_parenthesis",
            ProblemKind::SpaceBeforeClosedBracket => "space_before_closed_bracket",
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A line or column number, or the end-of-file sentinel
///
/// Whole-file problems have no meaningful line, so they are reported at
/// `<EOF>`. Numbered positions are 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    At(u32),
    Eof,
}

impl Position {
    /// Text used for the end-of-file sentinel
    pub const EOF_MARKER: &'static str = "<EOF>";

    /// Returns the numeric position, if any
    pub fn number(&self) -> Option<u32> {
        match self {
            Position::At(n) => Some(*n),
            Position::Eof => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::At(n) => write!(f, "{}", n),
            Position::Eof => f.write_str(Self::EOF_MARKER),
        }
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Position::At(n) => serializer.serialize_u32(*n),
            Position::Eof => serializer.serialize_str(Self::EOF_MARKER),
        }
    }
}

/// Kinds of events emitted while scanning a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    FileEnd,
    Newline,
    IndentChange,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::FileEnd => "file_end",
            EventKind::Newline => "newline",
            EventKind::IndentChange => "indent_change",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A glob pattern for file matching
///
/// This is a simple wrapper around a string that will be used with the `globset` crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobPattern(String);

impl GlobPattern {
    /// Creates a new GlobPattern
    pub fn new(pattern: impl Into<String>) -> Self {
        GlobPattern(pattern.into())
    }

    /// Returns the pattern as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GlobPattern {
    fn from(pattern: &str) -> Self {
        GlobPattern(pattern.to_string())
    }
}
