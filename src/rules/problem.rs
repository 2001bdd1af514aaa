#![forbid(unsafe_code)]

//! The problem record shared by every rule and check

use crate::types::{Position, ProblemKind};
use serde::Serialize;
use serde_json::{Map, Value};

/// Rule-specific named fields attached to a problem
///
/// Keys iterate in sorted order so serialized output is stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProblemDetail(Map<String, Value>);

impl ProblemDetail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, replacing any earlier value under the same name
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A single detected style problem
///
/// Problems are immutable once created: fields are private and only exposed
/// through accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Problem {
    kind: ProblemKind,
    line: Position,
    column: Position,
    detail: ProblemDetail,
}

impl Problem {
    pub fn new(kind: ProblemKind, line: Position, column: Position, detail: ProblemDetail) -> Self {
        Self {
            kind,
            line,
            column,
            detail,
        }
    }

    /// A problem that applies to the file as a whole
    pub fn at_eof(kind: ProblemKind, detail: ProblemDetail) -> Self {
        Self::new(kind, Position::Eof, Position::Eof, detail)
    }

    pub fn kind(&self) -> ProblemKind {
        self.kind
    }

    pub fn line(&self) -> Position {
        self.line
    }

    pub fn column(&self) -> Position {
        self.column
    }

    pub fn detail(&self) -> &ProblemDetail {
        &self.detail
    }

    /// Human-readable summary built from the kind and detail
    pub fn message(&self) -> String {
        match self.kind {
            ProblemKind::TrailingNewlines => format!(
                "File has {} trailing newline(s), but should have {}",
                self.detail_text("actual_trailing_newlines"),
                self.detail_text("should_have"),
            ),
            _ => match self.detail.get("description").and_then(Value::as_str) {
                Some(description) => description.to_string(),
                None => self.kind.as_str().replace('_', " "),
            },
        }
    }

    fn detail_text(&self, name: &str) -> String {
        match self.detail.get(name) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "?".to_string(),
        }
    }
}
